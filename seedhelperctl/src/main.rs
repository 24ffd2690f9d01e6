//! SeedHelper CLI
//!
//! Command-line settings surface for the SeedHelper system.

use anyhow::Result;
use clap::Parser;

use seedhelper_core::config::ConfigStore;
use seedhelperctl::cli::{
    generate_completion, handle_export, handle_import, handle_location, handle_server,
    handle_status, handle_test, handle_upload, Cli, Commands, OutputFormat,
};
use seedhelperctl::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build CLI configuration: defaults → file → env → CLI args
    let mut config = if cli.no_config {
        CliConfig::default()
    } else {
        CliConfig::load().unwrap_or_default()
    };
    config.apply_env_overrides();

    if let Some(ref daemon) = cli.daemon {
        config.daemon_url = daemon.clone();
    }
    if let Some(ref format) = cli.format {
        config.output_format = match format {
            OutputFormat::Table => "table".to_string(),
            OutputFormat::Json => "json".to_string(),
        };
    }
    if let Some(verbose) = cli.verbose {
        config.verbose = verbose;
    }

    let output_format = match config.output_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };
    let verbose = config.verbose;

    if verbose {
        eprintln!("Daemon URL: {}", config.daemon_url);
        eprintln!("Output format: {:?}", output_format);
    }

    // The shared server configuration store, overridable for testing
    let store = match std::env::var("SEEDHELPER_CONFIG") {
        Ok(path) => ConfigStore::with_path(path.into()),
        Err(_) => ConfigStore::new(),
    };

    let result = match cli.command {
        Commands::Status => handle_status(&store, &output_format).await,
        Commands::Server { command } => handle_server(&store, command, &output_format).await,
        Commands::Test { direct } => handle_test(&store, &config, direct).await,
        Commands::Location { command } => handle_location(&store, command, &output_format).await,
        Commands::Export { output } => handle_export(&store, output),
        Commands::Import { path } => handle_import(&store, &path),
        Commands::Upload { url, location } => {
            handle_upload(&store, &url, location.as_deref()).await
        }
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
