//! Command execution handlers
//!
//! Server fields persist only on the explicit `server set`; location edits
//! persist immediately, with the exactly-one-active invariant enforced by
//! the configuration mutators.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use seedhelper_core::config::{
    export_json, import_json, validate_server_url, ConfigStore, EXPORT_FILE_NAME,
};
use seedhelper_core::error::ConfigError;
use seedhelper_remote::{probe, Dispatcher};

use crate::client::DaemonClient;
use crate::config::CliConfig;
use crate::format::{format_success, ConsoleBanner, ConsoleNotifier};

use super::commands::*;

/// Handle status command
pub async fn handle_status(store: &ConfigStore, format: &OutputFormat) -> Result<()> {
    let config = store.load()?;
    let formatted = crate::format::format_status(&config, &format.into())?;
    println!("{}", formatted);
    Ok(())
}

/// Handle server commands
pub async fn handle_server(
    store: &ConfigStore,
    command: ServerCommands,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        ServerCommands::Show => {
            let config = store.load()?;
            let formatted = crate::format::format_server_config(&config, &format.into())?;
            println!("{}", formatted);
        }
        ServerCommands::Set {
            url,
            username,
            password,
            auth,
        } => {
            if url.is_none() && username.is_none() && password.is_none() && auth.is_none() {
                return Err(anyhow::anyhow!(
                    "Nothing to change. Pass at least one of --url, --username, --password, --auth"
                ));
            }

            // Validate before touching the stored record; a bad URL leaves
            // the configuration unchanged.
            if let Some(ref url) = url {
                validate_server_url(url)?;
            }

            let mut config = store.load()?;
            if let Some(url) = url {
                config.server_url = url;
            }
            if let Some(username) = username {
                config.username = username;
            }
            if let Some(password) = password {
                config.password = password;
            }
            if let Some(auth) = auth {
                config.auth_enabled = matches!(auth, AuthToggle::On);
            }
            store.save(&config)?;

            println!("{}", format_success("Settings saved successfully!"));
        }
    }

    Ok(())
}

/// Handle the connection test command
pub async fn handle_test(store: &ConfigStore, cli_config: &CliConfig, direct: bool) -> Result<()> {
    let config = store.load()?;
    if !config.has_server_url() {
        return Err(anyhow::anyhow!("Server URL is required"));
    }
    validate_server_url(&config.server_url)?;

    if direct {
        let message = probe(&config).await?;
        println!("{}", format_success(message));
    } else {
        let client = DaemonClient::new(&cli_config.daemon_url, cli_config.timeout)?;
        let response = client.test_connection(&config).await?;
        if !response.success {
            return Err(anyhow::anyhow!(response.message));
        }
        println!("{}", format_success(&response.message));
    }

    Ok(())
}

/// Handle location commands
pub async fn handle_location(
    store: &ConfigStore,
    command: LocationCommands,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        LocationCommands::List => {
            let config = store.load()?;
            let formatted =
                crate::format::format_locations(&config.upload_locations, &format.into())?;
            println!("{}", formatted);
        }
        LocationCommands::Add => {
            let mut config = store.load()?;
            let id = config.add_location();
            store.save(&config)?;
            println!("{}", format_success(&format!("Added location {}", id)));
        }
        LocationCommands::Remove { id } => {
            let mut config = store.load()?;
            config.remove_location(&id)?;
            store.save(&config)?;
            println!("{}", format_success(&format!("Removed location {}", id)));
        }
        LocationCommands::Set {
            id,
            directory,
            label,
        } => {
            if directory.is_none() && label.is_none() {
                return Err(anyhow::anyhow!(
                    "Nothing to change. Pass --directory and/or --label"
                ));
            }
            let mut config = store.load()?;
            config.edit_location(&id, directory, label)?;
            store.save(&config)?;
            println!("{}", format_success(&format!("Updated location {}", id)));
        }
        LocationCommands::Activate { id } => {
            let mut config = store.load()?;
            config.set_active_location(&id)?;
            store.save(&config)?;
            println!("{}", format_success(&format!("Activated location {}", id)));
        }
    }

    Ok(())
}

/// Handle the export command
pub fn handle_export(store: &ConfigStore, output: Option<PathBuf>) -> Result<()> {
    let config = store.load()?;
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    let json = export_json(&config)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format_success(&format!("Configuration exported to {}", path.display()))
    );
    Ok(())
}

/// Handle the import command
///
/// On any validation error the stored configuration is left untouched.
pub fn handle_import(store: &ConfigStore, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = import_json(&content)?;
    store.save(&config)?;

    println!(
        "{}",
        format_success(&format!(
            "Configuration imported ({} upload location(s))",
            config.upload_locations.len()
        ))
    );
    Ok(())
}

/// Handle the upload command (the terminal twin of the context-menu path)
pub async fn handle_upload(store: &ConfigStore, url: &str, location_id: Option<&str>) -> Result<()> {
    let config = store.load()?;
    if !config.has_server_url() {
        return Err(anyhow::anyhow!(
            "{}. Run 'seedhelperctl server set --url <URL>' first",
            ConfigError::ConfigMissing
        ));
    }

    let location = match location_id {
        Some(id) => Some(
            config
                .location_by_id(id)
                .with_context(|| format!("Upload location not found: {}", id))?
                .clone(),
        ),
        None => None,
    };

    let dispatcher = Dispatcher::new(Arc::new(ConsoleNotifier), Arc::new(ConsoleBanner));
    dispatcher
        .upload_from_url(url, &config, location.as_ref())
        .await?;

    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
