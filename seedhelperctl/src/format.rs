//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors, plus the console
//! implementations of the notification and banner collaborators.

use anyhow::Result;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

use seedhelper_core::config::{active_location, ServerConfig, UploadLocation};
use seedhelper_remote::notify::{BannerFields, BannerRenderer, Notifier, NOTIFY_ERROR_TITLE};

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format the upload location list
pub fn format_locations(locations: &[UploadLocation], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(locations)?),
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct LocationRow {
                #[tabled(rename = "ID")]
                id: String,
                #[tabled(rename = "Directory")]
                directory: String,
                #[tabled(rename = "Label")]
                label: String,
                #[tabled(rename = "Active")]
                active: String,
            }

            let rows: Vec<LocationRow> = locations
                .iter()
                .map(|location| LocationRow {
                    id: location.id.clone().cyan().to_string(),
                    directory: if location.directory.is_empty() {
                        "(server default)".dimmed().to_string()
                    } else {
                        location.directory.clone()
                    },
                    label: if location.label.is_empty() {
                        "-".dimmed().to_string()
                    } else {
                        location.label.clone().yellow().to_string()
                    },
                    active: if location.is_active {
                        "✓".green().bold().to_string()
                    } else {
                        String::new()
                    },
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", "Upload Locations:".bold(), table))
        }
    }
}

/// Format the server configuration, with credentials masked
pub fn format_server_config(config: &ServerConfig, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "serverUrl": config.server_url,
                "username": config.username,
                "authEnabled": config.auth_enabled,
                "passwordSet": !config.password.is_empty(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&"ruTorrent Server Settings".bold().to_string());
            output.push('\n');
            output.push_str(&format!(
                "Server URL: {}",
                if config.server_url.is_empty() {
                    "(not set)".dimmed().to_string()
                } else {
                    config.server_url.cyan().to_string()
                }
            ));
            output.push('\n');
            output.push_str(&format!(
                "Authentication: {}",
                if config.auth_enabled {
                    "Enabled".green().to_string()
                } else {
                    "Disabled".dimmed().to_string()
                }
            ));
            if config.auth_enabled {
                output.push('\n');
                output.push_str(&format!("Username: {}", config.username.cyan()));
                output.push('\n');
                output.push_str(&format!(
                    "Password: {}",
                    if config.password.is_empty() {
                        "(not set)".dimmed().to_string()
                    } else {
                        "********".to_string()
                    }
                ));
            }
            Ok(output)
        }
    }
}

/// Format the one-line status summary
pub fn format_status(config: &ServerConfig, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "configured": config.has_server_url(),
                "serverUrl": config.server_url,
                "authEnabled": config.auth_enabled,
                "locationCount": config.upload_locations.len(),
                "activeLocationId": active_location(&config.upload_locations).map(|l| l.id.clone()),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let mut output = String::new();
            if config.has_server_url() {
                output.push_str(&format!(
                    "{} Ready to upload torrents\n",
                    "●".green().bold()
                ));
                output.push_str(&format!("Server: {}\n", config.server_url.cyan()));
                if config.auth_enabled {
                    output.push_str(&format!("Auth: {}\n", "Enabled".green()));
                }
                match active_location(&config.upload_locations) {
                    Some(location) => output.push_str(&format!(
                        "Active location: {} ({})",
                        location.id.cyan(),
                        location.destination()
                    )),
                    None => output.push_str("Active location: (none)"),
                }
            } else {
                output.push_str(&format!("{} Not configured\n", "●".red().bold()));
                output.push_str("Run 'seedhelperctl server set --url <URL>' to get started.");
            }
            Ok(output)
        }
    }
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

/// Notifier printing to the terminal
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        if title == NOTIFY_ERROR_TITLE {
            eprintln!("{} {}", "✗".red().bold(), message.red());
        } else {
            println!("{}", format_success(message));
        }
    }
}

/// Banner renderer printing the upload summary to the terminal
#[derive(Debug, Default)]
pub struct ConsoleBanner;

impl BannerRenderer for ConsoleBanner {
    fn render(&self, fields: &BannerFields) {
        println!(
            "  {} {}",
            "file:".dimmed(),
            fields.filename
        );
        if !fields.directory.is_empty() {
            println!("  {} {}", "directory:".dimmed(), fields.directory);
        }
        if !fields.label.is_empty() {
            println!("  {} {}", "label:".dimmed(), fields.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<UploadLocation> {
        vec![
            UploadLocation {
                id: "1700000000001".to_string(),
                directory: "/downloads/movies".to_string(),
                label: "movies".to_string(),
                is_active: true,
            },
            UploadLocation {
                id: "1700000000002".to_string(),
                directory: String::new(),
                label: String::new(),
                is_active: false,
            },
        ]
    }

    #[test]
    fn test_format_success() {
        let message = format_success("Operation completed");
        assert!(message.contains("✓"));
        assert!(message.contains("Operation completed"));
    }

    #[test]
    fn test_format_locations_table() {
        let output = format_locations(&sample_locations(), &OutputFormat::Table).unwrap();
        assert!(output.contains("Upload Locations:"));
        assert!(output.contains("1700000000001"));
        assert!(output.contains("/downloads/movies"));
    }

    #[test]
    fn test_format_locations_json() {
        let output = format_locations(&sample_locations(), &OutputFormat::Json).unwrap();
        let parsed: Vec<UploadLocation> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].is_active);
    }

    #[test]
    fn test_format_server_config_masks_password() {
        let config = ServerConfig {
            server_url: "https://seed.example.com".to_string(),
            username: "alice".to_string(),
            password: "s3cret".to_string(),
            auth_enabled: true,
            ..ServerConfig::default()
        };

        let table = format_server_config(&config, &OutputFormat::Table).unwrap();
        assert!(!table.contains("s3cret"));
        assert!(table.contains("********"));

        let json = format_server_config(&config, &OutputFormat::Json).unwrap();
        assert!(!json.contains("s3cret"));
        assert!(json.contains("\"passwordSet\": true"));
    }

    #[test]
    fn test_format_status_unconfigured() {
        let output = format_status(&ServerConfig::default(), &OutputFormat::Table).unwrap();
        assert!(output.contains("Not configured"));
    }
}
