//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Tenant/session token used when saving
    #[arg(long, value_name = "TOKEN")]
    tenant_id: Option<String>,

    /// Directory for saved party files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Quiet period before regenerating the party id (ms)
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Delay between a successful save and navigation (ms)
    #[arg(long, value_name = "MS")]
    navigation_delay_ms: Option<u64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    session: SessionOutput,
    store: StoreOutput,
    form: FormOutput,
}

#[derive(Serialize, Debug)]
struct SessionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,
}

#[derive(Serialize, Debug)]
struct StoreOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct FormOutput {
    debounce_ms: u64,
    navigation_delay_ms: u64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.tenant_id.is_none()
            && self.data_dir.is_none()
            && self.debounce_ms.is_none()
            && self.navigation_delay_ms.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --tenant-id, --data-dir, --debounce-ms, or --navigation-delay-ms",
            ));
        }

        // A config that fails to load is reported, never overwritten
        let mut config = load_config()?;

        if let Some(tenant_id) = &self.tenant_id {
            // An empty value clears the stored token
            config.session.tenant_id = Some(tenant_id.clone()).filter(|t| !t.trim().is_empty());
        }

        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.store.data_dir.clone_from(path);
        }

        if let Some(ms) = self.debounce_ms {
            config.form.debounce_ms = ms;
        }
        if let Some(ms) = self.navigation_delay_ms {
            config.form.navigation_delay_ms = ms;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        session: SessionOutput {
            tenant_id: config.tenant_id().map(str::to_string),
        },
        store: StoreOutput {
            data_dir: config.store.data_dir.to_string_lossy().to_string(),
        },
        form: FormOutput {
            debounce_ms: config.form.debounce_ms,
            navigation_delay_ms: config.form.navigation_delay_ms,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("======================");
    println!();

    println!("Session:");
    match config.tenant_id() {
        Some(tenant) => println!("  Tenant Id: {tenant}"),
        None => println!("  Tenant Id: (not configured)"),
    }
    println!();

    println!("Store:");
    println!("  Data Directory: {}", config.store.data_dir.display());
    println!();

    println!("Form:");
    println!("  Debounce: {} ms", config.form.debounce_ms);
    println!("  Navigation Delay: {} ms", config.form.navigation_delay_ms);
    println!();
}
