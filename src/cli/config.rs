//! Config subcommand implementation.
//!
//! Handles the `nmapviz config` command for viewing and changing settings.

use crate::cli::OutputFormat;
use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Manage settings.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Restore default settings
    Reset,

    /// Change the default output format
    SetFormat {
        /// New default format
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    /// Execute the config command. `custom` is the `--config` path, if any.
    pub fn execute(
        &self,
        settings: &AppSettings,
        custom: Option<&Path>,
        quiet: bool,
    ) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show => {
                let json = serde_json::to_string_pretty(settings)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{}", json);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", settings_path(custom)?.display());
                Ok(())
            }
            ConfigAction::Reset => self.store(&AppSettings::default(), custom, quiet),
            ConfigAction::SetFormat { format } => {
                let updated = AppSettings {
                    default_format: *format,
                    ..settings.clone()
                };
                self.store(&updated, custom, quiet)
            }
        }
    }

    fn store(&self, settings: &AppSettings, custom: Option<&Path>, quiet: bool) -> CliResult<()> {
        let path = match custom {
            Some(path) => {
                settings.save_to(path)?;
                path.to_path_buf()
            }
            None => settings.save()?,
        };

        if !quiet {
            output::print_success(&format!("Saved settings to {}", path.display()));
        }
        Ok(())
    }
}

fn settings_path(custom: Option<&Path>) -> CliResult<PathBuf> {
    match custom {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::get()?.settings_file()),
    }
}
