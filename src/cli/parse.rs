//! Parse subcommand implementation.
//!
//! Handles the `nmapviz parse [FILE]` command.

use crate::cli::{deliver, read_input, OutputFormat};
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::parser::parse;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Parse scan output and print the hosts and ports found.
#[derive(Parser, Debug)]
pub struct ParseCommand {
    /// File with Nmap normal output (reads stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Only keep open ports
    #[arg(long)]
    pub open_only: bool,

    /// Keep every port even if the settings say open only
    #[arg(long, conflicts_with = "open_only")]
    pub all_ports: bool,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let text = read_input(self.input.as_deref())?;
        let mut hosts = parse(&text);

        let open_only = self.open_only || (settings.open_only && !self.all_ports);
        if open_only {
            hosts.iter_mut().for_each(|h| h.retain_open());
        }

        let format = self.format.unwrap_or(settings.default_format);
        debug!(%format, open_only, hosts = hosts.len(), "rendering report");

        if hosts.is_empty() && !quiet && format.is_machine_readable() {
            output::print_warning("No hosts found in input.");
        }

        if self.output_file.is_some() {
            console::set_colors_enabled(false);
        }

        let content = output::render_to_string(&hosts, format)?;
        deliver(&content, self.output_file.as_deref(), quiet)
    }
}
