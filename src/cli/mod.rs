//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `nmapviz parse [FILE]` - Parse scan output and print it in any format
//! - `nmapviz graph [FILE]` - Emit the host/port graph
//! - `nmapviz inspect [FILE] --host <IP>` - Show one host or port in detail
//! - `nmapviz config show|path|reset|set-format` - Manage settings

mod config;
mod graph;
mod inspect;
mod parse;

pub use config::ConfigCommand;
pub use graph::GraphCommand;
pub use inspect::InspectCommand;
pub use parse::ParseCommand;

use crate::error::{CliError, CliResult};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// nmapviz - Turn Nmap console output into a graph you can inspect.
///
/// Reads the normal (human-readable) output of an Nmap run from a file or
/// standard input. Lines that are not host headers, port rows or script
/// output are skipped.
#[derive(Parser, Debug)]
#[command(name = "nmapviz")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse and visualize Nmap scan output", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "NMAPVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse scan output and print the hosts and ports found
    #[command(alias = "p")]
    Parse(ParseCommand),

    /// Build the host/port graph
    #[command(alias = "g")]
    Graph(GraphCommand),

    /// Show details of one host or port
    #[command(alias = "i")]
    Inspect(InspectCommand),

    /// Manage settings
    #[command(alias = "c")]
    Config(ConfigCommand),
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON list of hosts
    Json,
    /// CSV, one row per port
    Csv,
    /// JSON graph of nodes and edges
    Graph,
    /// Graphviz DOT
    Dot,
}

impl OutputFormat {
    /// Whether the output is meant for other programs rather than people.
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Graph => write!(f, "graph"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

/// Read scan output from a file, or from stdin when no path (or `-`) is
/// given.
pub(crate) fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading scan output");
            fs::read_to_string(path).map_err(|e| CliError::Input {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        _ => {
            debug!("reading scan output from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::Input {
                    source_name: "stdin".to_string(),
                    reason: e.to_string(),
                })?;
            Ok(text)
        }
    }
}

/// Write rendered output to a file, or to stdout when no file is given.
pub(crate) fn deliver(content: &str, output_file: Option<&Path>, quiet: bool) -> CliResult<()> {
    match output_file {
        Some(path) => {
            fs::write(path, content).map_err(|e| {
                CliError::Other(format!("failed to write {}: {}", path.display(), e))
            })?;
            if !quiet {
                crate::output::print_success(&format!("Wrote {}", path.display()));
            }
        }
        None => print!("{}", content),
    }
    Ok(())
}
