//! Graph subcommand implementation.
//!
//! Handles the `nmapviz graph [FILE]` command.

use crate::cli::{deliver, read_input, OutputFormat};
use crate::error::CliResult;
use crate::graph::Graph;
use crate::output;
use crate::parser::parse;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Build the host/port graph.
#[derive(Parser, Debug)]
pub struct GraphCommand {
    /// File with Nmap normal output (reads stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Graph format
    #[arg(short, long, value_enum, default_value = "dot")]
    pub format: GraphFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

/// Graph output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// Graphviz DOT
    Dot,
    /// JSON nodes and edges
    Json,
}

impl From<GraphFormat> for OutputFormat {
    fn from(format: GraphFormat) -> Self {
        match format {
            GraphFormat::Dot => OutputFormat::Dot,
            GraphFormat::Json => OutputFormat::Graph,
        }
    }
}

impl GraphCommand {
    /// Execute the graph command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        let text = read_input(self.input.as_deref())?;
        let hosts = parse(&text);

        let graph = Graph::from_hosts(&hosts);
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built graph"
        );

        if graph.nodes.is_empty() && !quiet {
            output::print_warning("No hosts found in input; the graph is empty.");
        }

        let content = output::render_to_string(&hosts, self.format.into())?;
        deliver(&content, self.output_file.as_deref(), quiet)
    }
}
