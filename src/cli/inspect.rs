//! Inspect subcommand implementation.
//!
//! Handles the `nmapviz inspect [FILE] --host <IP>` command.

use crate::cli::read_input;
use crate::error::CliResult;
use crate::inspect::{select, Query};
use crate::output;
use crate::parser::parse;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Show details of one host or one of its ports.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// File with Nmap normal output (reads stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Host address (or name, if the report gave no address)
    #[arg(long, value_name = "IP")]
    pub host: String,

    /// Port number to show instead of the whole host
    #[arg(short, long)]
    pub port: Option<u32>,

    /// Protocol of the port (e.g. tcp, udp)
    #[arg(long, requires = "port")]
    pub protocol: Option<String>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(&self) -> CliResult<()> {
        let text = read_input(self.input.as_deref())?;
        let hosts = parse(&text);

        let query = Query {
            ip: self.host.clone(),
            port: self.port,
            protocol: self.protocol.clone(),
        };
        let selection = select(&hosts, &query)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        output::write_selection(&mut out, &selection)?;
        out.flush()?;
        Ok(())
    }
}
