//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, CSV and graph output of parsed
//! scan reports. Every formatter writes to any `io::Write`.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::{write_graph_json, write_json};
pub use plain::{
    print_error, print_success, print_warning, write_plain, write_selection,
};

use crate::cli::OutputFormat;
use crate::graph::Graph;
use crate::types::Host;
use std::io::{self, Write};

/// Format parsed hosts according to the specified format.
pub fn write_report<W: Write>(out: &mut W, hosts: &[Host], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(out, hosts),
        OutputFormat::Json => json_format::write_json(out, hosts),
        OutputFormat::Csv => csv_format::write_csv(out, hosts),
        OutputFormat::Graph => json_format::write_graph_json(out, &Graph::from_hosts(hosts)),
        OutputFormat::Dot => write!(out, "{}", Graph::from_hosts(hosts).dot()),
    }
}

/// Render parsed hosts into a string.
pub fn render_to_string(hosts: &[Host], format: OutputFormat) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, hosts, format)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const REPORT: &str = "Nmap scan report for web (10.0.0.5)\n80/tcp open http nginx\n443/tcp closed https";

    #[test]
    fn test_every_format_renders() {
        let hosts = parse(REPORT);
        for format in [
            OutputFormat::Plain,
            OutputFormat::Json,
            OutputFormat::Csv,
            OutputFormat::Graph,
            OutputFormat::Dot,
        ] {
            let text = render_to_string(&hosts, format).unwrap();
            assert!(text.contains("10.0.0.5"), "{} output missing host", format);
        }
    }

    #[test]
    fn test_dot_format() {
        let text = render_to_string(&parse(REPORT), OutputFormat::Dot).unwrap();
        assert!(text.contains("\"host-10.0.0.5\" -> \"port-10.0.0.5-443\""));
    }
}
