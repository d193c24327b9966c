//! CSV output formatting.
//!
//! One row per port. Hosts without ports do not appear.

use crate::types::{Host, ScriptMap};
use std::io::{self, Write};

const HEADER: [&str; 7] = [
    "host", "port", "protocol", "state", "service", "version", "scripts",
];

/// Write parsed hosts in CSV format.
pub fn write_csv<W: Write>(out: W, hosts: &[Host]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    // Write header
    wtr.write_record(HEADER)?;

    // Write results
    for host in hosts {
        for port in &host.ports {
            wtr.write_record([
                host.ip.as_str(),
                port.port_id.to_string().as_str(),
                port.protocol.as_str(),
                port.state.as_str(),
                port.service.as_str(),
                port.version.as_str(),
                join_scripts(&port.scripts).as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// `name=output` pairs separated by `; `.
fn join_scripts(scripts: &ScriptMap) -> String {
    scripts
        .iter()
        .map(|(name, output)| format!("{}={}", name, output))
        .collect::<Vec<_>>()
        .join("; ")
}
