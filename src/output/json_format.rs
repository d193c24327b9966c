//! JSON output formatting.

use crate::graph::Graph;
use crate::types::Host;
use std::io::{self, Write};

/// Write parsed hosts as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, hosts: &[Host]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, hosts)?;
    writeln!(out)
}

/// Write the host/port graph as pretty-printed JSON.
pub fn write_graph_json<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, graph)?;
    writeln!(out)
}
