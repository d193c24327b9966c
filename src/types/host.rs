//! Host records, one per `Nmap scan report for ...` block.

use super::Port;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scanned machine and the ports reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Address in parentheses when the report gave one, otherwise the
    /// name the report was announced for.
    pub ip: String,
    /// OS guess. The console grammar never fills this in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Ports in report order, duplicates included.
    #[serde(default)]
    pub ports: Vec<Port>,
}

impl Host {
    /// Create a host with no ports.
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            os: None,
            ports: Vec::new(),
        }
    }

    /// Add a port.
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Ports whose state is `open`.
    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_open())
    }

    pub fn open_port_count(&self) -> usize {
        self.open_ports().count()
    }

    /// First port matching `port_id`, and `protocol` when one is given.
    pub fn find_port(&self, port_id: u32, protocol: Option<&str>) -> Option<&Port> {
        self.ports.iter().find(|p| {
            p.port_id == port_id && protocol.map_or(true, |proto| p.protocol == proto)
        })
    }

    /// Drop every port that is not open.
    pub fn retain_open(&mut self) {
        self.ports.retain(Port::is_open);
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} ports, {} open)",
            self.ip,
            self.ports.len(),
            self.open_port_count()
        )
    }
}
