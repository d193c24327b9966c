//! Record selection for the detail view.
//!
//! A selection points at either a whole host or one port of a host, the two
//! things a user can pick out of the graph.

use crate::error::InspectError;
use crate::types::{Host, Port};

/// What to look up in a parsed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Host address (or name, when the report had no address).
    pub ip: String,
    /// Port number within that host.
    pub port: Option<u32>,
    /// Restrict the port match to one protocol.
    pub protocol: Option<String>,
}

impl Query {
    pub fn host(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port: None,
            protocol: None,
        }
    }

    pub fn with_port(mut self, port: u32) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

/// A selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Host(&'a Host),
    Port { host: &'a Host, port: &'a Port },
}

impl<'a> Selection<'a> {
    /// Title shown above the details: the address for hosts, `Port 80/tcp`
    /// for ports.
    pub fn title(&self) -> String {
        match self {
            Self::Host(host) => host.ip.clone(),
            Self::Port { port, .. } => format!("Port {}", port.label()),
        }
    }

    pub fn host(&self) -> &'a Host {
        match *self {
            Self::Host(host) | Self::Port { host, .. } => host,
        }
    }
}

/// Find the record a query names. The first matching host and the first
/// matching port win, mirroring report order.
pub fn select<'a>(hosts: &'a [Host], query: &Query) -> Result<Selection<'a>, InspectError> {
    let host = hosts
        .iter()
        .find(|h| h.ip == query.ip)
        .ok_or_else(|| InspectError::HostNotFound(query.ip.clone()))?;

    let Some(port_id) = query.port else {
        return Ok(Selection::Host(host));
    };

    let port = host
        .find_port(port_id, query.protocol.as_deref())
        .ok_or_else(|| InspectError::PortNotFound {
            ip: host.ip.clone(),
            port: match &query.protocol {
                Some(proto) => format!("{}/{}", port_id, proto),
                None => port_id.to_string(),
            },
        })?;

    Ok(Selection::Port { host, port })
}
