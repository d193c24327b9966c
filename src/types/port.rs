//! Port records as reported in the port table of a scan report.
//!
//! State and service are kept as the scanner printed them. Nmap has a
//! handful of states (`open`, `closed`, `filtered`, `open|filtered`, ...)
//! but newer versions add more, so nothing here is an enumeration.

use super::ScriptMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State token that marks a port as reachable.
pub const OPEN_STATE: &str = "open";

/// One `<port>/<protocol> <state> <service> [version]` entry of a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    /// Port number (digits before the `/`).
    pub port_id: u32,
    /// Transport protocol token, case preserved.
    pub protocol: String,
    /// Reported state, verbatim.
    pub state: String,
    /// Reported service name, verbatim.
    pub service: String,
    /// Free text after the service column; empty if none was printed.
    #[serde(default)]
    pub version: String,
    /// Output of scripts that ran against this port.
    #[serde(default, skip_serializing_if = "ScriptMap::is_empty")]
    pub scripts: ScriptMap,
}

impl Port {
    /// Create a port with no version text and no script output.
    pub fn new(
        port_id: u32,
        protocol: impl Into<String>,
        state: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            port_id,
            protocol: protocol.into(),
            state: state.into(),
            service: service.into(),
            version: String::new(),
            scripts: ScriptMap::new(),
        }
    }

    /// Set the version text.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add a script result.
    pub fn with_script(mut self, name: impl Into<String>, output: impl Into<String>) -> Self {
        self.scripts.insert(name, output);
        self
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.state == OPEN_STATE
    }

    /// `80/tcp` style label.
    pub fn label(&self) -> String {
        format!("{}/{}", self.port_id, self.protocol)
    }

    /// Service name, or `unknown` when the scanner left it blank.
    pub fn service_or_unknown(&self) -> &str {
        if self.service.is_empty() {
            "unknown"
        } else {
            &self.service
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.label(), self.state, self.service)?;
        if !self.version.is_empty() {
            write!(f, " {}", self.version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_state() {
        assert!(Port::new(80, "tcp", "open", "http").is_open());
        assert!(!Port::new(22, "tcp", "closed", "ssh").is_open());
        assert!(!Port::new(53, "udp", "open|filtered", "domain").is_open());
    }

    #[test]
    fn test_display() {
        let port = Port::new(80, "tcp", "open", "http").with_version("nginx 1.18.0");
        assert_eq!(port.to_string(), "80/tcp open http nginx 1.18.0");
        assert_eq!(Port::new(22, "tcp", "closed", "ssh").to_string(), "22/tcp closed ssh");
    }

    #[test]
    fn test_serialization_field_names() {
        let port = Port::new(443, "tcp", "open", "https").with_script("ssl-cert", "CN=example");
        let value = serde_json::to_value(&port).unwrap();
        assert_eq!(value["portId"], 443);
        assert_eq!(value["version"], "");
        assert_eq!(value["scripts"]["ssl-cert"], "CN=example");

        let bare = serde_json::to_value(Port::new(22, "tcp", "open", "ssh")).unwrap();
        assert!(bare.get("scripts").is_none());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let port: Port = serde_json::from_str(
            r#"{"portId":22,"protocol":"tcp","state":"open","service":"ssh"}"#,
        )
        .unwrap();
        assert_eq!(port, Port::new(22, "tcp", "open", "ssh"));
    }
}
