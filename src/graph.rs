//! Host/port graph built from parsed hosts.
//!
//! One node per host, one node per port and one edge from each host to each
//! of its ports. Edges to open ports are emphasized. Layout is left to the
//! consumer, so nodes carry no coordinates.

use crate::types::{Host, Port};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Edge colour for open ports.
pub const OPEN_COLOR: &str = "#38bdf8";
/// Edge colour for every other state.
pub const MUTED_COLOR: &str = "#475569";

/// What a node represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Host {
        ip: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        os: Option<String>,
        #[serde(rename = "portCount")]
        port_count: usize,
        #[serde(rename = "openPorts")]
        open_ports: usize,
    },
    Port {
        #[serde(rename = "portId")]
        port_id: u32,
        protocol: String,
        state: String,
        service: String,
        version: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    fn host(id: String, host: &Host) -> Self {
        Self {
            id,
            label: host.ip.clone(),
            kind: NodeKind::Host {
                ip: host.ip.clone(),
                os: host.os.clone(),
                port_count: host.ports.len(),
                open_ports: host.open_port_count(),
            },
        }
    }

    fn port(id: String, port: &Port) -> Self {
        Self {
            id,
            label: port.label(),
            kind: NodeKind::Port {
                port_id: port.port_id,
                protocol: port.protocol.clone(),
                state: port.state.clone(),
                service: port.service.clone(),
                version: port.version.clone(),
            },
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self.kind, NodeKind::Host { .. })
    }
}

/// Host to port relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Set when the target port is open.
    pub emphasized: bool,
}

impl Edge {
    pub fn color(&self) -> &'static str {
        if self.emphasized {
            OPEN_COLOR
        } else {
            MUTED_COLOR
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Build the graph for a parsed report.
    ///
    /// Node ids follow `host-{ip}` and `port-{ip}-{portId}`. Repeated hosts
    /// or ports get a `-2`, `-3`, ... suffix so every id stays unique.
    pub fn from_hosts(hosts: &[Host]) -> Self {
        let mut ids = IdAllocator::default();
        let mut graph = Self::default();

        for host in hosts {
            let host_id = ids.allocate(format!("host-{}", host.ip));
            graph.nodes.push(Node::host(host_id.clone(), host));

            for port in &host.ports {
                let port_id = ids.allocate(format!("port-{}-{}", host.ip, port.port_id));

                graph.edges.push(Edge {
                    id: format!("edge-{}-{}", host_id, port_id),
                    source: host_id.clone(),
                    target: port_id.clone(),
                    emphasized: port.is_open(),
                });
                graph.nodes.push(Node::port(port_id, port));
            }
        }

        graph
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving a node.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Graphviz DOT rendering.
    pub fn dot(&self) -> Dot<'_> {
        Dot(self)
    }
}

/// Display adapter that writes a [`Graph`] as Graphviz DOT.
pub struct Dot<'a>(&'a Graph);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph nmap {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    node [fontname=\"Helvetica\"];")?;

        for node in &self.0.nodes {
            let (shape, label) = match &node.kind {
                NodeKind::Host { ip, os, open_ports, .. } => {
                    let mut label = ip.clone();
                    if let Some(os) = os {
                        label.push('\n');
                        label.push_str(os);
                    }
                    label.push_str(&format!("\n{} open", open_ports));
                    ("box", label)
                }
                NodeKind::Port {
                    port_id,
                    protocol,
                    state,
                    service,
                    ..
                } => {
                    let service = if service.is_empty() { "unknown" } else { service.as_str() };
                    ("ellipse", format!("{}/{}\n{}\n{}", port_id, protocol, service, state))
                }
            };

            writeln!(
                f,
                "    \"{}\" [shape={}, label=\"{}\"];",
                escape(&node.id),
                shape,
                escape(&label)
            )?;
        }

        for edge in &self.0.edges {
            let style = if edge.emphasized { "bold" } else { "solid" };
            writeln!(
                f,
                "    \"{}\" -> \"{}\" [color=\"{}\", style={}];",
                escape(&edge.source),
                escape(&edge.target),
                edge.color(),
                style
            )?;
        }

        writeln!(f, "}}")
    }
}

/// Escape a string for use inside a double-quoted DOT id or label.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Default)]
struct IdAllocator {
    issued: HashSet<String>,
}

impl IdAllocator {
    fn allocate(&mut self, base: String) -> String {
        let mut id = base.clone();
        let mut n = 1;
        while !self.issued.insert(id.clone()) {
            n += 1;
            id = format!("{}-{}", base, n);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> Vec<Host> {
        vec![
            Host::new("10.0.0.1")
                .with_port(Port::new(22, "tcp", "closed", "ssh"))
                .with_port(Port::new(80, "tcp", "open", "http")),
            Host::new("10.0.0.2"),
        ]
    }

    #[test]
    fn test_node_and_edge_counts() {
        let graph = Graph::from_hosts(&hosts());
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.nodes.iter().filter(|n| n.is_host()).count(), 2);
    }

    #[test]
    fn test_ids_and_emphasis() {
        let graph = Graph::from_hosts(&hosts());

        let edges: Vec<_> = graph.edges_from("host-10.0.0.1").collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].target, "port-10.0.0.1-22");
        assert!(!edges[0].emphasized);
        assert_eq!(edges[0].color(), MUTED_COLOR);
        assert_eq!(edges[1].id, "edge-host-10.0.0.1-port-10.0.0.1-80");
        assert!(edges[1].emphasized);
        assert_eq!(edges[1].color(), OPEN_COLOR);

        assert!(graph.node("port-10.0.0.1-80").is_some());
        assert_eq!(graph.edges_from("host-10.0.0.2").count(), 0);
    }

    #[test]
    fn test_duplicate_ids_get_suffixes() {
        let host = Host::new("a")
            .with_port(Port::new(80, "tcp", "open", "http"))
            .with_port(Port::new(80, "tcp", "open", "http"));
        let graph = Graph::from_hosts(&[host.clone(), host]);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "host-a",
                "port-a-80",
                "port-a-80-2",
                "host-a-2",
                "port-a-80-3",
                "port-a-80-4",
            ]
        );
        assert_eq!(graph.edges[2].source, "host-a-2");
    }

    #[test]
    fn test_json_shape() {
        let graph = Graph::from_hosts(&hosts());
        let value = serde_json::to_value(&graph).unwrap();

        assert_eq!(value["nodes"][0]["type"], "host");
        assert_eq!(value["nodes"][0]["openPorts"], 1);
        assert_eq!(value["nodes"][2]["type"], "port");
        assert_eq!(value["nodes"][2]["portId"], 80);
        assert_eq!(value["edges"][1]["emphasized"], true);
    }

    #[test]
    fn test_dot_output() {
        let dot = Graph::from_hosts(&hosts()).dot().to_string();

        assert!(dot.starts_with("digraph nmap {"));
        assert!(dot.contains("\"host-10.0.0.1\" [shape=box, label=\"10.0.0.1\\n1 open\"];"));
        assert!(dot.contains("\"port-10.0.0.1-80\" [shape=ellipse, label=\"80/tcp\\nhttp\\nopen\"];"));
        assert!(dot.contains(
            "\"host-10.0.0.1\" -> \"port-10.0.0.1-80\" [color=\"#38bdf8\", style=bold];"
        ));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        assert_eq!(escape(r#"a "b" \c"#), r#"a \"b\" \\c"#);
    }
}
