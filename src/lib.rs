//! # nmapviz - Nmap Output Parser and Graph Builder
//!
//! nmapviz reads the normal (console) output of an Nmap run and turns it into
//! a list of hosts, each with its ports and script results. From there it
//! can build a host/port graph, show one record in detail, or export the
//! data as JSON, CSV or Graphviz DOT.
//!
//! ## Features
//!
//! - **Forgiving Parser**: unknown lines are skipped, partial output still parses
//! - **Script Output**: `|` blocks are collected per port, in order
//! - **Graph Export**: one node per host and port, open ports emphasized
//! - **Multiple Output Formats**: Plain text, JSON, CSV, graph JSON and DOT
//!
//! ## Example Usage
//!
//! ```rust
//! use nmapviz::{parse, Graph};
//!
//! let report = "\
//! Nmap scan report for router.lan (192.168.1.1)
//! PORT   STATE  SERVICE VERSION
//! 22/tcp closed ssh
//! 80/tcp open   http    lighttpd 1.4.59
//! |_http-title: Login";
//!
//! let hosts = parse(report);
//! assert_eq!(hosts[0].ip, "192.168.1.1");
//! assert_eq!(hosts[0].ports[1].scripts.get("http-title"), Some("Login"));
//!
//! let graph = Graph::from_hosts(&hosts);
//! assert_eq!(graph.edges.iter().filter(|e| e.emphasized).count(), 1);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Host`, `Port` and ordered script output
//! - [`parser`] - The line scanner behind [`parse`]
//! - [`graph`] - Nodes and edges for visualization
//! - [`inspect`] - Selecting a host or port for the detail view
//! - [`config`] - Settings storage
//! - [`error`] - Error types for everything outside the parser
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod inspect;
pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, InspectError};
pub use graph::{Edge, Graph, Node, NodeKind};
pub use inspect::{select, Query, Selection};
pub use parser::parse;
pub use types::{Host, Port, ScriptMap};
