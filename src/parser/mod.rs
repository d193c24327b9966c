//! Scan report parser.
//!
//! Turns Nmap's console output into [`Host`] records in one forward pass.
//! The parser is deliberately forgiving: lines it does not recognize are
//! skipped, so partial or noisy output still yields whatever hosts and ports
//! could be read. It never fails and never panics.
//!
//! The only state carried between lines is the host being assembled. The
//! port that script output attaches to is always that host's last port,
//! which also means a new host line leaves no port to attach to.

mod rules;

use crate::types::{Host, Port};
use rules::Line;
use tracing::{debug, trace};

/// Parse raw scan output into hosts, in the order they were reported.
///
/// ```
/// let hosts = nmapviz::parse("Nmap scan report for web (10.0.0.5)\n80/tcp open http nginx");
/// assert_eq!(hosts[0].ip, "10.0.0.5");
/// assert_eq!(hosts[0].ports[0].version, "nginx");
/// ```
pub fn parse(raw_text: &str) -> Vec<Host> {
    let mut hosts = Vec::new();
    let mut current: Option<Host> = None;

    for (index, line) in raw_text.lines().enumerate() {
        let line = line.trim_end();

        match rules::classify(line) {
            Line::Host(ip) => {
                trace!(line = index + 1, ip, "host");
                if let Some(done) = current.replace(Host::new(ip)) {
                    hosts.push(done);
                }
            }
            Line::Port(port) => match current.as_mut() {
                Some(host) => host.ports.push(port),
                None => trace!(line = index + 1, "port outside any host, dropped"),
            },
            Line::Script { key, value } => {
                if let Some(port) = current_port(&mut current) {
                    port.scripts.insert(key, value);
                }
            }
            Line::Continuation(text) => {
                if let Some(port) = current_port(&mut current) {
                    port.scripts.append_to_last(text);
                }
            }
            Line::Ignored => {}
        }
    }

    // No closing marker in the grammar; end of input ends the last host.
    hosts.extend(current);

    debug!(
        hosts = hosts.len(),
        ports = hosts.iter().map(|h| h.ports.len()).sum::<usize>(),
        "parsed scan report"
    );

    hosts
}

fn current_port(current: &mut Option<Host>) -> Option<&mut Port> {
    current.as_mut().and_then(|host| host.ports.last_mut())
}
