//! Line recognizers for Nmap's normal (console) output.
//!
//! `classify` looks at one line in isolation. Whether a recognized line has
//! any effect depends on the parser's cursor, which lives in `super::parse`.

use crate::types::Port;
use regex::Regex;
use std::sync::LazyLock;

/// `Nmap scan report for <name>` with an optional ` (<address>)` suffix.
static HOST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Nmap scan report for (.*?)(?:\s+\((.*?)\))?$").expect("host line pattern")
});

/// `<digits>/<proto> <state> <service> [version...]`
static PORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)/([a-zA-Z0-9_-]+)\s+([a-zA-Z0-9_-]+)\s+(\S+)(?:\s+(.*))?$")
        .expect("port line pattern")
});

/// `|_key: value` or `| key: value`. Needs whitespace after the colon.
static SCRIPT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|_?\s*([^:]+):\s+(.*)").expect("script line pattern"));

/// `| key:value`. Needs whitespace after the marker instead.
static SCRIPT_LINE_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s+([^:]+):\s*(.*)").expect("plain script line pattern"));

const SCRIPT_MARKER: char = '|';

/// What a single line of scan output means, before cursor state is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Start of a new host block.
    Host(&'a str),
    /// A row of the port table.
    Port(Port),
    /// `name: output` under a port.
    Script { key: &'a str, value: &'a str },
    /// A `|` line that extends the previous script's output.
    Continuation(&'a str),
    /// Anything else: blank lines, headers, banners, footers.
    Ignored,
}

/// Classify a line whose trailing whitespace has already been stripped.
///
/// Rules are tried in a fixed order and the first match wins: host, port
/// (never the `PORT ... STATE` header), script, continuation.
pub(crate) fn classify(line: &str) -> Line<'_> {
    if let Some(ip) = host_line(line) {
        return Line::Host(ip);
    }

    if !is_port_header(line) {
        if let Some(caps) = PORT_LINE.captures(line) {
            // The capture is all digits, so overflow is the only failure.
            let port_id = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            let version = caps.get(5).map_or("", |m| m.as_str());
            let port = Port::new(port_id, &caps[2], &caps[3], &caps[4]);
            return Line::Port(port.with_version(version));
        }
    }

    if let Some(rest) = line.strip_prefix(SCRIPT_MARKER) {
        let caps = SCRIPT_LINE
            .captures(line)
            .or_else(|| SCRIPT_LINE_PLAIN.captures(line));

        return match caps {
            Some(caps) => {
                let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
                    return Line::Ignored;
                };
                Line::Script {
                    key: key.as_str().trim(),
                    value: value.as_str().trim(),
                }
            }
            None => Line::Continuation(rest.trim()),
        };
    }

    Line::Ignored
}

fn host_line(line: &str) -> Option<&str> {
    let caps = HOST_LINE.captures(line)?;
    let address = caps.get(2).map(|m| m.as_str()).filter(|a| !a.is_empty());
    address.or_else(|| caps.get(1).map(|m| m.as_str()))
}

fn is_port_header(line: &str) -> bool {
    line.starts_with("PORT") && line.contains("STATE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_line_prefers_address() {
        assert_eq!(
            classify("Nmap scan report for host.example (10.0.0.5)"),
            Line::Host("10.0.0.5")
        );
        assert_eq!(classify("Nmap scan report for 192.168.1.1"), Line::Host("192.168.1.1"));
    }

    #[test]
    fn test_host_line_empty_parens_falls_back_to_name() {
        assert_eq!(classify("Nmap scan report for box ()"), Line::Host("box"));
    }

    #[test]
    fn test_host_line_needs_a_name() {
        assert_eq!(classify("Nmap scan report for"), Line::Ignored);
        assert_eq!(classify("  Nmap scan report for x"), Line::Ignored);
    }

    #[test]
    fn test_port_line() {
        let Line::Port(port) = classify("80/tcp   open  http    nginx 1.18.0 (Ubuntu)") else {
            panic!("expected a port line");
        };
        assert_eq!(port.port_id, 80);
        assert_eq!(port.protocol, "tcp");
        assert_eq!(port.state, "open");
        assert_eq!(port.service, "http");
        assert_eq!(port.version, "nginx 1.18.0 (Ubuntu)");
    }

    #[test]
    fn test_port_line_without_version() {
        let Line::Port(port) = classify("22/tcp closed ssh") else {
            panic!("expected a port line");
        };
        assert_eq!(port.version, "");
    }

    #[test]
    fn test_port_line_compound_state_is_not_a_port() {
        // `|` is outside the state token's character class.
        assert_eq!(classify("53/udp open|filtered domain"), Line::Ignored);
    }

    #[test]
    fn test_port_number_above_tcp_range_is_kept() {
        let Line::Port(port) = classify("70000/tcp open http") else {
            panic!("expected a port line");
        };
        assert_eq!(port.port_id, 70000);
        assert_eq!(port.service, "http");
    }

    #[test]
    fn test_port_number_overflow_saturates() {
        let Line::Port(port) = classify("99999999999999999999/tcp open http") else {
            panic!("expected a port line");
        };
        assert_eq!(port.port_id, u32::MAX);
    }

    #[test]
    fn test_header_is_not_a_port() {
        assert_eq!(classify("PORT     STATE SERVICE VERSION"), Line::Ignored);
        assert_eq!(classify("PORT STATE SERVICE"), Line::Ignored);
    }

    #[test]
    fn test_port_rule_wins_over_colons() {
        assert!(matches!(
            classify("8080/tcp open http-proxy Werkzeug httpd 2.0.1: dev"),
            Line::Port(_)
        ));
    }

    #[test]
    fn test_script_lines() {
        assert_eq!(
            classify("|_http-title: Welcome"),
            Line::Script {
                key: "http-title",
                value: "Welcome"
            }
        );
        assert_eq!(
            classify("| ssl-cert: Subject: commonName=example.com"),
            Line::Script {
                key: "ssl-cert",
                value: "Subject: commonName=example.com"
            }
        );
    }

    #[test]
    fn test_script_line_with_empty_value() {
        assert_eq!(
            classify("| http-methods:"),
            Line::Script {
                key: "http-methods",
                value: ""
            }
        );
    }

    #[test]
    fn test_continuation_strips_marker_and_indent() {
        assert_eq!(classify("|   continued text"), Line::Continuation("continued text"));
        assert_eq!(classify("|_  last line"), Line::Continuation("_  last line"));
        assert_eq!(classify("|"), Line::Continuation(""));
    }

    #[test]
    fn test_prose_is_ignored() {
        assert_eq!(classify(""), Line::Ignored);
        assert_eq!(classify("Host is up (0.00043s latency)."), Line::Ignored);
        assert_eq!(
            classify("Nmap done: 1 IP address (1 host up) scanned in 0.08 seconds"),
            Line::Ignored
        );
    }
}
