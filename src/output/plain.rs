//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::inspect::Selection;
use crate::types::{Host, Port, ScriptMap};
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Longest version text shown in the port table before truncation.
const VERSION_WIDTH: usize = 40;

/// Write parsed hosts as a human-readable report.
pub fn write_plain<W: Write>(out: &mut W, hosts: &[Host]) -> io::Result<()> {
    // Header
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                    {} Scan Report",
        style("nmapviz").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    let port_count: usize = hosts.iter().map(|h| h.ports.len()).sum();
    let open_count: usize = hosts.iter().map(Host::open_port_count).sum();

    writeln!(
        out,
        "  {} {} hosts, {} ports, {} open",
        style("Summary:").bold(),
        hosts.len(),
        port_count,
        style(open_count).green().bold()
    )?;
    writeln!(out)?;

    if hosts.is_empty() {
        writeln!(out, "  {}", style("No hosts found in input.").dim())?;
    }

    for host in hosts {
        write_host_block(out, host)?;
    }

    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    Ok(())
}

fn write_host_block<W: Write>(out: &mut W, host: &Host) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        style("Host:").bold(),
        style(&host.ip).white().bold()
    )?;
    if let Some(os) = &host.os {
        writeln!(out, "  {} {}", style("OS:").bold(), os)?;
    }

    if host.ports.is_empty() {
        writeln!(out, "    {}", style("No ports to display.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    write_port_table(out, &host.ports)?;
    writeln!(out)?;
    Ok(())
}

fn write_port_table<W: Write>(out: &mut W, ports: &[Port]) -> io::Result<()> {
    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(
        out,
        "  {:>10}  {:<14}  {:<15}  {}",
        style("PORT").bold(),
        style("STATE").bold(),
        style("SERVICE").bold(),
        style("VERSION").bold()
    )?;
    writeln!(out, "  {}", style(THIN_RULE).dim())?;

    for port in ports {
        writeln!(
            out,
            "  {:>10}  {:<14}  {:<15}  {}",
            port.label(),
            state_style(port).apply_to(&port.state),
            port.service_or_unknown(),
            style(truncate_string(&port.version, VERSION_WIDTH)).dim()
        )?;
        write_scripts(out, &port.scripts, "              ")?;
    }

    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    Ok(())
}

/// Script output in Nmap's own `| name: value` shape.
fn write_scripts<W: Write>(out: &mut W, scripts: &ScriptMap, indent: &str) -> io::Result<()> {
    for (name, output) in scripts.iter() {
        let mut lines = output.split('\n');
        writeln!(
            out,
            "{}| {}: {}",
            indent,
            style(name).cyan(),
            lines.next().unwrap_or_default()
        )?;
        for line in lines {
            writeln!(out, "{}|   {}", indent, line)?;
        }
    }
    Ok(())
}

/// Write the details of a single host or port.
pub fn write_selection<W: Write>(out: &mut W, selection: &Selection<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(selection.title()).cyan().bold())?;
    writeln!(out, "{}", style(THIN_RULE).dim())?;

    match selection {
        Selection::Host(host) => {
            writeln!(out, "  {:<12} {}", style("Address:").bold(), host.ip)?;
            writeln!(
                out,
                "  {:<12} {}",
                style("OS:").bold(),
                host.os.as_deref().unwrap_or("unknown")
            )?;
            writeln!(out, "  {:<12} {}", style("Ports:").bold(), host.ports.len())?;
            writeln!(
                out,
                "  {:<12} {}",
                style("Open:").bold(),
                style(host.open_port_count()).green().bold()
            )?;

            if !host.ports.is_empty() {
                writeln!(out)?;
                write_port_table(out, &host.ports)?;
            }
        }
        Selection::Port { host, port } => {
            writeln!(out, "  {:<12} {}", style("Host:").bold(), host.ip)?;
            writeln!(
                out,
                "  {:<12} {}",
                style("State:").bold(),
                state_style(port).apply_to(&port.state)
            )?;
            writeln!(
                out,
                "  {:<12} {}",
                style("Service:").bold(),
                port.service_or_unknown()
            )?;
            if !port.version.is_empty() {
                writeln!(out, "  {:<12} {}", style("Version:").bold(), port.version)?;
            }

            if !port.scripts.is_empty() {
                writeln!(out)?;
                writeln!(out, "  {}", style("Script results").bold())?;
                for (name, output) in port.scripts.iter() {
                    writeln!(out, "    {}", style(name).cyan())?;
                    for line in output.split('\n') {
                        writeln!(out, "      {}", line)?;
                    }
                }
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

fn state_style(port: &Port) -> Style {
    match port.state.as_str() {
        "open" => Style::new().green().bold(),
        "closed" => Style::new().red(),
        "filtered" | "unfiltered" => Style::new().yellow(),
        _ => Style::new().dim(),
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Truncate a string to a maximum number of characters, adding ellipsis if
/// truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{select, Query};

    fn render(hosts: &[Host]) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        write_plain(&mut buf, hosts).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Vec<Host> {
        vec![Host::new("10.0.0.1")
            .with_port(Port::new(22, "tcp", "closed", "ssh"))
            .with_port(
                Port::new(80, "tcp", "open", "http")
                    .with_version("nginx 1.18.0")
                    .with_script("http-title", "Welcome\nsecond line"),
            )]
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("ünïcödé wörld", 8), "ünïcö...");
    }

    #[test]
    fn test_plain_report() {
        let text = render(&sample());
        assert!(text.contains("Summary: 1 hosts, 2 ports, 1 open"));
        assert!(text.contains("Host: 10.0.0.1"));
        assert!(text.contains("80/tcp"));
        assert!(text.contains("nginx 1.18.0"));
        assert!(text.contains("| http-title: Welcome"));
        assert!(text.contains("|   second line"));
    }

    #[test]
    fn test_trailing_empty_script_line_is_rendered() {
        console::set_colors_enabled(false);
        let hosts = vec![Host::new("10.0.0.1")
            .with_port(Port::new(80, "tcp", "open", "http").with_script("banner", "first\n"))];

        let text = render(&hosts);
        assert!(text.contains("| banner: first\n              |   \n"));

        let selection = select(&hosts, &Query::host("10.0.0.1").with_port(80)).unwrap();
        let mut buf = Vec::new();
        write_selection(&mut buf, &selection).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("    banner\n      first\n      \n"));
    }

    #[test]
    fn test_plain_report_empty() {
        let text = render(&[]);
        assert!(text.contains("No hosts found in input."));
    }

    #[test]
    fn test_port_selection_details() {
        console::set_colors_enabled(false);
        let hosts = sample();
        let selection = select(&hosts, &Query::host("10.0.0.1").with_port(80)).unwrap();

        let mut buf = Vec::new();
        write_selection(&mut buf, &selection).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Port 80/tcp"));
        assert!(text.contains("Version:"));
        assert!(text.contains("http-title"));
        assert!(text.contains("      second line"));
    }

    #[test]
    fn test_host_selection_details() {
        console::set_colors_enabled(false);
        let hosts = sample();
        let selection = select(&hosts, &Query::host("10.0.0.1")).unwrap();

        let mut buf = Vec::new();
        write_selection(&mut buf, &selection).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("OS:"));
        assert!(text.contains("unknown"));
        assert!(text.contains("22/tcp"));
    }
}
