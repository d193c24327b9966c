use anyhow::Context;
use clap::Parser;
use nmapviz::cli::{Cli, Commands};
use nmapviz::config::AppSettings;
use nmapviz::error::ConfigError;
use nmapviz::output;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout stays clean for JSON, CSV and DOT output.
fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;

    if cli.no_color || !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    debug!(?settings, "starting");

    match &cli.command {
        Commands::Parse(cmd) => cmd.execute(&settings, cli.quiet).context("parse failed"),
        Commands::Graph(cmd) => cmd.execute(cli.quiet).context("graph failed"),
        Commands::Inspect(cmd) => cmd.execute().context("inspect failed"),
        Commands::Config(cmd) => cmd
            .execute(&settings, cli.config.as_deref(), cli.quiet)
            .context("config failed"),
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<AppSettings> {
    if let Some(path) = &cli.config {
        return AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()));
    }

    match AppSettings::load() {
        Ok(settings) => Ok(settings),
        Err(ConfigError::DirectoryNotFound) => {
            if !cli.quiet {
                output::print_warning("No configuration directory; using default settings.");
            }
            Ok(AppSettings::default())
        }
        Err(e) => Err(e).context("loading settings"),
    }
}
