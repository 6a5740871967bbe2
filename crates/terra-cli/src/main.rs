use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let config = config::TerraConfig::load(cli.config.as_deref())?;
    let session = commands::Session::new(config, cli.format);
    commands::run_command(cli.command, &session)
}

/// Logs go to stderr so stdout carries only digests.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
