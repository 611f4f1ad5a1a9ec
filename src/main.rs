use anyhow::{Context, Result};
use apkg2json::cli::Cli;
use apkg2json::converter;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_or_exit();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    converter::convert(&cli.input, &cli.output)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    Ok(())
}
