//! CLI entry point for the shuffle entropy experiment

use clap::Parser;
use shuffle_entropy::io::cli::{Cli, ReportDriver};
use tracing_subscriber::EnvFilter;

fn main() -> shuffle_entropy::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let driver = ReportDriver::new(&cli);
    let stdout = std::io::stdout();
    driver.run(&mut stdout.lock())?;
    Ok(())
}
