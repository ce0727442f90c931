use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitme::commands::Cli;

fn main() -> Result<()> {
    // Initialize logging on stderr so the TUI alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tokio runtime
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { cli.execute().await })
}
