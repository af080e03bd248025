//! Binary crate for the `wttr-bar` Waybar module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging to stderr, keeping stdout for the JSON line
//! - Turning any failure into a message and exit status 1

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
