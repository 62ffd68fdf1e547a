use anyhow::Context;
use clap::Parser;
use csscgen::cli::{run, Cli};
use tracing::error;

/// Log to stderr so stdout carries only the generated manifest
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %e, "Failed to generate manifest");
        return Err(e).context("genk8s failed");
    }

    Ok(())
}
