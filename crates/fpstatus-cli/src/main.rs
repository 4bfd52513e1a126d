//! fpstatus - Flatpak freshness dashboard CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fpstatus_cli::cmd;
use fpstatus_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let source = cli.source();

    match cli.command {
        Commands::Report => cmd::report::report(&source).await,
        Commands::Info { name } => cmd::info::info(&source, &name).await,
        Commands::Check { names } => {
            let failures = cmd::check::check(&source, &names).await?;
            if failures > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
