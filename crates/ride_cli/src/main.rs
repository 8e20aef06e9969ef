mod cli;
mod shell;

use std::io;

use clap::Parser;
use ride_core::RideSharingSystem;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::shell::Shell;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries the menu, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli.into_config();
    info!(
        rides_path = %config.rides_path.display(),
        matching = ?config.matching,
        "starting ride-sharing console"
    );

    let mut system = RideSharingSystem::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run(&mut system)?;
    Ok(())
}
