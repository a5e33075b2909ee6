// file: src/main.rs
// version: 1.0.0
// guid: 9d1f3b5c-7e8a-4c2d-8f6b-8c0e2a4c6e8a

//! Host Bootstrap Agent - Main entry point

use clap::Parser;
use host_bootstrap_agent::{
    cli::{
        args::{Cli, Commands},
        commands::{bootstrap_command, check_prereqs_command, resolve_command, BootstrapOptions},
    },
    logging::logger,
    Result,
};
use std::time::Duration;
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    // The retry loop has no internal cancellation; Ctrl+C is the supported
    // way to stop a bootstrap that is waiting out a mirror outage.
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting bootstrap...");
    };

    let command_future = async {
        match cli.command {
            Commands::Bootstrap {
                platform,
                version,
                max_attempts,
                retry_delay_secs,
                strict_platform,
                skip_install,
                skip_identity,
                dry_run,
            } => {
                let options = BootstrapOptions {
                    max_attempts,
                    retry_delay: Duration::from_secs(retry_delay_secs),
                    strict_platform,
                    skip_install,
                    skip_identity,
                    dry_run,
                };
                bootstrap_command(&platform, &version, options).await
            }
            Commands::Resolve {
                platform,
                version,
                json,
            } => resolve_command(&platform, &version, json).await,
            Commands::CheckPrereqs => check_prereqs_command().await,
        }
    };

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
