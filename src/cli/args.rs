// file: src/cli/args.rs
// version: 1.0.0
// guid: 5f7b9d1e-3a4c-4f8d-a0b2-4e6a8c0e2f4e

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "host-bootstrap-agent")]
#[command(about = "Prepare a freshly provisioned host for SSH-driven automation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install packages and establish SSH trust for local automation
    Bootstrap {
        /// Platform identifier (freebsd, rhel, osx; others are a no-op)
        platform: String,

        /// Dotted runtime-version string, e.g. "3.9"
        version: String,

        #[arg(long, help = "Bound the install retry loop instead of retrying forever")]
        max_attempts: Option<u32>,

        #[arg(long, default_value = "10", help = "Seconds between install attempts")]
        retry_delay_secs: u64,

        #[arg(long, help = "Treat an unrecognized platform as an error")]
        strict_platform: bool,

        #[arg(long, help = "Skip package installation")]
        skip_install: bool,

        #[arg(long, help = "Skip the identity bootstrap")]
        skip_identity: bool,

        #[arg(long, help = "Show what would be done without doing it")]
        dry_run: bool,
    },

    /// Resolve and print the package plan for a platform/version pair
    Resolve {
        /// Platform identifier
        platform: String,

        /// Dotted runtime-version string
        version: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Check which external tools the bootstrap needs are present
    CheckPrereqs,
}
