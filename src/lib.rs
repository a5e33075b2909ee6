// file: src/lib.rs
// version: 1.0.0
// guid: 9c4b2f8e-1a7d-4e3c-b5f9-8d0a6c2e4b1f

//! # Host Bootstrap Agent
//!
//! Prepares a freshly provisioned host so a remote automation controller can
//! take over via passwordless SSH. The agent resolves a platform/runtime pair
//! into a package plan, installs it through transient package-manager
//! failures, and idempotently establishes local SSH trust (RSA key pair in
//! legacy PEM format, authorized_keys, known_hosts pre-trust).

pub mod cli;
pub mod error;
pub mod exec;
pub mod identity;
pub mod install;
pub mod logging;
pub mod platform;

pub use error::{BootstrapError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
