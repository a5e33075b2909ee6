// file: src/identity/mod.rs
// version: 1.0.0
// guid: 1b3d5f7a-9c0e-4b4d-a6f0-0a2c4e6a8b0c

//! Host identity bootstrap
//!
//! Establishes everything a remote automation controller needs for
//! passwordless local SSH: an RSA key pair in legacy PEM format, an
//! authorized_keys entry, and known_hosts pre-trust of the local server.
//! The bootstrap is a sequence of independently-idempotent steps; each one
//! re-checks its own postcondition, so re-running after a partial failure
//! completes the remaining work.

pub mod keys;
pub mod paths;
pub mod shell;
pub mod trust;

pub use paths::SshPaths;

use crate::exec::CommandRunner;
use crate::platform::Platform;
use crate::Result;
use tracing::info;

/// Run the full identity bootstrap
pub async fn ensure_host_identity(
    runner: &dyn CommandRunner,
    paths: &SshPaths,
    platform: &Platform,
) -> Result<()> {
    let generated = keys::ensure_key_pair(runner, paths).await?;
    let authorized = trust::ensure_authorized_key(paths).await?;
    let trusted = trust::ensure_known_hosts(paths).await?;
    let shell = shell::ensure_login_shell(&paths.bashrc, platform).await?;

    if generated || authorized || trusted > 0 || shell {
        info!(
            "Host identity ready (key generated: {}, authorized: {}, known_hosts entries: {}, shell updated: {})",
            generated, authorized, trusted, shell
        );
    } else {
        info!("Host identity already established; nothing to do");
    }

    Ok(())
}
