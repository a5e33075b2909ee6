// file: src/identity/trust.rs
// version: 1.0.0
// guid: 7d9f1b3c-5e6a-4d0f-b4c8-6a8e0c2e4a6e

//! Local SSH trust: authorized_keys and known_hosts seeding
//!
//! Each step re-checks its own postcondition, so a re-run after a partial
//! failure completes the missing pieces instead of duplicating lines.

use super::paths::SshPaths;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Build a known-hosts line pre-trusting the local server for one host key
pub fn known_host_line(key_content: &str) -> String {
    format!("localhost {}", key_content.trim())
}

/// Authorize the host's own public key for local login
///
/// Writes the public key verbatim; skipped when authorized_keys already
/// contains it. Returns whether the file was written.
pub async fn ensure_authorized_key(paths: &SshPaths) -> Result<bool> {
    let public_key = tokio::fs::read_to_string(&paths.public_key).await?;

    if let Ok(existing) = tokio::fs::read_to_string(&paths.authorized_keys).await {
        if existing.contains(public_key.trim()) {
            debug!("authorized_keys already contains the host key");
            return Ok(false);
        }
    }

    info!(
        "Authorizing public key in {}",
        paths.authorized_keys.display()
    );
    tokio::fs::write(&paths.authorized_keys, &public_key).await?;
    set_owner_only(&paths.authorized_keys).await?;

    Ok(true)
}

/// Collect the SSH server's host public key files, one per algorithm
pub async fn discover_host_keys(host_key_dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut keys = Vec::new();

    let mut entries = match tokio::fs::read_dir(host_key_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            debug!(
                "Cannot read host key directory {}: {}",
                host_key_dir.display(),
                e
            );
            return Ok(keys);
        }
    };

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("ssh_host_") && name.ends_with("_key.pub") {
            keys.push(entry.path());
        }
    }

    keys.sort();
    Ok(keys)
}

/// Pre-trust the local SSH server in known_hosts
///
/// Appends one `localhost <key>` line per discovered host key file, skipping
/// lines already present. Returns the number of lines appended.
pub async fn ensure_known_hosts(paths: &SshPaths) -> Result<u32> {
    let host_keys = discover_host_keys(&paths.host_key_dir).await?;
    if host_keys.is_empty() {
        debug!(
            "No host keys found under {}",
            paths.host_key_dir.display()
        );
        return Ok(0);
    }

    let existing = tokio::fs::read_to_string(&paths.known_hosts)
        .await
        .unwrap_or_default();

    let mut additions = String::new();
    let mut appended: u32 = 0;
    for key_path in &host_keys {
        let content = tokio::fs::read_to_string(key_path).await?;
        let line = known_host_line(&content);
        if existing.lines().any(|l| l == line) {
            debug!("known_hosts already trusts {}", key_path.display());
            continue;
        }
        additions.push_str(&line);
        additions.push('\n');
        appended += 1;
    }

    if appended > 0 {
        info!(
            "Appending {} localhost entries to {}",
            appended,
            paths.known_hosts.display()
        );
        let mut combined = existing;
        combined.push_str(&additions);
        tokio::fs::write(&paths.known_hosts, combined).await?;
        set_owner_only(&paths.known_hosts).await?;
    }

    Ok(appended)
}

async fn set_owner_only(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
