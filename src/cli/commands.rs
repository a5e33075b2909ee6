// file: src/cli/commands.rs
// version: 1.0.0
// guid: 7b9d1f3a-5c6e-4a0b-9d4f-6a8c0e2a4c6e

//! Command implementations for the CLI

use crate::{
    exec::{CommandRunner, LocalRunner},
    identity::{self, SshPaths},
    install::{pip, PackageInstaller, RetryPolicy},
    platform::{release, resolve, Platform, PlatformSpec},
    Result,
};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Options for the bootstrap command
pub struct BootstrapOptions {
    pub max_attempts: Option<u32>,
    pub retry_delay: Duration,
    pub strict_platform: bool,
    pub skip_install: bool,
    pub skip_identity: bool,
    pub dry_run: bool,
}

/// Run the full host bootstrap: packages, then identity
pub async fn bootstrap_command(
    platform_token: &str,
    version: &str,
    options: BootstrapOptions,
) -> Result<()> {
    let platform = Platform::parse(platform_token);

    if !platform.is_supported() {
        if options.strict_platform {
            return Err(crate::error::BootstrapError::UnsupportedPlatform(
                platform_token.to_string(),
            ));
        }
        warn!(
            "Platform '{}' has no package plan; continuing with identity bootstrap only",
            platform_token
        );
    }

    let spec = resolve_for_host(platform.clone(), version);
    info!(
        "Bootstrapping platform {} (runtime {})",
        spec.platform, version
    );

    if options.dry_run {
        report_dry_run(&spec, &options);
        return Ok(());
    }

    let runner = LocalRunner::new();

    if options.skip_install {
        info!("Skipping package installation");
    } else {
        let policy = RetryPolicy {
            max_attempts: options.max_attempts,
            delay: options.retry_delay,
        };
        PackageInstaller::new(&runner, policy).install(&spec).await?;

        if spec.needs_pip_bootstrap {
            pip::ensure_pip(&runner, &spec.interpreter).await?;
        }
    }

    if options.skip_identity {
        info!("Skipping identity bootstrap");
    } else {
        let paths = SshPaths::from_env()?;
        identity::ensure_host_identity(&runner, &paths, &platform).await?;
    }

    info!("Host bootstrap completed; ready for remote automation");
    Ok(())
}

/// Resolve and print the package plan
pub async fn resolve_command(platform_token: &str, version: &str, json: bool) -> Result<()> {
    let spec = resolve_for_host(Platform::parse(platform_token), version);

    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    println!("Platform:    {}", spec.platform);
    println!("Interpreter: {}", spec.interpreter);
    println!(
        "Install:     {}",
        spec.install_command().unwrap_or_else(|| "(none)".to_string())
    );
    println!("Pip needed:  {}", spec.needs_pip_bootstrap);
    Ok(())
}

/// Report which external tools are present
pub async fn check_prereqs_command() -> Result<()> {
    let runner = LocalRunner::new();
    let tools = ["ssh-keygen", "pkg", "yum", "dnf", "pip"];

    let mut missing = Vec::new();
    for tool in tools {
        let present = runner
            .check_silent(&format!("command -v {} >/dev/null 2>&1", tool))
            .await?;
        info!("{:<12} {}", tool, if present { "found" } else { "missing" });
        if !present {
            missing.push(tool);
        }
    }

    // ssh-keygen is the only hard requirement everywhere; the package
    // managers are platform-specific.
    if missing.contains(&"ssh-keygen") {
        return Err(crate::error::BootstrapError::Config(
            "ssh-keygen is required for the identity bootstrap".to_string(),
        ));
    }

    Ok(())
}

/// Resolve the plan, consulting the release descriptor only on rhel
fn resolve_for_host(platform: Platform, version: &str) -> PlatformSpec {
    let release_text = if platform == Platform::Rhel {
        release::read_release_descriptor(Path::new(release::REDHAT_RELEASE_PATH))
    } else {
        None
    };
    resolve(platform, version, release_text.as_deref())
}

fn report_dry_run(spec: &PlatformSpec, options: &BootstrapOptions) {
    match spec.install_command() {
        Some(command) if !options.skip_install => {
            info!("DRY RUN: would run: {}", command);
            if spec.needs_pip_bootstrap {
                info!("DRY RUN: would ensure pip for {}", spec.interpreter);
            }
        }
        _ => info!("DRY RUN: no packages to install"),
    }
    if !options.skip_identity {
        info!("DRY RUN: would ensure key pair, authorized_keys, known_hosts, and .bashrc");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_platform_without_strict_is_dry_run_success() {
        let options = BootstrapOptions {
            max_attempts: Some(1),
            retry_delay: Duration::from_millis(1),
            strict_platform: false,
            skip_install: false,
            skip_identity: true,
            dry_run: true,
        };
        bootstrap_command("windows", "3.9", options).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_platform_with_strict_fails() {
        let options = BootstrapOptions {
            max_attempts: Some(1),
            retry_delay: Duration::from_millis(1),
            strict_platform: true,
            skip_install: true,
            skip_identity: true,
            dry_run: true,
        };
        let err = bootstrap_command("windows", "3.9", options)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::BootstrapError::UnsupportedPlatform(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_command_json_output() {
        resolve_command("freebsd", "3.9", true).await.unwrap();
    }
}
