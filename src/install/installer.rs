// file: src/install/installer.rs
// version: 1.0.0
// guid: 9b1d3f5a-7c8e-4f0b-9d2a-8e0c2a4b6d8e

//! Retrying package installer

use super::retry::RetryPolicy;
use crate::exec::CommandRunner;
use crate::platform::PlatformSpec;
use crate::Result;
use tracing::{info, warn};

/// Installs the resolved package plan, retrying the whole command through
/// transient package-manager failures
pub struct PackageInstaller<'a> {
    runner: &'a dyn CommandRunner,
    policy: RetryPolicy,
}

impl<'a> PackageInstaller<'a> {
    pub fn new(runner: &'a dyn CommandRunner, policy: RetryPolicy) -> Self {
        Self { runner, policy }
    }

    /// Install the plan's packages
    ///
    /// An empty plan is an immediate success. On non-zero exit the entire
    /// command is retried from scratch after the policy delay; package
    /// managers treat already-installed packages as a no-op, so re-running
    /// the full command is safe.
    pub async fn install(&self, spec: &PlatformSpec) -> Result<()> {
        let command = match spec.install_command() {
            Some(command) => command,
            None => {
                info!("No packages to install for platform {}", spec.platform);
                return Ok(());
            }
        };

        info!(
            "Installing {} packages for platform {}",
            spec.packages.len(),
            spec.platform
        );

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.runner.execute(&command).await {
                Ok(()) => {
                    info!("Package installation succeeded on attempt {}", attempt);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Package installation attempt {} failed: {}", attempt, e);
                    if !self.policy.allows_another(attempt) {
                        return Err(crate::error::BootstrapError::RetriesExhausted {
                            command,
                            attempts: attempt,
                        });
                    }
                    warn!(
                        "Retrying package installation in {} seconds",
                        self.policy.delay.as_secs()
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{resolve, Platform};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Runner that fails a configured number of times before succeeding
    struct FlakyRunner {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakyRunner {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommandRunner for FlakyRunner {
        async fn execute(&self, command: &str) -> crate::Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(crate::BootstrapError::Process {
                    command: command.to_string(),
                    exit_code: Some(1),
                    stderr: "mirror unreachable".to_string(),
                })
            } else {
                Ok(())
            }
        }

        async fn execute_with_output(&self, _command: &str) -> crate::Result<String> {
            Ok(String::new())
        }

        async fn check_silent(&self, _command: &str) -> crate::Result<bool> {
            Ok(true)
        }
    }

    fn fast_policy(max_attempts: Option<u32>) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_success_on_third_attempt_after_two_sleeps() {
        let runner = FlakyRunner::new(2);
        let installer = PackageInstaller::new(&runner, fast_policy(None));
        let spec = resolve(Platform::Freebsd, "3.9", None);

        tokio::time::pause();
        let start = tokio::time::Instant::now();
        installer.install(&spec).await.unwrap();

        assert_eq!(runner.call_count(), 3);
        // Two failures, so exactly two delay intervals elapsed
        assert_eq!(start.elapsed(), Duration::from_millis(2));
    }

    #[tokio::test]
    async fn test_immediate_success_does_not_sleep() {
        let runner = FlakyRunner::new(0);
        let installer = PackageInstaller::new(&runner, fast_policy(None));
        let spec = resolve(Platform::Osx, "3.9", None);

        tokio::time::pause();
        let start = tokio::time::Instant::now();
        installer.install(&spec).await.unwrap();

        assert_eq!(runner.call_count(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_bounded_policy_surfaces_exhaustion() {
        let runner = FlakyRunner::new(10);
        let installer = PackageInstaller::new(&runner, fast_policy(Some(3)));
        let spec = resolve(Platform::Freebsd, "3.9", None);

        let err = installer.install(&spec).await.unwrap_err();
        assert_eq!(runner.call_count(), 3);
        match err {
            crate::BootstrapError::RetriesExhausted { attempts, .. } => {
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_plan_is_noop_success() {
        let runner = FlakyRunner::new(10);
        let installer = PackageInstaller::new(&runner, fast_policy(Some(1)));
        let spec = resolve(Platform::parse("windows"), "3.9", None);

        installer.install(&spec).await.unwrap();
        assert_eq!(runner.call_count(), 0);
    }
}
