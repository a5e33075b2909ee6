// file: src/exec/runner.rs
// version: 1.0.0
// guid: 4a6c8e0b-2d4f-4a8c-9e1b-5d7f9a1c3e5b

//! Local command execution for on-host bootstrap

use crate::Result;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

/// Trait for executing host commands, mockable in tests
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute a command, failing on non-zero exit
    async fn execute(&self, command: &str) -> Result<()>;

    /// Execute a command and return captured stdout
    async fn execute_with_output(&self, command: &str) -> Result<String>;

    /// Execute a command as a boolean probe without emitting error logs
    async fn check_silent(&self, command: &str) -> Result<bool>;
}

/// Command runner that shells out on the local host
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, command: &str) -> Result<std::process::Output> {
        debug!("Executing command: {}", command);

        Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| crate::error::BootstrapError::Process {
                command: command.to_string(),
                exit_code: None,
                stderr: format!("Failed to execute command: {}", e),
            })
    }
}

impl Default for LocalRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommandRunner for LocalRunner {
    async fn execute(&self, command: &str) -> Result<()> {
        let output = self.run(command).await?;

        if !output.status.success() {
            let exit_code = output.status.code();
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);

            error!("Command failed with exit code {:?}", exit_code);
            if !stdout.trim().is_empty() {
                error!("STDOUT: {}", stdout);
            }
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(crate::error::BootstrapError::Process {
                command: command.to_string(),
                exit_code,
                stderr: if stderr.is_empty() {
                    stdout.to_string()
                } else {
                    stderr.to_string()
                },
            });
        }

        debug!("Command executed successfully");
        Ok(())
    }

    async fn execute_with_output(&self, command: &str) -> Result<String> {
        let output = self.run(command).await?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(crate::error::BootstrapError::Process {
                command: command.to_string(),
                exit_code: output.status.code(),
                stderr: if stderr.is_empty() {
                    stdout
                } else {
                    stderr.to_string()
                },
            });
        }

        Ok(stdout)
    }

    async fn check_silent(&self, command: &str) -> Result<bool> {
        let output = self.run(command).await?;
        Ok(output.status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_success() {
        let runner = LocalRunner::new();
        assert!(runner.execute("true").await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_failure_carries_exit_code() {
        let runner = LocalRunner::new();
        let err = runner.execute("exit 3").await.unwrap_err();
        match err {
            crate::BootstrapError::Process { exit_code, .. } => {
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_with_output() {
        let runner = LocalRunner::new();
        let out = runner.execute_with_output("echo hello").await.unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[tokio::test]
    async fn test_check_silent() {
        let runner = LocalRunner::new();
        assert!(runner.check_silent("true").await.unwrap());
        assert!(!runner.check_silent("false").await.unwrap());
    }
}
