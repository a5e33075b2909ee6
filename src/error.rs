// file: src/error.rs
// version: 1.0.0
// guid: 7a1d3e5c-2b9f-4c8a-a6d0-4f2e8b1c9d7e

use thiserror::Error;

/// Result type alias for the agent
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Error types for the host bootstrap agent
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{command}' failed{}: {stderr}",
        exit_code.map(|c| format!(" with exit code {}", c)).unwrap_or_default())]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Key material error: {0}")]
    KeyMaterial(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Retries exhausted after {attempts} attempts: {command}")]
    RetriesExhausted { command: String, attempts: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for BootstrapError {
    fn from(err: reqwest::Error) -> Self {
        BootstrapError::Network(err.to_string())
    }
}

impl BootstrapError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new key material error
    pub fn key_material(msg: impl Into<String>) -> Self {
        Self::KeyMaterial(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_formats_exit_code() {
        let err = BootstrapError::Process {
            command: "pkg install".to_string(),
            exit_code: Some(1),
            stderr: "mirror unreachable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pkg install"));
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("mirror unreachable"));
    }

    #[test]
    fn test_process_error_without_exit_code() {
        let err = BootstrapError::Process {
            command: "ssh-keygen".to_string(),
            exit_code: None,
            stderr: "not found".to_string(),
        };
        assert!(!err.to_string().contains("exit code"));
    }

    #[test]
    fn test_constructor_helpers() {
        assert!(matches!(
            BootstrapError::config("bad"),
            BootstrapError::Config(_)
        ));
        assert!(matches!(
            BootstrapError::network("down"),
            BootstrapError::Network(_)
        ));
        assert!(matches!(
            BootstrapError::key_material("short"),
            BootstrapError::KeyMaterial(_)
        ));
    }
}
