// file: src/logging/logger.rs
// version: 1.0.0
// guid: 2d6f8a0c-4e1b-4a7d-9c3e-5f8b0d2a6c4e

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::BootstrapError::Config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_default() {
        // The subscriber can only be set once per process, so a second call
        // from another test may legitimately fail.
        let result = init_logger(false, false);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_logger_quiet() {
        let result = init_logger(false, true);
        assert!(result.is_ok() || result.is_err());
    }
}
