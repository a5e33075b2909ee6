// file: src/platform/mod.rs
// version: 1.0.0
// guid: 6d8f0b2c-4e6a-4c8e-a1d3-7f9b1d3f5a7c

//! Platform resolution for the host bootstrap agent
//!
//! Maps a platform identifier and runtime-version identifier to the package
//! plan and post-install fixups the host needs before automation can run.

pub mod release;
pub mod resolver;

pub use resolver::{resolve, PlatformSpec};

use serde::{Deserialize, Serialize};

/// Supported provisioning platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Freebsd,
    Rhel,
    Osx,
    /// Platforms with no special provisioning; packages are skipped but the
    /// identity bootstrap still runs.
    #[serde(untagged)]
    Other(String),
}

impl Platform {
    /// Parse a platform identifier token
    pub fn parse(token: &str) -> Self {
        match token {
            "freebsd" => Platform::Freebsd,
            "rhel" => Platform::Rhel,
            "osx" => Platform::Osx,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Get the platform identifier as a string
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Freebsd => "freebsd",
            Platform::Rhel => "rhel",
            Platform::Osx => "osx",
            Platform::Other(name) => name,
        }
    }

    /// Whether this platform has a package plan at all
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!(Platform::parse("freebsd"), Platform::Freebsd);
        assert_eq!(Platform::parse("rhel"), Platform::Rhel);
        assert_eq!(Platform::parse("osx"), Platform::Osx);
    }

    #[test]
    fn test_parse_unknown_platform_is_passthrough() {
        let platform = Platform::parse("windows");
        assert_eq!(platform, Platform::Other("windows".to_string()));
        assert!(!platform.is_supported());
        assert_eq!(platform.as_str(), "windows");
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["freebsd", "rhel", "osx", "plan9"] {
            assert_eq!(Platform::parse(token).to_string(), token);
        }
    }
}
