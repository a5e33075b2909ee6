// file: src/platform/release.rs
// version: 1.0.0
// guid: 1e3a5c7d-9b0f-4d2a-8c6e-0b4d6f8a2c4e

//! RHEL release descriptor probing

use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Conventional location of the Red Hat release descriptor
pub const REDHAT_RELEASE_PATH: &str = "/etc/redhat-release";

/// Read the release descriptor, if present
pub fn read_release_descriptor(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            debug!("No release descriptor at {}: {}", path.display(), e);
            None
        }
    }
}

/// Whether the release descriptor names a major-version-8 distribution
pub fn is_major_version_8(release: &str) -> bool {
    // e.g. "Red Hat Enterprise Linux release 8.4 (Ootpa)"
    //      "CentOS Linux release 8.3.2011"
    let pattern = Regex::new(r"release 8(\.|\b)").expect("static regex compiles");
    pattern.is_match(release)
}
