// file: src/platform/resolver.rs
// version: 1.0.0
// guid: 3b5d7f9a-1c2e-4f6b-9d0a-2e4c6a8b0d2e

//! Pure mapping from (platform, runtime version) to a package plan

use super::release;
use super::Platform;
use serde::{Deserialize, Serialize};

/// Resolved package plan for one host
///
/// Immutable once resolved; derived purely from the platform identifier, the
/// runtime-version identifier, and (for rhel) the release descriptor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub platform: Platform,
    /// Version token used in package names (dot-stripped on FreeBSD)
    pub version_token: String,
    /// Interpreter the automation runtime will use on this host
    pub interpreter: String,
    pub packages: Vec<String>,
    /// Shell fragment that invokes the package manager non-interactively,
    /// without the package arguments
    pub install_prefix: Option<String>,
    /// Whether pip must be bootstrapped before the runtime is usable
    pub needs_pip_bootstrap: bool,
}

impl PlatformSpec {
    /// Build the full non-interactive install command, if this platform has
    /// any packages to install
    pub fn install_command(&self) -> Option<String> {
        let prefix = self.install_prefix.as_ref()?;
        if self.packages.is_empty() {
            return None;
        }
        Some(format!("{} {}", prefix, self.packages.join(" ")))
    }

    fn empty(platform: Platform, version: &str) -> Self {
        Self {
            platform,
            version_token: version.to_string(),
            interpreter: "python3".to_string(),
            packages: Vec::new(),
            install_prefix: None,
            needs_pip_bootstrap: false,
        }
    }
}

/// Resolve the package plan for a platform and runtime version
///
/// `rhel_release` is the content of the distribution release descriptor and
/// only consulted for [`Platform::Rhel`]; passing `None` selects the legacy
/// path. Pure function: all side effects live in the installer.
pub fn resolve(platform: Platform, version: &str, rhel_release: Option<&str>) -> PlatformSpec {
    match platform {
        Platform::Freebsd => {
            // "3.9" -> "39", the suffix FreeBSD uses in python package names
            let suffix = version.replace('.', "");
            let packages = vec![
                "bash".to_string(),
                "curl".to_string(),
                "gtar".to_string(),
                format!("python{}", suffix),
                format!("py{}-Jinja2", suffix),
                format!("py{}-virtualenv", suffix),
                format!("py{}-cryptography", suffix),
                "sudo".to_string(),
            ];
            PlatformSpec {
                platform: Platform::Freebsd,
                version_token: suffix,
                interpreter: format!("python{}", version),
                packages,
                install_prefix: Some("env ASSUME_ALWAYS_YES=yes pkg install -y".to_string()),
                needs_pip_bootstrap: true,
            }
        }
        Platform::Rhel => {
            let is_rhel8 = rhel_release
                .map(release::is_major_version_8)
                .unwrap_or(false);
            if is_rhel8 {
                PlatformSpec {
                    platform: Platform::Rhel,
                    version_token: version.to_string(),
                    interpreter: "python3".to_string(),
                    packages: vec![
                        // @-prefix selects the module-enabled package path
                        "@python36".to_string(),
                        "gcc".to_string(),
                        "python3-devel".to_string(),
                        "python3-jinja2".to_string(),
                        "python3-virtualenv".to_string(),
                        "python3-cryptography".to_string(),
                        "firewalld".to_string(),
                    ],
                    install_prefix: Some("yum install -y".to_string()),
                    needs_pip_bootstrap: false,
                }
            } else {
                // Legacy RHEL ships a runtime without pip; the installer
                // bootstraps it after the packages land.
                PlatformSpec {
                    platform: Platform::Rhel,
                    version_token: version.to_string(),
                    interpreter: "python".to_string(),
                    packages: vec![
                        "gcc".to_string(),
                        "python-devel".to_string(),
                        "python-virtualenv".to_string(),
                        "python-crypto".to_string(),
                    ],
                    install_prefix: Some("yum install -y".to_string()),
                    needs_pip_bootstrap: true,
                }
            }
        }
        Platform::Osx => {
            // Installed through the runtime's own package installer, not the
            // OS package manager.
            PlatformSpec {
                platform: Platform::Osx,
                version_token: version.to_string(),
                interpreter: "python3".to_string(),
                packages: vec!["ansible".to_string()],
                install_prefix: Some("python3 -m pip install".to_string()),
                needs_pip_bootstrap: false,
            }
        }
        other @ Platform::Other(_) => PlatformSpec::empty(other, version),
    }
}
