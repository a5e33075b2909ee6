// file: src/identity/paths.rs
// version: 1.0.0
// guid: 3f5b7d9e-1a2c-4d6f-8b0e-2c4a6c8e0b2c

//! Filesystem locations for host key material

use crate::Result;
use std::path::{Path, PathBuf};

/// Conventional directory holding the SSH server's host keys
pub const HOST_KEY_DIR: &str = "/etc/ssh";

/// Paths to every artifact the identity bootstrap touches
///
/// Derived from the home directory by convention; every location is
/// overridable so tests can run against a temporary tree.
#[derive(Debug, Clone)]
pub struct SshPaths {
    pub ssh_dir: PathBuf,
    pub private_key: PathBuf,
    pub public_key: PathBuf,
    pub authorized_keys: PathBuf,
    pub known_hosts: PathBuf,
    pub host_key_dir: PathBuf,
    pub bashrc: PathBuf,
}

impl SshPaths {
    /// Build the conventional layout under the given home directory
    pub fn for_home(home: &Path) -> Self {
        let ssh_dir = home.join(".ssh");
        Self {
            private_key: ssh_dir.join("id_rsa"),
            public_key: ssh_dir.join("id_rsa.pub"),
            authorized_keys: ssh_dir.join("authorized_keys"),
            known_hosts: ssh_dir.join("known_hosts"),
            host_key_dir: PathBuf::from(HOST_KEY_DIR),
            bashrc: home.join(".bashrc"),
            ssh_dir,
        }
    }

    /// Build the layout for the current user's home directory
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            crate::error::BootstrapError::Config("Cannot determine home directory".to_string())
        })?;
        Ok(Self::for_home(&home))
    }

    /// Override the host key directory (tests, non-standard sshd layouts)
    pub fn with_host_key_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.host_key_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home_layout() {
        let paths = SshPaths::for_home(Path::new("/home/builder"));
        assert_eq!(paths.ssh_dir, Path::new("/home/builder/.ssh"));
        assert_eq!(paths.private_key, Path::new("/home/builder/.ssh/id_rsa"));
        assert_eq!(paths.public_key, Path::new("/home/builder/.ssh/id_rsa.pub"));
        assert_eq!(
            paths.authorized_keys,
            Path::new("/home/builder/.ssh/authorized_keys")
        );
        assert_eq!(
            paths.known_hosts,
            Path::new("/home/builder/.ssh/known_hosts")
        );
        assert_eq!(paths.host_key_dir, Path::new("/etc/ssh"));
        assert_eq!(paths.bashrc, Path::new("/home/builder/.bashrc"));
    }

    #[test]
    fn test_with_host_key_dir_override() {
        let paths =
            SshPaths::for_home(Path::new("/home/builder")).with_host_key_dir("/tmp/ssh-test");
        assert_eq!(paths.host_key_dir, Path::new("/tmp/ssh-test"));
    }
}
