// file: src/identity/shell.rs
// version: 1.0.0
// guid: 9f1b3d5e-7a8c-4f2b-8d0e-8c0a2e4b6c8a

//! Login shell prompt customization

use crate::platform::Platform;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Fixed prompt written to every bootstrapped host
const PROMPT_LINE: &str = "export PS1=\"[\\u@\\h \\W]\\$ \"";

/// Working-directory line appended on osx, where login sessions land outside
/// the home directory
const OSX_WORKDIR_LINE: &str = "cd \"$HOME\"";

/// Render the .bashrc content for a platform
pub fn bashrc_content(platform: &Platform) -> String {
    let mut content = String::from(PROMPT_LINE);
    content.push('\n');
    if matches!(platform, Platform::Osx) {
        content.push_str(OSX_WORKDIR_LINE);
        content.push('\n');
    }
    content
}

/// Write the prompt customization, skipping the write when already current
pub async fn ensure_login_shell(bashrc: &Path, platform: &Platform) -> Result<bool> {
    let desired = bashrc_content(platform);

    if let Ok(existing) = tokio::fs::read_to_string(bashrc).await {
        if existing == desired {
            debug!("{} already customized", bashrc.display());
            return Ok(false);
        }
    }

    info!("Writing prompt customization to {}", bashrc.display());
    tokio::fs::write(bashrc, desired).await?;
    Ok(true)
}
