// file: src/install/pip.rs
// version: 1.0.0
// guid: 1d3f5b7c-9e0a-4b2d-8f4c-0a2c4e6b8d0a

//! pip presence check and HTTPS bootstrap
//!
//! Legacy RHEL and FreeBSD ship the runtime without pip. The version probe
//! gates re-execution, so running this twice downloads nothing the second
//! time.

use crate::exec::CommandRunner;
use crate::Result;
use tracing::{debug, info};

/// Fixed bootstrap installer location
pub const PIP_BOOTSTRAP_URL: &str = "https://bootstrap.pypa.io/get-pip.py";

/// Probe command for an interpreter's pip
pub fn probe_command(interpreter: &str) -> String {
    format!("{} -m pip --version >/dev/null 2>&1", interpreter)
}

/// Command that runs the downloaded bootstrap script quietly
pub fn bootstrap_command(interpreter: &str, script_path: &str) -> String {
    format!("{} {} --quiet", interpreter, script_path)
}

/// Ensure pip is available for the given interpreter
///
/// If the version probe fails, downloads the bootstrap installer to a
/// temporary path, executes it quietly, and deletes it.
pub async fn ensure_pip(runner: &dyn CommandRunner, interpreter: &str) -> Result<()> {
    if runner.check_silent(&probe_command(interpreter)).await? {
        debug!("pip already present for {}", interpreter);
        return Ok(());
    }

    info!("pip missing for {}; bootstrapping from {}", interpreter, PIP_BOOTSTRAP_URL);

    let script = download_bootstrap_script().await?;
    let script_path = script.path().to_string_lossy().to_string();
    runner.execute(&bootstrap_command(interpreter, &script_path)).await?;
    // Temp file is deleted when `script` drops

    info!("pip bootstrap completed for {}", interpreter);
    Ok(())
}

/// Download the bootstrap installer over HTTPS to a temporary file
async fn download_bootstrap_script() -> Result<tempfile::NamedTempFile> {
    let client = reqwest::Client::new();
    let response = client.get(PIP_BOOTSTRAP_URL).send().await?;

    if !response.status().is_success() {
        return Err(crate::error::BootstrapError::Network(format!(
            "pip bootstrap download failed with status: {}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    let script = tempfile::Builder::new()
        .prefix("get-pip-")
        .suffix(".py")
        .tempfile()?;
    tokio::fs::write(script.path(), &bytes).await?;

    debug!("Downloaded pip bootstrap to {}", script.path().display());
    Ok(script)
}
