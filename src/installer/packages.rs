//! Package installation via npm
//!
//! Declared packages are installed as dev dependencies of the workspace.
//! This step has external side effects that are not rolled back when a later
//! step of the install fails.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, RiggerError};
use crate::progress;

/// Seam for installing a module's declared packages
pub trait PackageInstaller {
    fn install(&mut self, workspace: &Path, packages: &[String]) -> Result<()>;
}

/// Installs packages with `npm install --save-dev`
pub struct NpmInstaller;

impl PackageInstaller for NpmInstaller {
    fn install(&mut self, workspace: &Path, packages: &[String]) -> Result<()> {
        let spinner = progress::spinner(format!("Installing packages: {}", packages.join(", ")));

        let output = Command::new("npm")
            .arg("install")
            .arg("--save-dev")
            .args(packages)
            .current_dir(workspace)
            .output();

        spinner.finish_and_clear();

        let output = output.map_err(|e| RiggerError::PackageInstallFailed {
            reason: format!("failed to run npm: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(RiggerError::PackageInstallFailed {
                reason: if detail.is_empty() {
                    format!("npm exited with {}", output.status)
                } else {
                    detail.to_string()
                },
            });
        }

        Ok(())
    }
}
