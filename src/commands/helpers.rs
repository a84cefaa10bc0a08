//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, RiggerError};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| RiggerError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// The user-level configuration directory holding the repository registry.
///
/// `RIGGER_HOME` overrides the default `~/.rigger`.
pub fn rigger_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("RIGGER_HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(".rigger"))
        .ok_or_else(|| RiggerError::IoError {
            message: "Could not determine home directory".to_string(),
        })
}
