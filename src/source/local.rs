//! Local filesystem repositories
//!
//! A local repository is a directory with one subdirectory per module, each
//! holding `module.json` and `config.js`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RiggerError};
use crate::source::ModuleMetadata;

#[derive(Debug, Clone)]
pub struct LocalRepository {
    path: PathBuf,
}

impl LocalRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn describe(&self) -> String {
        format!("local:{}", self.path.display())
    }

    /// Existence check; a missing directory is "not found", never an error
    pub fn resolve(&self, name: &str) -> Option<LocalModule> {
        let dir = self.path.join(name);
        if dir.is_dir() {
            Some(LocalModule { dir })
        } else {
            None
        }
    }
}

/// A module resolved from a local repository
#[derive(Debug, Clone)]
pub struct LocalModule {
    dir: PathBuf,
}

impl LocalModule {
    pub fn info(&self) -> Result<ModuleMetadata> {
        let path = self.dir.join("module.json");
        let data = read_file(&path)?;
        serde_json::from_str(&data).map_err(|e| RiggerError::MetadataParse {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn config_fragment(&self) -> Result<String> {
        read_file(&self.dir.join("config.js"))
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RiggerError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
