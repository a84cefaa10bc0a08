//! Module sources: local directories and remote HTTP repositories
//!
//! A repository resolves a module name to a handle; the handle yields the
//! module's metadata document (`module.json`) and its configuration fragment
//! (`config.js`). Resolution is a tri-state: found, not found, or a transport
//! error that must abort the whole search.

use serde::Deserialize;

use crate::error::Result;
use crate::registry::RepositoryConfig;

pub mod local;
pub mod remote;

pub use local::{LocalModule, LocalRepository};
pub use remote::{RemoteModule, RemoteRepository};

/// Metadata document of a module (`module.json`)
///
/// `goal` names the pipeline phase the module extends; `tasks` is the subtask
/// sequence registered as the module's unit of work. `excludes` holds glob
/// patterns appended negated to the descriptor's includes array.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModuleMetadata {
    pub goal: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub excludes: Option<Vec<String>>,
}

/// A configured module repository
#[derive(Debug, Clone)]
pub enum Repository {
    Local(LocalRepository),
    Remote(RemoteRepository),
}

impl Repository {
    pub fn from_config(config: &RepositoryConfig) -> Self {
        match config {
            RepositoryConfig::Local { path } => Repository::Local(LocalRepository::new(path)),
            RepositoryConfig::Remote { url } => Repository::Remote(RemoteRepository::new(url)),
        }
    }

    /// Human-readable identity, also used as probe-order display
    pub fn describe(&self) -> String {
        match self {
            Repository::Local(repo) => repo.describe(),
            Repository::Remote(repo) => repo.describe(),
        }
    }

    /// Probe this repository for a module.
    ///
    /// `Ok(None)` means the module does not exist here and the search may
    /// continue; `Err` is a transport failure and aborts the search.
    pub fn resolve(&self, name: &str) -> Result<Option<ModuleHandle>> {
        match self {
            Repository::Local(repo) => Ok(repo.resolve(name).map(ModuleHandle::Local)),
            Repository::Remote(repo) => Ok(repo.resolve(name)?.map(ModuleHandle::Remote)),
        }
    }
}

/// A resolved module, ready to yield its declaration documents
#[derive(Debug, Clone)]
pub enum ModuleHandle {
    Local(LocalModule),
    Remote(RemoteModule),
}

impl ModuleHandle {
    /// Read and parse `module.json`. Fetched fresh on every install.
    pub fn info(&self) -> Result<ModuleMetadata> {
        match self {
            ModuleHandle::Local(module) => module.info(),
            ModuleHandle::Remote(module) => module.info(),
        }
    }

    /// Read `config.js` as an opaque text fragment. No parsing.
    pub fn config_fragment(&self) -> Result<String> {
        match self {
            ModuleHandle::Local(module) => module.config_fragment(),
            ModuleHandle::Remote(module) => module.config_fragment(),
        }
    }
}
