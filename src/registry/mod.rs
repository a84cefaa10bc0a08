//! Repository registry persisted in the user-level configuration file
//!
//! The registry lives at `$RIGGER_HOME/config.json` (default `~/.rigger/`)
//! and holds an ordered list of repositories. Order is significant: it is
//! both the probe priority during resolution and the display order.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiggerError};
use crate::source::{ModuleHandle, Repository};

/// One configured repository. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryConfig {
    Local { path: PathBuf },
    Remote { url: String },
}

/// Persisted shape: `{ "modules": { "repositories": [ { "kind", "config" } ] } }`
#[derive(Debug, Serialize, Deserialize)]
struct UserConfig {
    modules: ModulesSection,
}

#[derive(Debug, Serialize, Deserialize)]
struct ModulesSection {
    repositories: Vec<RepositoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RepositoryEntry {
    kind: String,
    config: EntryLocation,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EntryLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl RepositoryEntry {
    fn into_config(self) -> Result<RepositoryConfig> {
        match self.kind.as_str() {
            "local" => {
                let path = self.config.path.ok_or_else(|| RiggerError::ConfigInvalid {
                    message: "local repository entry is missing \"path\"".to_string(),
                })?;
                Ok(RepositoryConfig::Local { path })
            }
            "remote" => {
                let url = self.config.url.ok_or_else(|| RiggerError::ConfigInvalid {
                    message: "remote repository entry is missing \"url\"".to_string(),
                })?;
                Ok(RepositoryConfig::Remote { url })
            }
            kind => Err(RiggerError::RepositoryTypeUnknown {
                kind: kind.to_string(),
            }),
        }
    }

    fn from_config(config: &RepositoryConfig) -> Self {
        match config {
            RepositoryConfig::Local { path } => RepositoryEntry {
                kind: "local".to_string(),
                config: EntryLocation {
                    path: Some(path.clone()),
                    url: None,
                },
            },
            RepositoryConfig::Remote { url } => RepositoryEntry {
                kind: "remote".to_string(),
                config: EntryLocation {
                    path: None,
                    url: Some(url.clone()),
                },
            },
        }
    }
}

/// The ordered repository registry with explicit load/save
#[derive(Debug)]
pub struct Registry {
    config_path: PathBuf,
    repositories: Vec<RepositoryConfig>,
}

impl Registry {
    /// Load the registry from `<home>/config.json`, creating the file with
    /// one default local repository (`<home>/modules`) on first access.
    pub fn load(home: &Path) -> Result<Self> {
        fs::create_dir_all(home).map_err(|e| RiggerError::FileWriteFailed {
            path: home.display().to_string(),
            reason: e.to_string(),
        })?;

        let config_path = home.join("config.json");
        if !config_path.exists() {
            let default = Registry {
                config_path: config_path.clone(),
                repositories: vec![RepositoryConfig::Local {
                    path: home.join("modules"),
                }],
            };
            default.save()?;
            return Ok(default);
        }

        let data = fs::read_to_string(&config_path).map_err(|e| RiggerError::FileReadFailed {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;
        let raw: UserConfig =
            serde_json::from_str(&data).map_err(|e| RiggerError::ConfigParseFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let repositories = raw
            .modules
            .repositories
            .into_iter()
            .map(RepositoryEntry::into_config)
            .collect::<Result<Vec<_>>>()?;

        Ok(Registry {
            config_path,
            repositories,
        })
    }

    /// Persist the registry, full rewrite
    pub fn save(&self) -> Result<()> {
        let raw = UserConfig {
            modules: ModulesSection {
                repositories: self
                    .repositories
                    .iter()
                    .map(RepositoryEntry::from_config)
                    .collect(),
            },
        };
        let data = serde_json::to_string_pretty(&raw).map_err(|e| RiggerError::ConfigInvalid {
            message: e.to_string(),
        })?;
        fs::write(&self.config_path, data).map_err(|e| RiggerError::FileWriteFailed {
            path: self.config_path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Repository descriptions in probe order
    pub fn descriptions(&self) -> Vec<String> {
        self.repositories
            .iter()
            .map(|c| Repository::from_config(c).describe())
            .collect()
    }

    /// Append a repository to the end of the probe order
    pub fn add(&mut self, config: RepositoryConfig) {
        self.repositories.push(config);
    }

    /// Remove the first repository equal to `config`. No-op if absent.
    pub fn remove(&mut self, config: &RepositoryConfig) {
        if let Some(pos) = self.repositories.iter().position(|c| c == config) {
            self.repositories.remove(pos);
        }
    }

    /// Resolve a module by probing repositories strictly in persisted order.
    ///
    /// The first match wins and short-circuits the remaining sources. A
    /// not-found probe continues; a transport error aborts the whole search.
    pub fn find_module(&self, name: &str) -> Result<(ModuleHandle, String)> {
        for config in &self.repositories {
            let repository = Repository::from_config(config);
            println!(
                "{}",
                style(format!(
                    "Checking repository {} for module {}",
                    repository.describe(),
                    name
                ))
                .dim()
            );
            if let Some(handle) = repository.resolve(name)? {
                return Ok((handle, repository.describe()));
            }
        }

        Err(RiggerError::ModuleNotFound {
            name: name.to_string(),
        })
    }

    #[cfg(test)]
    fn in_memory(repositories: Vec<RepositoryConfig>) -> Self {
        Registry {
            config_path: PathBuf::from("config.json"),
            repositories,
        }
    }
}
