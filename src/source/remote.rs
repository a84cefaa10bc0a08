//! Remote HTTP repositories
//!
//! Wire contract: `HEAD <base>/<name>/module.json` probes existence
//! (200 found, 404 not found, anything else is a transport error);
//! `GET <base>/<name>/module.json` and `GET <base>/<name>/config.js`
//! fetch the declaration documents.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::{Result, RiggerError};
use crate::source::ModuleMetadata;

#[derive(Debug, Clone)]
pub struct RemoteRepository {
    url: String,
    client: Client,
}

impl RemoteRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn describe(&self) -> String {
        format!("remote:{}", self.url)
    }

    /// HEAD probe against the module's metadata document.
    ///
    /// A non-404 failure status is a transport error, never coerced into
    /// "not found": a misconfigured repository must abort the search.
    pub fn resolve(&self, name: &str) -> Result<Option<RemoteModule>> {
        let base = format!("{}/{}", self.url.trim_end_matches('/'), name);
        let probe = format!("{}/module.json", base);

        let response = self
            .client
            .head(&probe)
            .send()
            .map_err(|e| transport(&probe, e.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(Some(RemoteModule {
                base,
                client: self.client.clone(),
            })),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(transport(
                &probe,
                format!("server returned status {}", status.as_u16()),
            )),
        }
    }
}

/// A module resolved from a remote repository
#[derive(Debug, Clone)]
pub struct RemoteModule {
    base: String,
    client: Client,
}

impl RemoteModule {
    pub fn info(&self) -> Result<ModuleMetadata> {
        let url = format!("{}/module.json", self.base);
        let data = self.fetch(&url)?;
        serde_json::from_str(&data).map_err(|e| RiggerError::MetadataParse {
            origin: url,
            reason: e.to_string(),
        })
    }

    pub fn config_fragment(&self) -> Result<String> {
        self.fetch(&format!("{}/config.js", self.base))
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(
                url,
                format!("server returned status {}", status.as_u16()),
            ));
        }

        response.text().map_err(|e| transport(url, e.to_string()))
    }
}

fn transport(url: &str, reason: String) -> RiggerError {
    RiggerError::Transport {
        url: url.to_string(),
        reason,
    }
}
