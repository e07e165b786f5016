//! Client configuration

use crate::auth::Credentials;
use crate::context::AdoContext;
use crate::error::{AdoError, AdoResult};
use crate::http_client::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Connection settings for an [`AdoClient`](crate::AdoClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Organisation name
    pub tenant: String,

    /// Project identifier
    pub project_id: String,

    /// Account name; basic auth when set, bearer otherwise
    #[serde(default)]
    pub username: Option<String>,

    /// Environment variable holding the token
    pub token_identifier: String,

    /// API host
    #[serde(default = "default_host")]
    pub host: String,

    /// Fixed root replacing `https://{subdomain.}{host}`
    #[serde(default)]
    pub endpoint_override: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ado-governance").join("config.toml"))
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> AdoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> AdoResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> AdoResult<()> {
        if self.tenant.trim().is_empty() {
            return Err(AdoError::Config("tenant must not be empty".into()));
        }
        if self.project_id.trim().is_empty() {
            return Err(AdoError::Config("project_id must not be empty".into()));
        }
        if self.token_identifier.trim().is_empty() {
            return Err(AdoError::Config("token_identifier must not be empty".into()));
        }
        if self.host.trim().is_empty() {
            return Err(AdoError::Config("host must not be empty".into()));
        }
        if let Some(root) = &self.endpoint_override {
            if root.trim().trim_end_matches('/').is_empty() {
                return Err(AdoError::Config("endpoint_override must not be empty".into()));
            }
        }
        if self.timeout_secs == 0 {
            return Err(AdoError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Context described by this config
    pub fn context(&self) -> AdoContext {
        AdoContext::new(&self.tenant, &self.project_id)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve credentials from the environment
    pub fn credentials(&self) -> AdoResult<Credentials> {
        let token = std::env::var(&self.token_identifier)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AdoError::MissingToken(self.token_identifier.clone()))?;

        Ok(match &self.username {
            Some(username) => Credentials::basic(username, token),
            None => Credentials::bearer(token),
        })
    }
}
