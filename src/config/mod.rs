use crate::hubspot::{AuthScheme, ObjectType, DEFAULT_BASE_URL};
use crate::portal::{Portal, PrepareOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Duplicate portal name: {0}")]
    DuplicatePortalName(String),

    #[error("Duplicate portal id: {0}")]
    DuplicatePortalId(u64),

    #[error("Pair references unknown portal: {0}")]
    UnknownPortal(String),

    #[error("Pair syncs portal {0} onto itself")]
    SelfPair(String),
}

/// One portal as configured
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    pub portal_id: u64,
    pub name: String,
    /// Credential given inline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable holding the credential, used when `api_key` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub auth: AuthScheme,
}

impl PortalConfig {
    /// The credential for this portal, or an empty string when none is set.
    pub fn resolve_api_key(&self) -> String {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return key.clone();
        }
        self.api_key_env
            .as_ref()
            .and_then(|var| std::env::var(var).ok())
            .unwrap_or_default()
    }

    /// Build an unprepared portal handle.
    pub fn to_portal(&self) -> Portal {
        Portal::new(self.portal_id, self.name.clone(), self.resolve_api_key()).with_auth(self.auth)
    }
}

/// Source and target portal names for one sync direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalPair {
    pub source: String,
    pub target: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub portals: Vec<PortalConfig>,
    #[serde(default)]
    pub pairs: Vec<PortalPair>,
    /// Object types synced for every pair, in order
    #[serde(default = "ObjectType::defaults")]
    pub object_types: Vec<ObjectType>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            portals: Vec::new(),
            pairs: Vec::new(),
            object_types: ObjectType::defaults(),
        }
    }
}

impl SyncConfig {
    pub fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Replace the base URL and object types with command line values.
    /// An absent base URL or an empty type list keeps the file's setting.
    pub fn apply_overrides(&mut self, base_url: Option<String>, object_types: &[String]) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if !object_types.is_empty() {
            self.object_types = object_types
                .iter()
                .map(|s| ObjectType::from(s.as_str()))
                .collect();
        }
    }

    /// Check portal uniqueness and that every pair names two distinct,
    /// configured portals.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for portal in &self.portals {
            if !names.insert(portal.name.as_str()) {
                return Err(ConfigError::DuplicatePortalName(portal.name.clone()));
            }
            if !ids.insert(portal.portal_id) {
                return Err(ConfigError::DuplicatePortalId(portal.portal_id));
            }
        }

        for pair in &self.pairs {
            for name in [&pair.source, &pair.target] {
                if !names.contains(name.as_str()) {
                    return Err(ConfigError::UnknownPortal(name.clone()));
                }
            }
            if pair.source == pair.target {
                return Err(ConfigError::SelfPair(pair.source.clone()));
            }
        }

        Ok(())
    }
}

/// Read and validate the configuration file
pub async fn read_config(path: &Path) -> Result<SyncConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).await?;
    let config: SyncConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
