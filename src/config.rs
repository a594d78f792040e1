use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::catalog::EditionFamily;
use crate::common::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_dir: PathBuf,
    #[serde(default)]
    pub editions: Vec<EditionConfig>,
}

/// One configured catalog edition: the friendly name callers use, the
/// on-disk folder code, and the schema family its files must match.
#[derive(Debug, Clone, Deserialize)]
pub struct EditionConfig {
    pub name: String,
    pub folder: String,
    pub family: EditionFamily,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
