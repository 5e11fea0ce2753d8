use crate::{DEFAULT_PAGE_SIZE, DataError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_listen_addr() -> String {
    "127.0.0.1:7171".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_query_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-call budget for store requests, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            page_size: default_page_size(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

pub struct ServiceConfigStore {
    path: PathBuf,
}

impl ServiceConfigStore {
    pub fn new() -> Result<Self, DataError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            DataError::IoError(std::io::Error::other("Could not find config directory"))
        })?;

        let app_dir = config_dir.join("datadeck");
        fs::create_dir_all(&app_dir).map_err(DataError::IoError)?;

        Ok(Self {
            path: app_dir.join("config.json"),
        })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<ServiceConfig, DataError> {
        if !self.path.exists() {
            return Ok(ServiceConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(DataError::IoError)?;
        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| DataError::InvalidConfig(e.to_string()))?;

        Ok(config)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
