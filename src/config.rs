use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::api::DEFAULT_MOUNT;
use crate::storage::StoreConfig;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiSection,
    pub store: StoreSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("COMMENTD_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("COMMENTD")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Validated mount point for the comment routes.
    pub fn mount(&self) -> Result<String> {
        let mount = self.api.mount.trim();
        if mount.is_empty() {
            bail!("api.mount must not be empty (use \"/\" to mount at the root)");
        }
        if !mount.starts_with('/') {
            bail!("api.mount must start with '/': {}", mount);
        }
        Ok(mount.to_string())
    }

    /// Resolve the store backend configuration.
    pub fn store_runtime(&self) -> Result<StoreConfig> {
        self.store.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub mount: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            mount: DEFAULT_MOUNT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackendKind,
    pub local: Option<LocalStoreSection>,
}

impl StoreSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            StoreBackendKind::Memory => Ok(StoreConfig::Memory),
            StoreBackendKind::Local => {
                let local = self
                    .local
                    .clone()
                    .context("store.local configuration required when backend is 'local'")?;

                if local.root.trim().is_empty() {
                    bail!("store.local.root must be specified");
                }

                Ok(StoreConfig::Local {
                    root_path: local.root,
                })
            }
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackendKind::Local,
            local: Some(LocalStoreSection::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    Memory,
    #[default]
    Local,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalStoreSection {
    pub root: String,
}

impl Default for LocalStoreSection {
    fn default() -> Self {
        Self {
            root: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
