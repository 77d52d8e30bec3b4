//! Configuration management for hostrun

pub mod schema;

pub use schema::Config;

use crate::error::{HostrunError, HostrunResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File name of the project-local override
pub const LOCAL_CONFIG_NAME: &str = ".hostrun.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hostrun")
            .join("config.toml")
    }

    /// Walk up from `start` looking for a project-local config
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> HostrunResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> HostrunResult<Config> {
        let table = read_table(path).await?;
        into_config(table, path)
    }

    /// Load the global config with an optional local file merged on top
    pub async fn load_merged(&self, local: Option<&Path>) -> HostrunResult<Config> {
        let Some(local) = local else {
            return self.load().await;
        };

        let mut base = if self.config_path.exists() {
            read_table(&self.config_path).await?
        } else {
            toml::Table::new()
        };

        let overlay = read_table(local).await?;
        merge_tables(&mut base, overlay);
        debug!("Merged local config {}", local.display());

        into_config(base, local)
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> HostrunResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            HostrunError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> HostrunResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HostrunError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_table(path: &Path) -> HostrunResult<toml::Table> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| HostrunError::io(format!("reading config from {}", path.display()), e))?;

    content
        .parse::<toml::Table>()
        .map_err(|e| HostrunError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

fn into_config(table: toml::Table, path: &Path) -> HostrunResult<Config> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| HostrunError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Recursively merge `overlay` into `base`; tables merge, everything else replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
