//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration. A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist configuration, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the defaults to a new file and return its path.
    /// Refuses to overwrite an existing file.
    async fn init(&self) -> Result<PathBuf, ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path().to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await?;
        Ok(self.path())
    }
}
