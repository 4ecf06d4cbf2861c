//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Config file name inside the application directory
const CONFIG_FILE: &str = "config.toml";

/// TOML config file under the platform config directory
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// `<config_dir>/notificator/config.toml`
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("notificator");

        Self {
            path: config_dir.join(CONFIG_FILE),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;
        log::debug!("writing config to {}", self.path.display());

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("notificator"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn parse_toml_sections() {
        let content = r#"
message = "Build finished"

[beep]
times = 3

[desktop]
title = "CI"
sound = false

[slack]
url = "https://hooks.slack.com/services/x"

[line]
token = "secret"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.message_or_default(), "Build finished");
        assert_eq!(config.beep_times_or_default(), 3);
        assert_eq!(config.desktop_title(), Some("CI"));
        assert!(!config.desktop_sound_or_default());
        assert_eq!(config.slack_url(), Some("https://hooks.slack.com/services/x"));
        assert_eq!(config.line_token(), Some("secret"));
    }

    #[test]
    fn parse_toml_rejects_wrong_kinds() {
        let err = XdgConfigStore::parse_toml("[beep]\ntimes = \"three\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("absent.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        let mut config = AppConfig::defaults();
        config.discord = Some(crate::domain::config::WebhookConfig {
            url: Some("https://discord.com/api/webhooks/1/abc".to_string()),
        });
        store.save(&config).await.unwrap();

        assert!(store.exists());
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        let path = store.init().await.unwrap();
        assert_eq!(path, store.path());
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
