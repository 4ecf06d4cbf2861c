//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, BeepConfig, DesktopConfig, TokenConfig, WebhookConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => {
            let path = store.init().await?;
            presenter.success(&format!("Config file created at: {}", path.display()));
            Ok(())
        }
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, display_value(key, value)));
    Ok(())
}

/// Parse `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "message" => config.message = Some(value.to_string()),
        "beep.times" => {
            let times = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Value must be an integer, got '{}'", value),
                })?;
            config.beep.get_or_insert_with(BeepConfig::default).times = Some(times);
        }
        "desktop.title" => desktop(config).title = Some(value.to_string()),
        "desktop.subtitle" => desktop(config).subtitle = Some(value.to_string()),
        "desktop.icon" => desktop(config).icon = Some(value.to_string()),
        "desktop.sound" => {
            let sound = parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
            desktop(config).sound = Some(sound);
        }
        "slack.url" => {
            config.slack.get_or_insert_with(WebhookConfig::default).url = Some(value.to_string())
        }
        "discord.url" => {
            config.discord.get_or_insert_with(WebhookConfig::default).url =
                Some(value.to_string())
        }
        "line.token" => {
            config.line.get_or_insert_with(TokenConfig::default).token = Some(value.to_string())
        }
        _ => ensure_valid_key(key)?,
    }
    Ok(())
}

fn desktop(config: &mut AppConfig) -> &mut DesktopConfig {
    config.desktop.get_or_insert_with(DesktopConfig::default)
}

/// Read the raw value stored for `key`
fn lookup(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "message" => config.message.clone(),
        "beep.times" => config.beep.as_ref().and_then(|b| b.times).map(|n| n.to_string()),
        "desktop.title" => config.desktop_title().map(str::to_string),
        "desktop.subtitle" => config.desktop_subtitle().map(str::to_string),
        "desktop.icon" => config.desktop_icon().map(str::to_string),
        "desktop.sound" => config
            .desktop
            .as_ref()
            .and_then(|d| d.sound)
            .map(|b| b.to_string()),
        "slack.url" => config.slack_url().map(str::to_string),
        "discord.url" => config.discord_url().map(str::to_string),
        "line.token" => config.line_token().map(str::to_string),
        _ => None,
    }
}

/// Value as shown to the user; secrets are masked
fn display_value(key: &str, value: &str) -> String {
    if key == "line.token" {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    match lookup(&config, key) {
        Some(v) => presenter.output(&display_value(key, &v)),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = lookup(&config, key)
            .map(|v| display_value(key, &v))
            .unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask a secret for display (show first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("No"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn mask_secret_long() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_secret_short() {
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn apply_beep_times() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "beep.times", "4").unwrap();
        assert_eq!(config.beep_times_or_default(), 4);
    }

    #[test]
    fn apply_rejects_non_integer_times() {
        let mut config = AppConfig::empty();
        let err = apply_value(&mut config, "beep.times", "four").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(config.beep.is_none());
    }

    #[test]
    fn apply_rejects_non_boolean_sound() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "desktop.sound", "loud").is_err());
        apply_value(&mut config, "desktop.sound", "false").unwrap();
        assert!(!config.desktop_sound_or_default());
    }

    #[test]
    fn apply_and_lookup_strings() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "discord.url", "https://discord.com/api/webhooks/1/a").unwrap();
        apply_value(&mut config, "desktop.title", "CI").unwrap();

        assert_eq!(
            lookup(&config, "discord.url").as_deref(),
            Some("https://discord.com/api/webhooks/1/a")
        );
        assert_eq!(lookup(&config, "desktop.title").as_deref(), Some("CI"));
        assert_eq!(lookup(&config, "slack.url"), None);
    }

    #[test]
    fn token_is_masked_for_display() {
        assert_eq!(display_value("line.token", "0123456789abcdef"), "0123...cdef");
        assert_eq!(display_value("message", "0123456789abcdef"), "0123456789abcdef");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ensure_valid_key("api_key").is_err());
        assert!(ensure_valid_key("line.token").is_ok());
    }
}
