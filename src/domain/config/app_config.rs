//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Message sent when none is given anywhere
pub const DEFAULT_MESSAGE: &str = "notificator";

/// Default number of beeps
pub const DEFAULT_BEEP_TIMES: i64 = 1;

/// Beep settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeepConfig {
    pub times: Option<i64>,
}

/// Desktop popup settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub sound: Option<bool>,
}

/// Settings of a webhook backend (Slack, Discord).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

/// Settings of a token backend (LINE Notify).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub token: Option<String>,
}

/// Field-wise merge where `other` wins
trait Merge {
    fn merge(self, other: Self) -> Self;
}

impl Merge for BeepConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            times: other.times.or(self.times),
        }
    }
}

impl Merge for DesktopConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            subtitle: other.subtitle.or(self.subtitle),
            icon: other.icon.or(self.icon),
            sound: other.sound.or(self.sound),
        }
    }
}

impl Merge for WebhookConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            url: other.url.or(self.url),
        }
    }
}

impl Merge for TokenConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            token: other.token.or(self.token),
        }
    }
}

fn merge_section<T: Merge>(base: Option<T>, other: Option<T>) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(b.merge(o)),
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub message: Option<String>,
    pub beep: Option<BeepConfig>,
    pub desktop: Option<DesktopConfig>,
    pub slack: Option<WebhookConfig>,
    pub discord: Option<WebhookConfig>,
    pub line: Option<TokenConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            message: Some(DEFAULT_MESSAGE.to_string()),
            beep: Some(BeepConfig {
                times: Some(DEFAULT_BEEP_TIMES),
            }),
            desktop: Some(DesktopConfig {
                sound: Some(true),
                ..Default::default()
            }),
            slack: None,
            discord: None,
            line: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            message: other.message.or(self.message),
            beep: merge_section(self.beep, other.beep),
            desktop: merge_section(self.desktop, other.desktop),
            slack: merge_section(self.slack, other.slack),
            discord: merge_section(self.discord, other.discord),
            line: merge_section(self.line, other.line),
        }
    }

    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    pub fn beep_times_or_default(&self) -> i64 {
        self.beep
            .as_ref()
            .and_then(|b| b.times)
            .unwrap_or(DEFAULT_BEEP_TIMES)
    }

    pub fn desktop_title(&self) -> Option<&str> {
        self.desktop.as_ref().and_then(|d| d.title.as_deref())
    }

    pub fn desktop_subtitle(&self) -> Option<&str> {
        self.desktop.as_ref().and_then(|d| d.subtitle.as_deref())
    }

    pub fn desktop_icon(&self) -> Option<&str> {
        self.desktop.as_ref().and_then(|d| d.icon.as_deref())
    }

    /// Get desktop sound setting, or true if not set
    pub fn desktop_sound_or_default(&self) -> bool {
        self.desktop.as_ref().and_then(|d| d.sound).unwrap_or(true)
    }

    pub fn slack_url(&self) -> Option<&str> {
        self.slack.as_ref().and_then(|s| s.url.as_deref())
    }

    pub fn discord_url(&self) -> Option<&str> {
        self.discord.as_ref().and_then(|d| d.url.as_deref())
    }

    pub fn line_token(&self) -> Option<&str> {
        self.line.as_ref().and_then(|l| l.token.as_deref())
    }
}
