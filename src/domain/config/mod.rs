//! Configuration value objects

mod app_config;

pub use app_config::{
    AppConfig, BeepConfig, DesktopConfig, TokenConfig, WebhookConfig, DEFAULT_BEEP_TIMES,
    DEFAULT_MESSAGE,
};
