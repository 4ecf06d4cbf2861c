//! CLI argument definitions using Clap

use clap::{ArgAction, Args, Parser, Subcommand};

/// notificator - send one notification and exit
#[derive(Parser, Debug)]
#[command(name = "notificator")]
#[command(version)]
#[command(about = "Send a notification: system beep, desktop popup, Slack, Discord or LINE")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ring the system bell
    Beep(BeepArgs),
    /// Show a desktop notification
    Desktop(DesktopArgs),
    /// Post to a Slack incoming webhook
    Slack(WebhookArgs),
    /// Post to a Discord webhook
    Discord(WebhookArgs),
    /// Send through LINE Notify
    Line(LineArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Human readable channel name
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Beep(_) => "beep",
            Self::Desktop(_) => "desktop",
            Self::Slack(_) => "Slack",
            Self::Discord(_) => "Discord",
            Self::Line(_) => "LINE",
            Self::Config { .. } => "config",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BeepArgs {
    /// Number of beeps
    #[arg(short = 't', long, value_name = "TIMES", allow_negative_numbers = true)]
    pub times: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct DesktopArgs {
    /// Notification body
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Notification subtitle
    #[arg(short = 's', long)]
    pub subtitle: Option<String>,

    /// Icon name or path (Linux, Windows)
    #[arg(short = 'i', long)]
    pub icon: Option<String>,

    /// Disable the notification sound (macOS)
    #[arg(long)]
    pub nosound: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WebhookArgs {
    /// Message to post
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Webhook URL (falls back to env and config)
    pub url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LineArgs {
    /// Message to send
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// LINE Notify access token (falls back to env and config)
    pub token: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "message",
    "beep.times",
    "desktop.title",
    "desktop.subtitle",
    "desktop.icon",
    "desktop.sound",
    "slack.url",
    "discord.url",
    "line.token",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
