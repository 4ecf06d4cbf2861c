//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! host processes, toasts, webhooks and the config file.

pub mod config;
pub mod launcher;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use launcher::ProcessLauncher;
pub use notification::{
    BeepNotifier, DesktopNotifier, DiscordNotifier, LineNotifier, SlackNotifier,
};
