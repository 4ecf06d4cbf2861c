//! notificator - send a single notification
//!
//! Delivers one message through a system beep, a desktop popup, or a chat
//! service (Slack and Discord webhooks, LINE Notify).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Typed field validation, notification fields, OS context, config
//! - **Application**: The send use case and port interfaces (traits)
//! - **Infrastructure**: Notifier backends, process launcher, config file
//! - **CLI**: Command-line interface and argument parsing
//!
//! # Example
//!
//! ```no_run
//! use notificator::application::ports::Notifier;
//! use notificator::infrastructure::DesktopNotifier;
//!
//! # async fn run() -> Result<(), notificator::application::ports::NotificationError> {
//! let popup = DesktopNotifier::new("Build finished")?.with_title("CI")?;
//! popup.notify().await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
