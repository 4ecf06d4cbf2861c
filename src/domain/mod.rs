//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod attribute;
pub mod config;
pub mod desktop;
pub mod error;
pub mod notification;
pub mod system;

// Re-export common types
pub use attribute::{check, AttrType, AttrValue};
pub use config::AppConfig;
pub use error::*;
pub use notification::{MessageNotification, TokenNotification, WebhookNotification};
pub use system::OsKind;
