//! Application layer - Use cases and port interfaces
//!
//! Contains the send operation and trait definitions
//! for external system interactions.

pub mod ports;
pub mod send;

// Re-export use cases
pub use send::{SendCallbacks, SendNotificationUseCase, SendOutput};
