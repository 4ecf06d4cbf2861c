//! Notification port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::TypeMismatch;
use crate::domain::system::OsKind;

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    #[error("{0} is not implemented for this notifier")]
    NotImplemented(&'static str),

    #[error("{0} is not supported system")]
    UnsupportedOs(String),

    #[error("{0} not found")]
    CommandNotFound(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to show notification: {0}")]
    ToastFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Port for sending one notification
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the notification once.
    ///
    /// # Returns
    /// Ok(()) once the command exited successfully or the request was sent
    async fn notify(&self) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self) -> Result<(), NotificationError> {
        self.as_ref().notify().await
    }
}

/// Capability of notifiers that behave differently per operating system.
///
/// Implementors provide the hooks for the platforms they support; hooks left
/// out report [`NotificationError::NotImplemented`].
#[async_trait]
pub trait OsDispatch: Send + Sync {
    /// Platform captured when the notifier was built
    fn system(&self) -> &OsKind;

    async fn darwin_notify(&self) -> Result<(), NotificationError> {
        Err(NotificationError::NotImplemented("darwin_notify"))
    }

    async fn linux_notify(&self) -> Result<(), NotificationError> {
        Err(NotificationError::NotImplemented("linux_notify"))
    }

    async fn windows_notify(&self) -> Result<(), NotificationError> {
        Err(NotificationError::NotImplemented("windows_notify"))
    }

    /// Route to the hook matching [`OsDispatch::system`].
    /// Unsupported platforms fail without running anything.
    async fn dispatch(&self) -> Result<(), NotificationError> {
        match self.system() {
            OsKind::Darwin => self.darwin_notify().await,
            OsKind::Linux => self.linux_notify().await,
            OsKind::Windows => self.windows_notify().await,
            OsKind::Unsupported(name) => Err(NotificationError::UnsupportedOs(name.clone())),
        }
    }
}
