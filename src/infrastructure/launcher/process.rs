//! Launcher backed by real processes and notify-rust

use std::process::Stdio;

use async_trait::async_trait;
use notify_rust::Timeout;
use tokio::process::Command;

use crate::application::ports::{CommandLine, Launcher, NotificationError, Toast};

/// Runs commands with tokio and shows toasts with notify-rust
pub struct ProcessLauncher {
    /// Application name for toasts
    app_name: String,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self {
            app_name: "notificator".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn run(&self, command: &CommandLine) -> Result<(), NotificationError> {
        log::debug!("running: {}", command);

        let status = Command::new(command.program())
            .args(command.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::CommandNotFound(command.program().to_string())
                } else {
                    NotificationError::CommandFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::CommandFailed(format!(
                "{} exited with status: {}",
                command.program(),
                status
            )));
        }

        Ok(())
    }

    async fn toast(&self, toast: &Toast) -> Result<(), NotificationError> {
        let toast = toast.clone();
        let app_name = self.app_name.clone();
        let timeout_ms = u32::try_from(toast.duration.as_millis()).unwrap_or(u32::MAX);

        log::debug!("showing toast: {:?}", toast.title);

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&app_name)
                .body(&toast.message)
                .timeout(Timeout::Milliseconds(timeout_ms));

            if let Some(ref title) = toast.title {
                notification.summary(title);
            }
            if let Some(ref icon) = toast.icon {
                notification.icon(icon);
            }

            notification
                .show()
                .map(drop)
                .map_err(|e| NotificationError::ToastFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::ToastFailed(format!("Task join error: {}", e)))?
    }
}
