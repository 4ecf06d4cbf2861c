//! Beep notifier
//!
//! macOS beeps through a single AppleScript call. Linux and Windows have no
//! repeat count, so the bell command runs once per beep with a pause after
//! each one.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandLine, Launcher, NotificationError, Notifier, OsDispatch};
use crate::domain::attribute::AttrValue;
use crate::domain::system::OsKind;
use crate::infrastructure::launcher::ProcessLauncher;

/// Pause after each bell on Linux and Windows
pub const BEEP_INTERVAL: Duration = Duration::from_millis(500);

/// Rings the system bell `times` times
pub struct BeepNotifier {
    times: i64,
    system: OsKind,
    launcher: Arc<dyn Launcher>,
}

impl BeepNotifier {
    /// Create a beep notifier for the current platform.
    ///
    /// Fails with a type mismatch unless `times` is an integer.
    pub fn new(times: impl Into<AttrValue>) -> Result<Self, NotificationError> {
        Ok(Self {
            times: times.into().into_int()?,
            system: OsKind::detect(),
            launcher: Arc::new(ProcessLauncher::new()),
        })
    }

    /// Pin the platform instead of the detected one
    pub fn with_system(mut self, system: OsKind) -> Self {
        self.system = system;
        self
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn times(&self) -> i64 {
        self.times
    }

    pub fn set_times(&mut self, times: impl Into<AttrValue>) -> Result<(), NotificationError> {
        self.times = times.into().into_int()?;
        Ok(())
    }

    /// `osascript` call used on macOS. Receives the count as-is, even zero.
    pub fn darwin_command(&self) -> CommandLine {
        CommandLine::new("osascript").args(["-e".to_string(), format!("beep {}", self.times)])
    }

    pub fn linux_command() -> CommandLine {
        CommandLine::new("xkbbell")
    }

    pub fn windows_command() -> CommandLine {
        CommandLine::new("rundll32").arg("user32.dll,MessageBeep")
    }

    /// Run `command` once per beep. Non-positive counts run nothing.
    async fn ring(&self, command: CommandLine) -> Result<(), NotificationError> {
        for _ in 0..self.times {
            self.launcher.run(&command).await?;
            self.launcher.pause(BEEP_INTERVAL).await;
        }
        Ok(())
    }
}

#[async_trait]
impl OsDispatch for BeepNotifier {
    fn system(&self) -> &OsKind {
        &self.system
    }

    async fn darwin_notify(&self) -> Result<(), NotificationError> {
        self.launcher.run(&self.darwin_command()).await
    }

    async fn linux_notify(&self) -> Result<(), NotificationError> {
        self.ring(Self::linux_command()).await
    }

    async fn windows_notify(&self) -> Result<(), NotificationError> {
        self.ring(Self::windows_command()).await
    }
}

#[async_trait]
impl Notifier for BeepNotifier {
    async fn notify(&self) -> Result<(), NotificationError> {
        self.dispatch().await
    }
}
