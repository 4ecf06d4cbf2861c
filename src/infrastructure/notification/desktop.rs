//! Desktop popup notifier
//!
//! macOS Notification Center via `osascript`, Linux popups via
//! `notify-send`, Windows toasts via notify-rust.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    CommandLine, Launcher, NotificationError, Notifier, OsDispatch, Toast,
};
use crate::domain::attribute::AttrValue;
use crate::domain::desktop::{applescript, headline, BLANK_TITLE};
use crate::domain::notification::MessageNotification;
use crate::domain::system::OsKind;
use crate::infrastructure::launcher::ProcessLauncher;

/// How long a Windows toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Desktop popup with optional title, subtitle, icon and sound.
///
/// Title and subtitle are independent: either may be set alone. Empty strings
/// count as unset.
pub struct DesktopNotifier {
    content: MessageNotification,
    title: Option<String>,
    subtitle: Option<String>,
    icon: Option<String>,
    sound: bool,
    system: OsKind,
    launcher: Arc<dyn Launcher>,
}

/// Validate an optional text field, mapping "" to None
fn optional_text(value: impl Into<AttrValue>) -> Result<Option<String>, NotificationError> {
    let text = value.into().into_string()?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

impl DesktopNotifier {
    /// Create a popup with just a message; sound is on by default.
    pub fn new(message: impl Into<AttrValue>) -> Result<Self, NotificationError> {
        Ok(Self {
            content: MessageNotification::new(message)?,
            title: None,
            subtitle: None,
            icon: None,
            sound: true,
            system: OsKind::detect(),
            launcher: Arc::new(ProcessLauncher::new()),
        })
    }

    pub fn with_title(mut self, title: impl Into<AttrValue>) -> Result<Self, NotificationError> {
        self.set_title(title)?;
        Ok(self)
    }

    pub fn with_subtitle(
        mut self,
        subtitle: impl Into<AttrValue>,
    ) -> Result<Self, NotificationError> {
        self.set_subtitle(subtitle)?;
        Ok(self)
    }

    pub fn with_icon(mut self, icon: impl Into<AttrValue>) -> Result<Self, NotificationError> {
        self.set_icon(icon)?;
        Ok(self)
    }

    pub fn with_sound(mut self, sound: impl Into<AttrValue>) -> Result<Self, NotificationError> {
        self.set_sound(sound)?;
        Ok(self)
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

    pub fn message(&self) -> &str {
        self.content.message()
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), NotificationError> {
        Ok(self.content.set_message(message)?)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<AttrValue>) -> Result<(), NotificationError> {
        self.title = optional_text(title)?;
        Ok(())
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn set_subtitle(
        &mut self,
        subtitle: impl Into<AttrValue>,
    ) -> Result<(), NotificationError> {
        self.subtitle = optional_text(subtitle)?;
        Ok(())
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: impl Into<AttrValue>) -> Result<(), NotificationError> {
        self.icon = optional_text(icon)?;
        Ok(())
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn set_sound(&mut self, sound: impl Into<AttrValue>) -> Result<(), NotificationError> {
        self.sound = sound.into().into_bool()?;
        Ok(())
    }

    /// `osascript` call for Notification Center. Icons are not supported there.
    pub fn darwin_command(&self) -> CommandLine {
        let script = applescript(
            self.message(),
            self.title(),
            self.subtitle(),
            self.sound,
        );
        CommandLine::new("osascript").args(["-e".to_string(), script])
    }

    /// `notify-send` call. The summary argument falls back to a blank title.
    pub fn linux_command(&self) -> CommandLine {
        let summary =
            headline(self.title(), self.subtitle()).unwrap_or_else(|| BLANK_TITLE.to_string());

        let command = CommandLine::new("notify-send").args([summary, self.message().to_string()]);
        match self.icon() {
            Some(icon) => command.args(["-i", icon]),
            None => command,
        }
    }

    /// Windows toast. Without title or subtitle the toast has no title.
    pub fn windows_toast(&self) -> Toast {
        Toast {
            title: headline(self.title(), self.subtitle()),
            message: self.message().to_string(),
            icon: self.icon.clone(),
            duration: TOAST_DURATION,
        }
    }
}

#[async_trait]
impl OsDispatch for DesktopNotifier {
    fn system(&self) -> &OsKind {
        &self.system
    }

    async fn darwin_notify(&self) -> Result<(), NotificationError> {
        self.launcher.run(&self.darwin_command()).await
    }

    async fn linux_notify(&self) -> Result<(), NotificationError> {
        self.launcher.run(&self.linux_command()).await
    }

    async fn windows_notify(&self) -> Result<(), NotificationError> {
        self.launcher.toast(&self.windows_toast()).await
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self) -> Result<(), NotificationError> {
        self.dispatch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let n = DesktopNotifier::new("Hi").unwrap();
        assert_eq!(n.message(), "Hi");
        assert!(n.title().is_none());
        assert!(n.subtitle().is_none());
        assert!(n.icon().is_none());
        assert!(n.sound());
    }

    #[test]
    fn new_rejects_non_string_message() {
        assert!(matches!(
            DesktopNotifier::new(5),
            Err(NotificationError::TypeMismatch(_))
        ));
    }

    #[test]
    fn setters_validate_types() {
        let mut n = DesktopNotifier::new("Hi").unwrap();
        assert!(n.set_title(1).is_err());
        assert!(n.set_icon(false).is_err());
        assert!(n.set_sound(1).is_err());
        assert!(n.set_sound("yes").is_err());
        assert!(n.sound());
    }

    #[test]
    fn empty_strings_stay_unset() {
        let n = DesktopNotifier::new("Hi")
            .unwrap()
            .with_title("")
            .unwrap()
            .with_icon("")
            .unwrap();
        assert!(n.title().is_none());
        assert!(n.icon().is_none());
    }

    #[test]
    fn linux_command_with_title_only() {
        let n = DesktopNotifier::new("Hi").unwrap().with_title("T").unwrap();
        assert_eq!(n.linux_command().arguments(), ["T", "Hi"]);
    }

    #[test]
    fn linux_command_blank_title() {
        let n = DesktopNotifier::new("Hi").unwrap();
        assert_eq!(n.linux_command().arguments(), [" ", "Hi"]);
    }

    #[test]
    fn linux_command_combines_and_adds_icon() {
        let n = DesktopNotifier::new("Hi")
            .unwrap()
            .with_title("T")
            .unwrap()
            .with_subtitle("S")
            .unwrap()
            .with_icon("dialog-information")
            .unwrap();
        assert_eq!(
            n.linux_command().arguments(),
            ["T - S", "Hi", "-i", "dialog-information"]
        );
    }

    #[test]
    fn darwin_command_keeps_subtitle_separate() {
        let n = DesktopNotifier::new("Hi")
            .unwrap()
            .with_title("T")
            .unwrap()
            .with_subtitle("S")
            .unwrap()
            .with_sound(false)
            .unwrap();
        let cmd = n.darwin_command();
        assert_eq!(cmd.program(), "osascript");
        assert_eq!(
            cmd.arguments()[1],
            "display notification \"Hi\" with title \"T\" subtitle \"S\""
        );
    }

    #[test]
    fn windows_toast_without_title() {
        let n = DesktopNotifier::new("Hi").unwrap();
        let toast = n.windows_toast();
        assert!(toast.title.is_none());
        assert_eq!(toast.message, "Hi");
        assert_eq!(toast.duration, TOAST_DURATION);
    }

    #[test]
    fn windows_toast_uses_subtitle_alone() {
        let n = DesktopNotifier::new("Hi")
            .unwrap()
            .with_subtitle("S")
            .unwrap()
            .with_icon("C:\\icon.ico")
            .unwrap();
        let toast = n.windows_toast();
        assert_eq!(toast.title.as_deref(), Some("S"));
        assert_eq!(toast.icon.as_deref(), Some("C:\\icon.ico"));
    }
}
