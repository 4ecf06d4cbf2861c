//! Port for running host notification mechanisms
//!
//! OS notifiers describe what to run ([`CommandLine`], [`Toast`]) and hand it
//! to a [`Launcher`], which keeps them independent of process spawning.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::notifier::NotificationError;

/// An external command and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// A toast shown through the platform notification API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: Option<String>,
    pub message: String,
    pub icon: Option<String>,
    pub duration: Duration,
}

/// Port for host side effects of OS notifiers
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run a command to completion. Spawn failures and non-zero exits are errors.
    async fn run(&self, command: &CommandLine) -> Result<(), NotificationError>;

    /// Show a toast and return once it has been handed to the platform.
    async fn toast(&self, toast: &Toast) -> Result<(), NotificationError>;

    /// Wait between repeated invocations.
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_collects_arguments() {
        let cmd = CommandLine::new("notify-send").arg("Title").args(["-i", "icon"]);
        assert_eq!(cmd.program(), "notify-send");
        assert_eq!(cmd.arguments(), ["Title", "-i", "icon"]);
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandLine::new("osascript").args(["-e", "beep 3"]);
        assert_eq!(cmd.to_string(), "osascript -e \"beep 3\"");

        let blank = CommandLine::new("notify-send").args([" ", "Hi"]);
        assert_eq!(blank.to_string(), "notify-send \" \" Hi");
    }
}
