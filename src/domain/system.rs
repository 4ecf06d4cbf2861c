//! Host operating system value object

use std::fmt;

/// Operating system family a notifier dispatches on.
/// Captured once when a notifier is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsKind {
    Darwin,
    Linux,
    Windows,
    /// Any other platform, keeping its reported name
    Unsupported(String),
}

impl OsKind {
    /// Detect the platform this binary was built for
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a platform name (`std::env::consts::OS` style, or `uname -s` style)
    pub fn from_os_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "macos" | "darwin" => Self::Darwin,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Unsupported(name.to_string()),
        }
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Darwin => write!(f, "Darwin"),
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::Unsupported(name) => write!(f, "{}", name),
        }
    }
}
