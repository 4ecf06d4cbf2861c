//! Desktop notification text composition

/// Title passed to `notify-send` when neither title nor subtitle is set.
/// `notify-send` takes the summary positionally, so it can never be empty.
pub const BLANK_TITLE: &str = " ";

/// Combine title and subtitle into a single headline.
///
/// Both present gives `"{title} - {subtitle}"`, one present gives that one,
/// neither gives `None`.
pub fn headline(title: Option<&str>, subtitle: Option<&str>) -> Option<String> {
    match (title, subtitle) {
        (Some(t), Some(s)) => Some(format!("{} - {}", t, s)),
        (Some(t), None) => Some(t.to_string()),
        (None, Some(s)) => Some(s.to_string()),
        (None, None) => None,
    }
}

/// Build the AppleScript for a Notification Center banner.
///
/// macOS takes title and subtitle as separate clauses, so they are not
/// combined here.
pub fn applescript(
    message: &str,
    title: Option<&str>,
    subtitle: Option<&str>,
    sound: bool,
) -> String {
    let mut script = format!("display notification {}", quote(message));

    if let Some(t) = title {
        script.push_str(&format!(" with title {}", quote(t)));
    }
    if let Some(s) = subtitle {
        script.push_str(&format!(" subtitle {}", quote(s)));
    }
    if sound {
        script.push_str(" sound name \"\"");
    }

    script
}

/// Quote a string as an AppleScript literal
fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
