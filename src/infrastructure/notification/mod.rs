//! Notifier backends
//!
//! OS backends (beep, desktop) dispatch on the host platform and drive a
//! launcher; webhook and token backends POST once with reqwest.

mod beep;
mod desktop;
mod discord;
mod line;
mod slack;

pub use beep::{BeepNotifier, BEEP_INTERVAL};
pub use desktop::{DesktopNotifier, TOAST_DURATION};
pub use discord::DiscordNotifier;
pub use line::{LineNotifier, LINE_NOTIFY_URL};
pub use slack::SlackNotifier;

use crate::application::ports::NotificationError;

/// Send a prepared request once.
///
/// Transport failures are errors. The response body is ignored and
/// non-2xx statuses are only logged.
async fn send_request(
    client: &reqwest::Client,
    request: reqwest::Request,
) -> Result<(), NotificationError> {
    let host = request.url().host_str().unwrap_or("server").to_string();
    log::debug!("POST to {}", host);

    let response = client
        .execute(request)
        .await
        .map_err(|e| NotificationError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{} answered with HTTP {}", host, status);
    }

    Ok(())
}
