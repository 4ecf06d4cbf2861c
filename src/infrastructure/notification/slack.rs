//! Slack incoming webhook notifier

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::attribute::AttrValue;
use crate::domain::notification::WebhookNotification;

use super::send_request;

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// Posts `{"text": message}` to a Slack incoming webhook
pub struct SlackNotifier {
    webhook: WebhookNotification,
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(
        message: impl Into<AttrValue>,
        url: impl Into<AttrValue>,
    ) -> Result<Self, NotificationError> {
        Ok(Self {
            webhook: WebhookNotification::new(message, url)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn message(&self) -> &str {
        self.webhook.message()
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), NotificationError> {
        Ok(self.webhook.set_message(message)?)
    }

    pub fn url(&self) -> &str {
        self.webhook.url()
    }

    pub fn set_url(&mut self, url: impl Into<AttrValue>) -> Result<(), NotificationError> {
        Ok(self.webhook.set_url(url)?)
    }

    /// Build the POST. The body is serialized JSON sent without a
    /// content-type header; Slack accepts it as is.
    pub fn build_request(&self) -> Result<reqwest::Request, NotificationError> {
        let body = serde_json::to_string(&SlackPayload {
            text: self.message(),
        })
        .map_err(|e| NotificationError::RequestFailed(e.to_string()))?;

        self.client
            .post(self.url())
            .body(body)
            .build()
            .map_err(|e| NotificationError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self) -> Result<(), NotificationError> {
        send_request(&self.client, self.build_request()?).await
    }
}
