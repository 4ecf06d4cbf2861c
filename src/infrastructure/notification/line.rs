//! LINE Notify notifier

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::attribute::AttrValue;
use crate::domain::notification::TokenNotification;

use super::send_request;

/// LINE Notify API endpoint
pub const LINE_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

/// Posts the message to LINE Notify with a bearer token.
/// The endpoint is fixed; only message and token are configurable.
pub struct LineNotifier {
    auth: TokenNotification,
    client: reqwest::Client,
}

impl LineNotifier {
    pub fn new(
        message: impl Into<AttrValue>,
        token: impl Into<AttrValue>,
    ) -> Result<Self, NotificationError> {
        Ok(Self {
            auth: TokenNotification::new(message, token)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &'static str {
        LINE_NOTIFY_URL
    }

    pub fn message(&self) -> &str {
        self.auth.message()
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), NotificationError> {
        Ok(self.auth.set_message(message)?)
    }

    pub fn token(&self) -> &str {
        self.auth.token()
    }

    pub fn set_token(&mut self, token: impl Into<AttrValue>) -> Result<(), NotificationError> {
        Ok(self.auth.set_token(token)?)
    }

    /// Build the POST: bearer auth header, message as a query parameter
    pub fn build_request(&self) -> Result<reqwest::Request, NotificationError> {
        self.client
            .post(LINE_NOTIFY_URL)
            .bearer_auth(self.token())
            .query(&[("message", self.message())])
            .build()
            .map_err(|e| NotificationError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn notify(&self) -> Result<(), NotificationError> {
        send_request(&self.client, self.build_request()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_targets_fixed_endpoint() {
        let line = LineNotifier::new("Hi there", "secret-token").unwrap();
        let request = line.build_request().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().host_str(), Some("notify-api.line.me"));
        assert_eq!(request.url().path(), "/api/notify");
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer secret-token"
        );

        let query: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query, vec![("message".to_string(), "Hi there".to_string())]);
    }

    #[test]
    fn url_like_message_does_not_change_endpoint() {
        let line = LineNotifier::new("https://evil.example/hook", "tok").unwrap();
        let request = line.build_request().unwrap();
        assert!(request.url().as_str().starts_with(LINE_NOTIFY_URL));
        assert_eq!(line.endpoint(), LINE_NOTIFY_URL);
    }

    #[test]
    fn set_token_updates_header() {
        let mut line = LineNotifier::new("Hi", "old").unwrap();
        line.set_token("new").unwrap();
        let request = line.build_request().unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer new"
        );
    }

    #[test]
    fn new_rejects_non_string_token() {
        assert!(matches!(
            LineNotifier::new("Hi", 12345),
            Err(NotificationError::TypeMismatch(_))
        ));
    }
}
