//! Validated field groups shared by message based notifiers
//!
//! Backends compose these instead of re-validating their own fields.

use crate::domain::attribute::AttrValue;
use crate::domain::error::TypeMismatch;

/// A notification carrying a message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNotification {
    message: String,
}

impl MessageNotification {
    pub fn new(message: impl Into<AttrValue>) -> Result<Self, TypeMismatch> {
        Ok(Self {
            message: message.into().into_string()?,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), TypeMismatch> {
        self.message = message.into().into_string()?;
        Ok(())
    }
}

/// A message delivered to a caller supplied webhook URL.
///
/// The URL is kept as given; malformed URLs are reported by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookNotification {
    content: MessageNotification,
    url: String,
}

impl WebhookNotification {
    pub fn new(
        message: impl Into<AttrValue>,
        url: impl Into<AttrValue>,
    ) -> Result<Self, TypeMismatch> {
        Ok(Self {
            content: MessageNotification::new(message)?,
            url: url.into().into_string()?,
        })
    }

    pub fn message(&self) -> &str {
        self.content.message()
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), TypeMismatch> {
        self.content.set_message(message)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<AttrValue>) -> Result<(), TypeMismatch> {
        self.url = url.into().into_string()?;
        Ok(())
    }
}

/// A message delivered to a token authenticated service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNotification {
    content: MessageNotification,
    token: String,
}

impl TokenNotification {
    pub fn new(
        message: impl Into<AttrValue>,
        token: impl Into<AttrValue>,
    ) -> Result<Self, TypeMismatch> {
        Ok(Self {
            content: MessageNotification::new(message)?,
            token: token.into().into_string()?,
        })
    }

    pub fn message(&self) -> &str {
        self.content.message()
    }

    pub fn set_message(&mut self, message: impl Into<AttrValue>) -> Result<(), TypeMismatch> {
        self.content.set_message(message)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn set_token(&mut self, token: impl Into<AttrValue>) -> Result<(), TypeMismatch> {
        self.token = token.into().into_string()?;
        Ok(())
    }
}
