//! Messaging-markup reply envelope.

use std::fmt;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Content type the messaging provider expects for webhook replies.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// A single outbound text message wrapped in the provider's XML envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingReply {
    text: String,
}

impl MessagingReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for MessagingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>{}</Message></Response>"#,
            html_escape::encode_text(&self.text)
        )
    }
}

impl IntoResponse for MessagingReply {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], self.to_string()).into_response()
    }
}
