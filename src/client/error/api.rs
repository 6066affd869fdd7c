use serde_json::Value;
use thiserror::Error;

use crate::model::api::error_message;

/// No HTTP response was obtained.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Send(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// The backend answered with a status outside `[200, 300)`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpError {
    /// Display-ready message, taken from the body or the status text.
    pub message: String,
    pub status: u16,
    pub status_text: String,
    /// Parsed JSON body, `None` when absent or unparsable.
    pub body: Option<Value>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Failed to parse response body: {0}")]
    Decode(serde_json::Error),
    #[error("Failed to serialize request body: {0}")]
    Encode(serde_json::Error),
}

impl ApiError {
    /// HTTP status for application errors, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(err) => Some(err.status),
            _ => None,
        }
    }

    /// Whether the backend rejected the bearer token, callers redirect to login.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Http(err) => err.body.as_ref(),
            _ => None,
        }
    }

    /// Message to render inline on a page.
    ///
    /// Falls back from the body's `hata`, `message` and `error` fields to the error
    /// message and finally to `fallback`. Transport and decoding failures always
    /// render `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http(err) => err
                .body
                .as_ref()
                .and_then(error_message)
                .or(Some(err.message.as_str()).filter(|m| !m.is_empty()))
                .unwrap_or(fallback)
                .to_string(),
            _ => fallback.to_string(),
        }
    }
}
