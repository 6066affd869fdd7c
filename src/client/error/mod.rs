//! Error types for the FootBase web client.
//!
//! Each concern owns its error enum (`api` for the request pipeline, `session` for
//! browser storage, `config` for build-time configuration). The top-level [`Error`]
//! aggregates them for flows that touch more than one concern, such as login.

pub mod api;
pub mod config;
pub mod session;

use thiserror::Error;

pub use api::{ApiError, HttpError, TransportError};
pub use config::ConfigError;
pub use session::SessionError;

/// Main error type for the FootBase web client.
#[derive(Error, Debug)]
pub enum Error {
    /// Request pipeline failure, passed through untouched.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Persisting the session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Message suitable for inline display, see [`ApiError::display_message`].
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Error::Api(err) => err.display_message(fallback),
            Error::Session(_) | Error::Config(_) => fallback.to_string(),
        }
    }
}
