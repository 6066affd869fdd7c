use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Browser storage is unavailable")]
    StorageUnavailable,
    #[error("Failed to write session key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to remove session key {key}: {reason}")]
    Remove { key: String, reason: String },
    #[error("Failed to serialize user profile: {0}")]
    Serialize(String),
}
