//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] civiced_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] civiced_session::SessionError),

    #[error("Validation error: {0}")]
    Validation(#[from] civiced_profile::ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
