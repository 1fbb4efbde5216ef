//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation error: {0}")]
    Validation(#[from] civiced_profile::ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] civiced_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No learner is signed in")]
    NotSignedIn,
}
