use becore_shared::{EditError, SubmissionError};
use becore_store::StoreError;
use thiserror::Error;

/// Errors surfaced to the public site and the admin console.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Edit(#[from] EditError),

    /// Deliberately says nothing about which half was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Admin login required")]
    NotAuthenticated,

    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] SubmissionError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
