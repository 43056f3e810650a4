use std::io;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object was not found in the storage medium")]
    NotFound,
    #[error("No configured source can read {0}")]
    UnsupportedLocation(String),
    #[error("Encountered uncategorized error")]
    ServiceError(#[from] anyhow::Error),
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => {
                tracing::debug!(error = %e, "I/O error in storage operation");
                Self::ServiceError(e.into())
            }
        }
    }
}
