use crate::object::{ObjectLocation, ObjectSummary};
use async_trait::async_trait;

pub use error::{StorageError, StorageResult};

mod error;

/// Somewhere object bytes can be read from.
#[async_trait]
pub trait ObjectSource {
    /// Read the whole object once, returning its size and digests.
    async fn summarize(&self, location: &ObjectLocation) -> StorageResult<ObjectSummary>;
}

