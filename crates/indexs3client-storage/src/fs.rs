use async_trait::async_trait;
use indexs3client_api_types::object::{Locator, ObjectHasher, ObjectLocation, ObjectSummary};
use indexs3client_api_types::storage::{ObjectSource, StorageError, StorageResult};
use tokio::io::AsyncReadExt;

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Reads `file://` objects, for local testing and mounted buckets.
pub struct FsObjectSource {
    chunk_size: usize,
}

impl Default for FsObjectSource {
    fn default() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }
}

impl FsObjectSource {
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }
}

#[async_trait]
impl ObjectSource for FsObjectSource {
    async fn summarize(&self, location: &ObjectLocation) -> StorageResult<ObjectSummary> {
        let Locator::File(path) = location.locator() else {
            return Err(StorageError::UnsupportedLocation(location.to_string()));
        };

        let mut file = tokio::fs::File::open(path).await?;
        let mut buf = vec![0; self.chunk_size];
        let mut hasher = ObjectHasher::new();
        loop {
            let read = file.read(&mut buf).await?;
            if read == 0 {
                break;
            }
            hasher.update(&buf[..read]);
        }

        let summary = hasher.finish();
        tracing::debug!(path = %path.display(), size = summary.size, "Hashed local object");

        Ok(summary)
    }
}
