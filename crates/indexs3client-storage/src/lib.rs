use indexs3client_api_types::object::{Locator, ObjectLocation};
use indexs3client_api_types::storage::ObjectSource;

pub use indexs3client_api_types::storage::{StorageError, StorageResult};

pub mod fs;

pub mod s3_client;

/// Object storage overrides, mostly useful against S3-compatible stores.
#[derive(Debug, Clone, Default)]
pub struct S3Options {
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
}

/// Pick the source able to read `location`.
///
/// The S3 client is only built when it is needed, as loading the AWS config may
/// go looking for credentials and region on the network.
pub async fn source_for(
    location: &ObjectLocation,
    options: &S3Options,
) -> Box<dyn ObjectSource + Send + Sync> {
    match location.locator() {
        Locator::S3 { .. } => Box::new(s3_client::S3ObjectSource::from_env(options).await),
        Locator::File(_) => Box::new(fs::FsObjectSource::default()),
    }
}
