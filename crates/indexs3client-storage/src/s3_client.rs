//! Object source for buckets compatible with the S3 API.
//!
//! This is currently built on the [`aws_sdk_s3`] crate, with credentials and
//! region coming from the usual AWS environment (env vars, profile, instance
//! metadata). The object body is streamed and hashed chunk by chunk, so memory
//! use does not grow with the object size.

use crate::S3Options;
use anyhow::Context;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::SdkError;
use indexs3client_api_types::object::{Locator, ObjectHasher, ObjectLocation, ObjectSummary};
use indexs3client_api_types::storage::{ObjectSource, StorageError, StorageResult};
use tracing::debug;

/// Reads objects from S3-compatible APIs.
#[derive(Clone)]
pub struct S3ObjectSource {
    client: aws_sdk_s3::Client,
}

impl S3ObjectSource {
    /// Build a client from the ambient AWS configuration.
    ///
    /// An explicit endpoint switches to path-style addressing, which is what
    /// most S3-compatible stores expect.
    pub async fn from_env(options: &S3Options) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared_config = loader.load().await;

        let mut config = aws_sdk_s3::config::Builder::from(&shared_config);
        if options.endpoint_url.is_some() {
            config = config.force_path_style(true);
        }

        Self::from_client(aws_sdk_s3::Client::from_conf(config.build()))
    }

    #[must_use]
    pub fn from_client(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    async fn hash_object(&self, bucket: &str, key: &str) -> StorageResult<ObjectSummary> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await;

        // on 404, we return a different error variant
        if let Err(SdkError::ServiceError(e)) = &resp {
            if e.err().is_no_such_key() {
                return Err(StorageError::NotFound);
            }
        }

        let mut body = resp.context("Storage response error")?.body;

        let mut hasher = ObjectHasher::new();
        while let Some(chunk) = body
            .try_next()
            .await
            .context("Error while retrieving body")?
        {
            hasher.update(&chunk);
        }

        let summary = hasher.finish();
        debug!(bucket, key, size = summary.size, "Hashed S3 object");

        Ok(summary)
    }
}

#[async_trait]
impl ObjectSource for S3ObjectSource {
    async fn summarize(&self, location: &ObjectLocation) -> StorageResult<ObjectSummary> {
        match location.locator() {
            Locator::S3 { bucket, key } => self.hash_object(bucket, key).await,
            Locator::File(_) => Err(StorageError::UnsupportedLocation(location.to_string())),
        }
    }
}
