use anyhow::Context;
use indexs3client_api_types::index::BlankRecordUpdate;
use indexs3client_api_types::object::ObjectLocation;
use indexs3client_api_types::storage::ObjectSource;
use indexs3client_client::{IndexdClient, MetadataClient};
use indexs3client_config::{ConfigError, ResolvedConfig};
use indexs3client_storage::{source_for, S3Options};
use thiserror::Error;
use tracing::info;

pub mod cli;

#[derive(Error, Debug)]
pub enum RunError {
    /// Nothing can be done without credentials, the job must stop here.
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to index object")]
    Index(#[source] anyhow::Error),
}

/// Outcome of a successful indexing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedObject {
    pub guid: String,
    pub rev: String,
    pub size: u64,
    /// False when the metadata service had no entry for the object.
    pub metadata_updated: bool,
}

/// Resolve the job config, then index the object at `args.input_url`.
///
/// The config is resolved before anything touches the network.
pub async fn run(args: cli::IndexArgs) -> Result<IndexedObject, RunError> {
    let config = indexs3client_config::load_config(&args.config)?;

    info!(input_url = %args.input_url, "Indexing object");

    index_s3_object(&args.input_url, &config, &args.s3_options())
        .await
        .map_err(RunError::Index)
}

/// Index the object behind `object_url`, reading it from S3 or the local
/// filesystem depending on the URL scheme.
pub async fn index_s3_object(
    object_url: &str,
    config: &ResolvedConfig,
    storage: &S3Options,
) -> anyhow::Result<IndexedObject> {
    let location = ObjectLocation::parse(object_url)
        .with_context(|| format!("Failed to parse object URL {object_url:?}"))?;

    let source = source_for(&location, storage).await;

    index_object(&location, config, source.as_ref()).await
}

/// Register an already located object with Indexd and flag it as uploaded in
/// the metadata service.
pub async fn index_object(
    location: &ObjectLocation,
    config: &ResolvedConfig,
    source: &(dyn ObjectSource + Send + Sync),
) -> anyhow::Result<IndexedObject> {
    let guid = location.guid();
    let indexd = IndexdClient::new(&config.indexd);
    let metadata = MetadataClient::new(&config.metadata_service);

    let record = indexd
        .get_record(guid)
        .await
        .with_context(|| format!("Failed to fetch Indexd record {guid}"))?;

    let summary = source
        .summarize(location)
        .await
        .with_context(|| format!("Failed to read object {location}"))?;
    let size = summary.size;

    info!(guid, size, md5 = %summary.hashes.md5, "Computed object hashes");

    let updated = indexd
        .update_blank_record(guid, &record.rev, &BlankRecordUpdate::new(location, summary))
        .await
        .with_context(|| format!("Failed to update Indexd record {guid}"))?;

    let metadata_updated = metadata
        .mark_uploaded(guid)
        .await
        .with_context(|| format!("Failed to update metadata for {guid}"))?;
    if !metadata_updated {
        info!(guid, "No metadata entry for object, skipping upload status");
    }

    Ok(IndexedObject {
        guid: updated.did,
        rev: updated.rev,
        size,
        metadata_updated,
    })
}
