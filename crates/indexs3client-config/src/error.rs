use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A credential set that must be present for the job to do anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Indexd credentials (url, username, password) are missing from the config")]
    MissingIndexd,
    #[error("Metadata service credentials (metadataService.url, username, password) are missing from the config")]
    MissingMetadataService,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config is not a valid JSON credential document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Unresolved(#[from] ResolveError),
}
