use crate::{ConfigDocument, ResolveError, ServiceCredential};

/// Validated credentials for the services the indexing job talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub indexd: ServiceCredential,
    pub metadata_service: ServiceCredential,
}

/// Check the mandatory credential sets, Indexd first, then the metadata
/// service.
///
/// When both are missing the Indexd error is the one returned.
pub fn resolve_config(doc: &ConfigDocument) -> Result<ResolvedConfig, ResolveError> {
    let indexd = doc.primary();
    if !indexd.is_present() {
        return Err(ResolveError::MissingIndexd);
    }

    let metadata_service = doc
        .metadata()
        .filter(|cred| cred.is_present())
        .ok_or(ResolveError::MissingMetadataService)?;

    Ok(ResolvedConfig {
        indexd: indexd.clone(),
        metadata_service: metadata_service.clone(),
    })
}
