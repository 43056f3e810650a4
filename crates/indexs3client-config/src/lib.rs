//! Credential document handling for indexs3client.
//!
//! The job is handed a single JSON document (usually through the `CONFIG_FILE`
//! environment variable) holding the Indexd credentials at its root and the
//! metadata service credentials under `metadataService`. Any other top-level
//! keys are kept around untouched so that newer deployments can ship extra
//! service blocks without breaking older jobs.
//!
//! Parsing ([`parse_config`]) only fails on undecodable input. Checking that the
//! mandatory credential sets are complete happens in [`resolve_config`].

pub use document::{parse_config, ConfigDocument, ServiceCredential};
pub use error::{ConfigError, ConfigResult, ResolveError};
pub use resolve::{resolve_config, ResolvedConfig};

mod document;
mod error;
mod resolve;

/// Parse and resolve a raw credential document in one go.
pub fn load_config(raw: &str) -> ConfigResult<ResolvedConfig> {
    let doc = parse_config(raw)?;

    if !doc.additional().is_empty() {
        tracing::debug!(
            services = ?doc.additional().keys().collect::<Vec<_>>(),
            "Ignoring additional service blocks in config"
        );
    }

    Ok(resolve_config(&doc)?)
}
