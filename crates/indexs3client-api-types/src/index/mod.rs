//! Request and response bodies for Indexd and the metadata service.

use crate::object::{Hashes, ObjectLocation, ObjectSummary};
use serde::{Deserialize, Serialize};

/// Metadata key the upload flow watches to learn an object has landed.
pub const UPLOAD_STATUS_KEY: &str = "_upload_status";
pub const UPLOAD_STATUS_UPLOADED: &str = "uploaded";

/// A metadata service entry. Its schema belongs to whoever wrote it.
pub type MetadataObject = serde_json::Map<String, serde_json::Value>;

/// The parts of an Indexd record this tool reads.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexdRecord {
    pub did: String,
    pub rev: String,
}

/// Fills in a blank record created when the upload was initiated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlankRecordUpdate {
    pub size: u64,
    pub hashes: Hashes,
    pub urls: Vec<String>,
}

impl BlankRecordUpdate {
    #[must_use]
    pub fn new(location: &ObjectLocation, summary: ObjectSummary) -> Self {
        Self {
            size: summary.size,
            hashes: summary.hashes,
            urls: vec![location.url().to_string()],
        }
    }
}

/// Response to a successful blank record update.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdatedRecord {
    pub did: String,
    pub rev: String,
}
