use super::ObjectSummary;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Hex-encoded digests of an object, in the shape Indexd stores them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hashes {
    pub md5: String,
    pub sha256: String,
    pub sha512: String,
}

/// Computes size and all digests in a single pass over the object's bytes.
pub struct ObjectHasher {
    size: u64,
    md5: md5::Context,
    sha256: Sha256,
    sha512: Sha512,
}

impl Default for ObjectHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectHasher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: 0,
            md5: md5::Context::new(),
            sha256: Sha256::new(),
            sha512: Sha512::new(),
        }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.size += chunk.len() as u64;
        self.md5.consume(chunk);
        self.sha256.update(chunk);
        self.sha512.update(chunk);
    }

    #[must_use]
    pub fn finish(self) -> ObjectSummary {
        ObjectSummary {
            size: self.size,
            hashes: Hashes {
                md5: format!("{:x}", self.md5.compute()),
                sha256: hex::encode(self.sha256.finalize()),
                sha512: hex::encode(self.sha512.finalize()),
            },
        }
    }
}
