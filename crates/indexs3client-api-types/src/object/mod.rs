pub use hashes::{Hashes, ObjectHasher};
pub use location::{LocationError, Locator, ObjectLocation};

mod hashes;
mod location;

/// What the indexing services need to know about an object's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub size: u64,
    pub hashes: Hashes,
}
