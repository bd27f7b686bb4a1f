//! Document store port.
//!
//! A collection of JSON documents keyed by id. Every document carries a
//! store-maintained version so callers can make writes conditional on what
//! they last read.

use async_trait::async_trait;

use super::error::RepoError;

/// The field map of one document.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A document as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    /// Starts at 1 and grows by one on every write.
    pub version: u64,
    pub fields: Fields,
}

/// Condition a write or delete must satisfy to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// No document may exist under the id.
    Absent,
    /// The document must still be at this version.
    Version(u64),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepoError>;

    /// Every document in the collection, in store order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, RepoError>;

    /// Create or fully replace a document.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepoError>;

    /// Create a document under a store-generated id and return that id.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, RepoError>;

    /// Delete a document. Deleting an absent id succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), RepoError>;

    /// Create or replace a document only if `precondition` holds.
    ///
    /// Returns the new version, or `RepoError::Conflict` when the
    /// precondition failed.
    async fn set_if(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        precondition: Precondition,
    ) -> Result<u64, RepoError>;

    /// Delete a document only if `precondition` holds.
    async fn delete_if(
        &self,
        collection: &str,
        id: &str,
        precondition: Precondition,
    ) -> Result<(), RepoError>;
}
