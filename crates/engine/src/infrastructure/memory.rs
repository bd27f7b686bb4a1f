//! In-memory document store.
//!
//! Used for local runs (`PANTRY_STORE=memory`) and as the realistic store in
//! use-case tests. Collections are ordered by id, so `list` is deterministic.
//!
//! Deleted ids keep a tombstone holding their last version, so an id that is
//! created again continues from there and a stale version never matches.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::infrastructure::ports::{Document, DocumentStore, Fields, Precondition, RepoError};

#[derive(Debug, Clone)]
struct Stored {
    version: u64,
    /// `None` once deleted.
    fields: Option<Fields>,
}

impl Stored {
    fn live(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    fn to_document(&self, id: &str) -> Option<Document> {
        self.live().map(|fields| Document {
            id: id.to_string(),
            version: self.version,
            fields: fields.clone(),
        })
    }
}

type Collection = BTreeMap<String, Stored>;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(
        collection: &str,
        id: &str,
        current: Option<&Stored>,
        precondition: Precondition,
    ) -> Result<(), RepoError> {
        let current = current.filter(|doc| doc.live().is_some());
        let holds = match (precondition, current) {
            (Precondition::Absent, None) => true,
            (Precondition::Version(expected), Some(doc)) => doc.version == expected,
            _ => false,
        };
        if holds {
            Ok(())
        } else {
            Err(RepoError::conflict(collection, id))
        }
    }

    fn write(docs: &mut Collection, id: &str, fields: Fields) -> u64 {
        let version = docs.get(id).map_or(1, |doc| doc.version + 1);
        docs.insert(
            id.to_string(),
            Stored {
                version,
                fields: Some(fields),
            },
        );
        version
    }

    fn remove(docs: &mut Collection, id: &str) {
        if let Some(doc) = docs.get_mut(id) {
            doc.fields = None;
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepoError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.get(id))
            .and_then(|doc| doc.to_document(id)))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, RepoError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter_map(|(id, doc)| doc.to_document(id))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepoError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        Self::write(docs, id, fields);
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, RepoError> {
        let id = Uuid::new_v4().to_string();
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        Self::write(docs, &id, fields);
        Ok(id)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), RepoError> {
        let mut guard = self.collections.write().await;
        if let Some(docs) = guard.get_mut(collection) {
            Self::remove(docs, id);
        }
        Ok(())
    }

    async fn set_if(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        precondition: Precondition,
    ) -> Result<u64, RepoError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        Self::check(collection, id, docs.get(id), precondition)?;
        Ok(Self::write(docs, id, fields))
    }

    async fn delete_if(
        &self,
        collection: &str,
        id: &str,
        precondition: Precondition,
    ) -> Result<(), RepoError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        Self::check(collection, id, docs.get(id), precondition)?;
        Self::remove(docs, id);
        Ok(())
    }
}
