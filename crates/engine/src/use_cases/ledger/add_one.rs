//! Add one unit of a stock item.
//!
//! Creates the item at quantity 1 when it does not exist yet.

use std::sync::Arc;

use pantry_domain::{ItemName, StockItem};

use crate::infrastructure::documents::{stock_from_document, stock_to_fields, INVENTORY};
use crate::infrastructure::ports::{DocumentStore, Precondition};
use crate::use_cases::retry::{retry_on_conflict, RetryConfig};

use super::error::LedgerError;

/// Add-one use case.
///
/// Reads the current document, writes the incremented count conditioned on
/// the version read (or on absence), and re-runs on conflict.
pub struct AddOne {
    store: Arc<dyn DocumentStore>,
    retry: RetryConfig,
}

impl AddOne {
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryConfig) -> Self {
        Self { store, retry }
    }

    /// Returns the item as written.
    pub async fn execute(&self, name: &ItemName) -> Result<StockItem, LedgerError> {
        let item = retry_on_conflict(&self.retry, "add_one", name.as_str(), move || {
            self.attempt(name)
        })
        .await
        .map_err(|e| e.exhausted(name.as_str(), self.retry.max_attempts))?;

        tracing::info!(item = %item.name, quantity = item.quantity.get(), "Added one unit");
        Ok(item)
    }

    async fn attempt(&self, name: &ItemName) -> Result<StockItem, LedgerError> {
        let (next, precondition) = match self.store.get(INVENTORY, name.as_str()).await? {
            None => (StockItem::first(name.clone()), Precondition::Absent),
            Some(doc) => {
                let current = stock_from_document(&doc)?;
                (current.add_one()?, Precondition::Version(doc.version))
            }
        };

        self.store
            .set_if(INVENTORY, name.as_str(), stock_to_fields(&next), precondition)
            .await?;
        Ok(next)
    }
}
