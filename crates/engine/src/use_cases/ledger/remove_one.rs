//! Remove one unit of a stock item.
//!
//! The last unit deletes the document; an absent item is left alone.

use std::sync::Arc;

use pantry_domain::{ItemName, StockItem};

use crate::infrastructure::documents::{stock_from_document, stock_to_fields, INVENTORY};
use crate::infrastructure::ports::{DocumentStore, Precondition};
use crate::use_cases::retry::{retry_on_conflict, RetryConfig};

use super::error::LedgerError;

/// What a remove did to the stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One unit removed, some remain.
    Decremented(StockItem),
    /// The last unit was removed and the document deleted.
    Deleted(ItemName),
    /// Nothing stored under that name.
    Missing,
}

pub struct RemoveOne {
    store: Arc<dyn DocumentStore>,
    retry: RetryConfig,
}

impl RemoveOne {
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryConfig) -> Self {
        Self { store, retry }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<RemoveOutcome, LedgerError> {
        let outcome = retry_on_conflict(&self.retry, "remove_one", name.as_str(), move || {
            self.attempt(name)
        })
        .await
        .map_err(|e| e.exhausted(name.as_str(), self.retry.max_attempts))?;

        match &outcome {
            RemoveOutcome::Decremented(item) => {
                tracing::info!(item = %item.name, quantity = item.quantity.get(), "Removed one unit")
            }
            RemoveOutcome::Deleted(name) => {
                tracing::info!(item = %name, "Removed last unit, item deleted")
            }
            RemoveOutcome::Missing => {
                tracing::debug!(item = %name, "Remove on absent item ignored")
            }
        }
        Ok(outcome)
    }

    async fn attempt(&self, name: &ItemName) -> Result<RemoveOutcome, LedgerError> {
        let Some(doc) = self.store.get(INVENTORY, name.as_str()).await? else {
            return Ok(RemoveOutcome::Missing);
        };
        let current = stock_from_document(&doc)?;
        let precondition = Precondition::Version(doc.version);

        match current.remove_one() {
            Some(next) => {
                self.store
                    .set_if(INVENTORY, name.as_str(), stock_to_fields(&next), precondition)
                    .await?;
                Ok(RemoveOutcome::Decremented(next))
            }
            None => {
                self.store
                    .delete_if(INVENTORY, name.as_str(), precondition)
                    .await?;
                Ok(RemoveOutcome::Deleted(current.name))
            }
        }
    }
}
