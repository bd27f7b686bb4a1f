//! Read a single stock item.

use std::sync::Arc;

use pantry_domain::{ItemName, StockItem};

use crate::infrastructure::documents::{stock_from_document, INVENTORY};
use crate::infrastructure::ports::DocumentStore;

use super::error::LedgerError;

pub struct LookupStock {
    store: Arc<dyn DocumentStore>,
}

impl LookupStock {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<Option<StockItem>, LedgerError> {
        let doc = self.store.get(INVENTORY, name.as_str()).await?;
        doc.as_ref()
            .map(stock_from_document)
            .transpose()
            .map_err(LedgerError::from)
    }
}
