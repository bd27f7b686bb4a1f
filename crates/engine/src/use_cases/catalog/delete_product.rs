//! Delete product use case.

use std::sync::Arc;

use pantry_domain::ProductId;

use crate::infrastructure::documents::PRODUCTS;
use crate::infrastructure::ports::DocumentStore;

use super::error::CatalogError;

/// Unconditional delete, whatever the quantity. An absent id is a no-op.
pub struct DeleteProduct {
    store: Arc<dyn DocumentStore>,
}

impl DeleteProduct {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &ProductId) -> Result<(), CatalogError> {
        self.store.delete(PRODUCTS, id.as_str()).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
