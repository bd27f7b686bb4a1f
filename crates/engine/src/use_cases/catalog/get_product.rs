//! Read a single product.

use std::sync::Arc;

use pantry_domain::{Product, ProductId};

use crate::infrastructure::documents::{product_from_document, PRODUCTS};
use crate::infrastructure::ports::DocumentStore;

use super::error::CatalogError;

pub struct GetProduct {
    store: Arc<dyn DocumentStore>,
}

impl GetProduct {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let doc = self.store.get(PRODUCTS, id.as_str()).await?;
        doc.as_ref()
            .map(product_from_document)
            .transpose()
            .map_err(CatalogError::from)
    }
}
