//! Edit product use case.
//!
//! Replaces the whole field set of an existing product. The write is
//! conditioned on the version read, so an edit never recreates a product
//! that was deleted in the meantime.

use std::sync::Arc;

use pantry_domain::{Product, ProductDraft, ProductId};

use crate::infrastructure::documents::{product_to_fields, PRODUCTS};
use crate::infrastructure::ports::{DocumentStore, Precondition};
use crate::use_cases::retry::{retry_on_conflict, RetryConfig};

use super::error::CatalogError;

pub struct EditProduct {
    store: Arc<dyn DocumentStore>,
    retry: RetryConfig,
}

impl EditProduct {
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryConfig) -> Self {
        Self { store, retry }
    }

    /// Returns `None` when no product has that id; nothing is written then.
    pub async fn execute(
        &self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, CatalogError> {
        let fields = product_to_fields(&draft)?;
        let fields = &fields;

        let edited = retry_on_conflict(&self.retry, "edit_product", id.as_str(), move || async move {
            let Some(doc) = self.store.get(PRODUCTS, id.as_str()).await? else {
                return Ok::<_, CatalogError>(false);
            };
            self.store
                .set_if(
                    PRODUCTS,
                    id.as_str(),
                    fields.clone(),
                    Precondition::Version(doc.version),
                )
                .await?;
            Ok(true)
        })
        .await
        .map_err(|e| e.exhausted(id.as_str(), self.retry.max_attempts))?;

        if !edited {
            tracing::debug!(product_id = %id, "Edit on absent product ignored");
            return Ok(None);
        }
        tracing::info!(product_id = %id, name = %draft.name, "Product edited");
        Ok(Some(Product::new(id.clone(), draft)))
    }
}
