//! Add product use case.

use std::sync::Arc;

use pantry_domain::{Product, ProductDraft, ProductId};

use crate::infrastructure::documents::{product_to_fields, PRODUCTS};
use crate::infrastructure::ports::{DocumentStore, RepoError};

use super::error::CatalogError;

/// Stores a new product under a store-generated id.
pub struct AddProduct {
    store: Arc<dyn DocumentStore>,
}

impl AddProduct {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let fields = product_to_fields(&draft)?;
        let raw_id = self.store.add(PRODUCTS, fields).await?;
        let id = ProductId::new(raw_id.as_str())
            .map_err(|e| RepoError::serialization(format!("store returned id {raw_id:?}: {e}")))?;

        tracing::info!(product_id = %id, name = %draft.name, "Product added");
        Ok(Product::new(id, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::documents::product_from_document;
    use crate::infrastructure::memory::InMemoryDocumentStore;
    use crate::infrastructure::ports::MockDocumentStore;
    use pantry_domain::RawProductFields;
    use serde_json::{json, Value};

    fn milk() -> ProductDraft {
        ProductDraft::parse(RawProductFields {
            name: "Milk",
            category: "Dairy Products",
            price: "2.5",
            quantity: "3",
            unit: "Liter (L)",
            image_url: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn stores_exactly_the_submitted_fields() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let use_case = AddProduct::new(store.clone());

        let product = use_case.execute(milk()).await.unwrap();

        let doc = store
            .get(PRODUCTS, product.id.as_str())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            Value::Object(doc.fields.clone()),
            json!({
                "name": "Milk",
                "category": "Dairy Products",
                "price": 2.5,
                "quantity": 3,
                "unit": "Liter (L)",
            })
        );
        assert_eq!(product_from_document(&doc).unwrap(), product);
    }

    #[tokio::test]
    async fn each_add_gets_a_fresh_id() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let use_case = AddProduct::new(store.clone());

        let first = use_case.execute(milk()).await.unwrap();
        let second = use_case.execute(milk()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list(PRODUCTS).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn when_store_fails_returns_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_add()
            .returning(|_, _| Err(RepoError::database("add", "quota exceeded")));

        let use_case = AddProduct::new(Arc::new(store));
        let result = use_case.execute(milk()).await;

        assert!(matches!(result, Err(CatalogError::Repo(RepoError::Database { .. }))));
    }
}
