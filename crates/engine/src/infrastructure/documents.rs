//! Mapping between domain entities and store documents.
//!
//! Stock items live in `inventory`, keyed by name, with a single `quantity`
//! field. Products live in `products`, keyed by a store-generated id, with
//! camelCase fields.

use pantry_domain::{ItemName, Product, ProductDraft, ProductId, Quantity, StockItem};
use serde_json::Value;

use crate::infrastructure::ports::{Document, Fields, RepoError};

pub const INVENTORY: &str = "inventory";
pub const PRODUCTS: &str = "products";

pub fn stock_to_fields(item: &StockItem) -> Fields {
    let mut fields = Fields::new();
    fields.insert("quantity".to_string(), Value::from(item.quantity.get()));
    fields
}

pub fn stock_from_document(doc: &Document) -> Result<StockItem, RepoError> {
    let name = ItemName::new(doc.id.as_str())
        .map_err(|e| RepoError::serialization(format!("{INVENTORY}/{}: {e}", doc.id)))?;
    let raw = doc
        .fields
        .get("quantity")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            RepoError::serialization(format!(
                "{INVENTORY}/{}: quantity is missing or not a whole number",
                doc.id
            ))
        })?;
    let quantity = u32::try_from(raw)
        .map_err(|e| RepoError::serialization(e.to_string()))
        .and_then(|n| {
            Quantity::new(n)
                .map_err(|e| RepoError::serialization(format!("{INVENTORY}/{}: {e}", doc.id)))
        })?;
    Ok(StockItem::with_quantity(name, quantity))
}

pub fn product_to_fields(draft: &ProductDraft) -> Result<Fields, RepoError> {
    match serde_json::to_value(draft).map_err(RepoError::serialization)? {
        Value::Object(fields) => Ok(fields),
        other => Err(RepoError::serialization(format!(
            "product encoded as {other}, expected an object"
        ))),
    }
}

pub fn product_from_document(doc: &Document) -> Result<Product, RepoError> {
    let id = ProductId::new(doc.id.as_str())
        .map_err(|e| RepoError::serialization(format!("{PRODUCTS}/{}: {e}", doc.id)))?;
    let details: ProductDraft = serde_json::from_value(Value::Object(doc.fields.clone()))
        .map_err(|e| RepoError::serialization(format!("{PRODUCTS}/{}: {e}", doc.id)))?;
    Ok(Product::new(id, details))
}
