//! Display records returned by the HTTP API

use serde::{Deserialize, Serialize};

use pantry_domain::{Product, StockItem};

/// One row of the pantry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub name: String,
    /// Name with its first character upper-cased
    pub label: String,
    pub quantity: u32,
}

impl From<&StockItem> for StockLine {
    fn from(item: &StockItem) -> Self {
        Self {
            name: item.name.as_str().to_string(),
            label: item.name.display_label(),
            quantity: item.quantity.get(),
        }
    }
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let details = &product.details;
        Self {
            id: product.id.to_string(),
            name: details.name.as_str().to_string(),
            category: details.category.label().to_string(),
            price: details.price.get(),
            quantity: details.quantity.get(),
            unit: details.unit.label().to_string(),
            image_url: details.image_url.clone(),
        }
    }
}

/// Response to a product create: the new id plus the refreshed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: String,
    pub products: Vec<ProductRow>,
}
