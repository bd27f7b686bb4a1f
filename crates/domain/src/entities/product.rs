//! Product entity - a catalog entry with pricing and unit metadata
//!
//! Products are keyed by a store-generated id. Edits replace every field at
//! once, so a draft always carries the complete field set.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ProductId;
use crate::value_objects::{Category, Price, ProductName, Quantity, Unit};

/// Raw form text for a product, before validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawProductFields<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
    pub unit: &'a str,
    pub image_url: Option<&'a str>,
}

/// The complete, validated field set of a product without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: ProductName,
    pub category: Category,
    pub price: Price,
    pub quantity: Quantity,
    pub unit: Unit,
    /// Opaque image location; never fetched or checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Validate raw form text into a draft.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error:
    /// - `DomainError::Validation` for a blank name, zero quantity or negative price
    /// - `DomainError::Parse` for non-numeric price/quantity text or unknown labels
    pub fn parse(raw: RawProductFields<'_>) -> Result<Self, DomainError> {
        let name = ProductName::new(raw.name)?;
        let category = raw.category.parse()?;
        let price = raw.price.parse()?;
        let quantity = raw.quantity.parse()?;
        let unit = raw.unit.parse()?;
        let image_url = raw
            .image_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            category,
            price,
            quantity,
            unit,
            image_url,
        })
    }
}

/// A stored catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: ProductDraft,
}

impl Product {
    pub fn new(id: ProductId, details: ProductDraft) -> Self {
        Self { id, details }
    }

    pub fn name(&self) -> &ProductName {
        &self.details.name
    }
}
