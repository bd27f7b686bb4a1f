use serde::{Deserialize, Serialize};

use pantry_domain::{DomainError, ProductDraft, RawProductFields};

/// Product form as submitted by a client.
///
/// Price and quantity stay as text; `to_draft` decides whether they are
/// numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductForm {
    pub fn to_draft(&self) -> Result<ProductDraft, DomainError> {
        ProductDraft::parse(RawProductFields {
            name: &self.name,
            category: &self.category,
            price: &self.price,
            quantity: &self.quantity,
            unit: &self.unit,
            image_url: self.image_url.as_deref(),
        })
    }
}

/// `?search=` filter for the product list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_accepts_camel_case_json() {
        let form: ProductForm = serde_json::from_str(
            r#"{"name":"Milk","category":"Dairy Products","price":"2.5","quantity":"3","unit":"Liter (L)","imageUrl":"m.png"}"#,
        )
        .unwrap();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name.as_str(), "Milk");
        assert_eq!(draft.image_url.as_deref(), Some("m.png"));
    }

    #[test]
    fn form_with_bad_price_does_not_convert() {
        let form = ProductForm {
            name: "Milk".into(),
            category: "Dairy Products".into(),
            price: "abc".into(),
            quantity: "3".into(),
            unit: "Liter (L)".into(),
            image_url: None,
        };
        assert!(matches!(form.to_draft(), Err(DomainError::Parse(_))));
    }
}
