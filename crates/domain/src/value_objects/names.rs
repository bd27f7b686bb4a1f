//! Validated name newtypes for pantry items and products
//!
//! Names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Stock item names are also free of `/`, since they double as document ids

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for item and product names
const MAX_NAME_LENGTH: usize = 200;

/// Trim and check emptiness and length. Returns the trimmed text.
fn validate_name<'a>(kind: &str, name: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{kind} name cannot be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{kind} name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

/// A validated item name (non-empty, <=200 chars, trimmed, no `/`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    /// - The name contains `/`
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = validate_name("Item", &name)?;
        if trimmed.contains('/') {
            return Err(DomainError::validation("Item name cannot contain '/'"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased, for list rendering.
    pub fn display_label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated product name (non-empty, <=200 chars, trimmed).
///
/// Products are keyed by generated ids, so any character is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        Ok(Self(validate_name("Product", &name)?.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = ItemName::new("  apple  ").unwrap();
        assert_eq!(name.as_str(), "apple");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(ItemName::new("   "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(ItemName::new(long).is_err());
        assert!(ItemName::new("a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn rejects_path_separator() {
        assert!(ItemName::new("flour/sugar").is_err());
    }

    #[test]
    fn display_label_capitalizes_first_char() {
        assert_eq!(ItemName::new("apple").unwrap().display_label(), "Apple");
        assert_eq!(ItemName::new("élan").unwrap().display_label(), "Élan");
        assert_eq!(ItemName::new("Kiwi").unwrap().display_label(), "Kiwi");
    }

    #[test]
    fn product_names_may_contain_slash() {
        let name = ProductName::new(" Salt/Pepper ").unwrap();
        assert_eq!(name.as_str(), "Salt/Pepper");
        assert!(matches!(ProductName::new(""), Err(DomainError::Validation(_))));
        assert!(ProductName::new("b".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn serde_rejects_invalid_names() {
        let result: Result<ItemName, _> = serde_json::from_str("\"   \"");
        assert!(result.is_err());
    }
}
