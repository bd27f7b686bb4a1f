//! Quantity value object for stock counting
//!
//! A stored quantity is always at least one. Zero is never a value: an item
//! that runs out is represented by the absence of its document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// One more of the same item.
    pub fn increment(self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::validation("Quantity cannot exceed u32::MAX"))
    }

    /// One fewer of the same item.
    pub fn decrement(self) -> QuantityChange {
        QuantityChange::subtract(self, 1)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Parses form text such as `" 3 "`. Signs, decimals and empty text are rejected.
impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::parse("Quantity is required"));
        }
        let value: u32 = trimmed
            .parse()
            .map_err(|_| DomainError::parse(format!("Quantity is not a whole number: {trimmed}")))?;
        Self::new(value)
    }
}

/// Result of a quantity subtraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity left after subtraction
    Updated(Quantity),
    /// Nothing left; the item should be removed
    Depleted,
}

impl QuantityChange {
    /// Subtract an amount from a quantity
    pub fn subtract(current: Quantity, amount: u32) -> Self {
        if amount >= current.0 {
            Self::Depleted
        } else {
            Self::Updated(Quantity(current.0 - amount))
        }
    }

    /// Get the new quantity, if not depleted
    pub fn new_quantity(&self) -> Option<Quantity> {
        match self {
            Self::Updated(qty) => Some(*qty),
            Self::Depleted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn zero_is_not_a_quantity() {
        assert!(matches!(Quantity::new(0), Err(DomainError::Validation(_))));
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }

    #[test]
    fn increment_adds_one() {
        assert_eq!(qty(1).increment().unwrap(), qty(2));
        assert!(qty(u32::MAX).increment().is_err());
    }

    #[test]
    fn decrement_partial() {
        assert_eq!(qty(5).decrement(), QuantityChange::Updated(qty(4)));
    }

    #[test]
    fn decrement_last_one_depletes() {
        assert_eq!(qty(1).decrement(), QuantityChange::Depleted);
        assert_eq!(qty(1).decrement().new_quantity(), None);
    }

    #[test]
    fn subtract_overflow_depletes() {
        assert_eq!(QuantityChange::subtract(qty(5), 7), QuantityChange::Depleted);
    }

    #[test]
    fn parses_form_text() {
        assert_eq!(" 3 ".parse::<Quantity>().unwrap(), qty(3));
        assert!(matches!("".parse::<Quantity>(), Err(DomainError::Parse(_))));
        assert!(matches!("2.5".parse::<Quantity>(), Err(DomainError::Parse(_))));
        assert!(matches!("-1".parse::<Quantity>(), Err(DomainError::Parse(_))));
        assert!(matches!("abc".parse::<Quantity>(), Err(DomainError::Parse(_))));
        assert!(matches!("0".parse::<Quantity>(), Err(DomainError::Validation(_))));
    }
}
