//! Stock item entity - a named pantry entry with a count
//!
//! The item name is the identity: one document per name, created on the first
//! add and deleted when the last unit is removed.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ItemName, Quantity};

/// A pantry entry keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl StockItem {
    /// The entry created by the first add of an unknown name.
    pub fn first(name: ItemName) -> Self {
        Self {
            name,
            quantity: Quantity::ONE,
        }
    }

    pub fn with_quantity(name: ItemName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }

    /// The same entry with one more unit.
    pub fn add_one(&self) -> Result<Self, DomainError> {
        Ok(Self {
            name: self.name.clone(),
            quantity: self.quantity.increment()?,
        })
    }

    /// The same entry with one fewer unit, or `None` when it runs out.
    pub fn remove_one(&self) -> Option<Self> {
        self.quantity.decrement().new_quantity().map(|quantity| Self {
            name: self.name.clone(),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple(n: u32) -> StockItem {
        StockItem::with_quantity(ItemName::new("apple").unwrap(), Quantity::new(n).unwrap())
    }

    #[test]
    fn first_add_starts_at_one() {
        let item = StockItem::first(ItemName::new("apple").unwrap());
        assert_eq!(item.quantity.get(), 1);
    }

    #[test]
    fn add_one_increments() {
        assert_eq!(apple(2).add_one().unwrap(), apple(3));
    }

    #[test]
    fn remove_one_decrements_until_depleted() {
        assert_eq!(apple(2).remove_one(), Some(apple(1)));
        assert_eq!(apple(1).remove_one(), None);
    }
}
