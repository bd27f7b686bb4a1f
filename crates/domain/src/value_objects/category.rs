//! Product category labels

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fixed set of product categories. Serialized as the human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Beverages,
    DairyProducts,
    Fruits,
    Vegetables,
    MeatAndPoultry,
    Seafood,
    BakeryProducts,
    GrainsAndCereals,
    Snacks,
    CondimentsAndSauces,
    Others,
}

impl Category {
    /// Every category, in the order a form lists them.
    pub const ALL: [Category; 11] = [
        Self::Beverages,
        Self::DairyProducts,
        Self::Fruits,
        Self::Vegetables,
        Self::MeatAndPoultry,
        Self::Seafood,
        Self::BakeryProducts,
        Self::GrainsAndCereals,
        Self::Snacks,
        Self::CondimentsAndSauces,
        Self::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Beverages => "Beverages",
            Self::DairyProducts => "Dairy Products",
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::MeatAndPoultry => "Meat and Poultry",
            Self::Seafood => "Seafood",
            Self::BakeryProducts => "Bakery Products",
            Self::GrainsAndCereals => "Grains and Cereals",
            Self::Snacks => "Snacks",
            Self::CondimentsAndSauces => "Condiments and Sauces",
            Self::Others => "Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| DomainError::parse(format!("Unknown category: {trimmed}")))
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}
