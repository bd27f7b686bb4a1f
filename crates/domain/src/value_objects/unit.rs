//! Measurement unit labels

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fixed set of units a product is counted in. Serialized as the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Kilogram,
    Gram,
    Pound,
    Liter,
    Milliliter,
    Each,
    Pack,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Self::Kilogram,
        Self::Gram,
        Self::Pound,
        Self::Liter,
        Self::Milliliter,
        Self::Each,
        Self::Pack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kilogram => "Kilogram (kg)",
            Self::Gram => "Gram (g)",
            Self::Pound => "Pound (lb)",
            Self::Liter => "Liter (L)",
            Self::Milliliter => "Milliliter (mL)",
            Self::Each => "Each (ea)",
            Self::Pack => "Pack",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.label() == trimmed)
            .ok_or_else(|| DomainError::parse(format!("Unknown unit: {trimmed}")))
    }
}

impl TryFrom<String> for Unit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.label().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn accepts_every_form_label_in_order() {
        let labels = [
            "Kilogram (kg)",
            "Gram (g)",
            "Pound (lb)",
            "Liter (L)",
            "Milliliter (mL)",
            "Each (ea)",
            "Pack",
        ];
        let parsed: Vec<Unit> = labels.iter().map(|l| l.parse().unwrap()).collect();
        assert_eq!(parsed, Unit::ALL.to_vec());
        assert_eq!(
            serde_json::to_string(&Unit::Pound).unwrap(),
            "\"Pound (lb)\""
        );
    }

    #[test]
    fn liter_label() {
        assert_eq!("Liter (L)".parse::<Unit>().unwrap(), Unit::Liter);
        assert!("liters".parse::<Unit>().is_err());
        assert!("Piece (pc)".parse::<Unit>().is_err());
    }
}
