//! Price value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A non-negative, finite unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation("Price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("Price cannot be negative"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Parses form text such as `"2.50"`. `NaN`, `inf` and empty text are rejected.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::parse("Price is required"));
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::parse(format!("Price is not a number: {trimmed}")))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_text() {
        assert_eq!("2.5".parse::<Price>().unwrap().get(), 2.5);
        assert_eq!(" 0 ".parse::<Price>().unwrap().get(), 0.0);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!("".parse::<Price>(), Err(DomainError::Parse(_))));
        assert!(matches!("two".parse::<Price>(), Err(DomainError::Parse(_))));
        assert!(matches!("2,50".parse::<Price>(), Err(DomainError::Parse(_))));
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(matches!("-1".parse::<Price>(), Err(DomainError::Validation(_))));
        assert!(matches!("NaN".parse::<Price>(), Err(DomainError::Validation(_))));
        assert!(matches!("inf".parse::<Price>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::new(2.5).unwrap().to_string(), "2.50");
    }
}
