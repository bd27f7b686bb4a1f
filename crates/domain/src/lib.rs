//! Pantry domain: value objects, entities and their invariants.
//!
//! Nothing here touches storage. Every constructor validates, so a value that
//! exists is a value that may be persisted.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Product, ProductDraft, RawProductFields, StockItem};
pub use error::DomainError;
pub use ids::ProductId;
pub use value_objects::{
    Category, ItemName, Price, ProductName, Quantity, QuantityChange, Unit,
};
