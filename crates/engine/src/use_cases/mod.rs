//! Use cases - User story orchestration.
//!
//! Each module covers one area: the quantity ledger, the product catalog and
//! the display projections rebuilt after every mutation.

pub mod catalog;
pub mod ledger;
pub mod projection;
pub mod retry;

pub use catalog::{CatalogError, CatalogUseCases};
pub use ledger::{LedgerError, LedgerUseCases, RemoveOutcome};
pub use projection::ProjectionUseCases;
pub use retry::RetryConfig;
