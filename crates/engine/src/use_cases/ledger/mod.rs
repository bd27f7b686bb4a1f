//! Quantity ledger use cases.
//!
//! Per-name stock counts: add one, remove one, look one up. Zero is never
//! stored; the last remove deletes the document.

use std::sync::Arc;

mod add_one;
mod error;
mod lookup;
mod remove_one;

pub use add_one::AddOne;
pub use error::LedgerError;
pub use lookup::LookupStock;
pub use remove_one::{RemoveOne, RemoveOutcome};

/// Container for ledger use cases.
pub struct LedgerUseCases {
    pub add_one: Arc<AddOne>,
    pub remove_one: Arc<RemoveOne>,
    pub lookup: Arc<LookupStock>,
}

impl LedgerUseCases {
    pub fn new(add_one: Arc<AddOne>, remove_one: Arc<RemoveOne>, lookup: Arc<LookupStock>) -> Self {
        Self {
            add_one,
            remove_one,
            lookup,
        }
    }
}
