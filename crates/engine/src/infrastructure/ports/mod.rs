//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Document storage (in-memory, SQLite, or a hosted document database)
//! - Clock (for testing)

mod error;
mod store;
mod testing;

pub use error::RepoError;
pub use store::{Document, DocumentStore, Fields, Precondition};
pub use testing::ClockPort;

#[cfg(test)]
pub use store::MockDocumentStore;
