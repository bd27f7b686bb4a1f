//! Pantry Engine library.
//!
//! Stock ledger and product catalog over a document store.
//!
//! ## Structure
//!
//! - `use_cases/` - Ledger, catalog and projection operations
//! - `infrastructure/` - Document store port, adapters and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
