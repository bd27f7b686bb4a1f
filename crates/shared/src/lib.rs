//! Pantry Shared - Wire types for the HTTP API
//!
//! This crate contains the JSON shapes exchanged between the engine and any
//! client:
//! - Request bodies and query strings
//! - Display records produced by the engine's projections
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Conversions from domain types, nothing else
//! 3. **Raw form text** - numeric fields arrive as strings so validation
//!    happens in the domain, not in the JSON decoder

pub mod requests;
pub mod responses;

pub use requests::{ProductForm, SearchQuery};
pub use responses::{ProductCreated, ProductRow, StockLine};
