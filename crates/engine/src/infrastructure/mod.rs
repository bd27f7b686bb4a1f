//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod documents;
pub mod memory;
pub mod ports;
pub mod sqlite;
