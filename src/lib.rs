//! Sweet Dreams Bakery menu service
//!
//! A read-only HTTP API over a fixed in-memory catalog of menu items:
//! - List the full menu
//! - Look up a single item by id
//! - Filter items by category (case-insensitive)
//!
//! The catalog is seeded once at startup and never mutated, so request
//! handlers share it without locking.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
