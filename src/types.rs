//! Core types for the bakery menu service

use serde::{Deserialize, Serialize};

/// Menu item identifier.
///
/// Signed so that any integer path segment (including zero and negatives)
/// parses cleanly and falls through to a not-found lookup instead of a
/// validation failure. Seeded items always carry positive ids.
pub type ItemId = i64;

/// A single bakery product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
}
