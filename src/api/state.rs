//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
///
/// The catalog is read-only after startup, so handlers share it through a
/// plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
