//! PPP price calculator web application.
//!
//! Serves a single calculator page and a small JSON API over a fixed
//! purchasing-power-parity reference table.

use std::sync::Arc;

pub mod error;
pub mod pricing;
pub mod routes;

use pricing::ReferenceTable;

/// Shared application state
///
/// The reference table is built once at startup and never mutated, so it is
/// safe to share across handlers without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ReferenceTable>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: Arc::new(ReferenceTable::standard()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
