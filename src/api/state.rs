//! Application state for the shift pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::AttendanceStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the attendance record store.
#[derive(Clone)]
pub struct AppState {
    /// The attendance record source.
    store: Arc<dyn AttendanceStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: impl AttendanceStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the attendance store.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }
}
