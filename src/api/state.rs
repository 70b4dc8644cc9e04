//! Application state for the refund estimator API.

use std::sync::Arc;

use crate::config::ParameterTable;

/// Shared application state.
///
/// Holds the parameter table every request is calculated against.
#[derive(Clone)]
pub struct AppState {
    params: Arc<ParameterTable>,
}

impl AppState {
    /// Creates a new application state with the given parameter table.
    pub fn new(params: ParameterTable) -> Self {
        Self {
            params: Arc::new(params),
        }
    }

    /// Returns a reference to the parameter table.
    pub fn params(&self) -> &ParameterTable {
        &self.params
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ParameterTable::builtin())
    }
}
