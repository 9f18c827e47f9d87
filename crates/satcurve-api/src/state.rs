//! Application state.

use std::sync::{Arc, RwLock};

use satcurve_charts::GeneratedCharts;
use uuid::Uuid;

/// The retained output of the most recent generation run.
#[derive(Debug, Clone)]
pub struct StoredCharts {
    /// Identifier of the generation run.
    pub id: Uuid,
    /// The two chart documents plus the report.
    pub charts: GeneratedCharts,
}

/// State shared across handlers.
///
/// Exactly one writer (the generate handler) replaces the stored charts
/// wholesale; everything else only reads. The documents themselves are
/// immutable once produced, so the lock is held only to swap or clone.
#[derive(Clone, Default)]
pub struct AppState {
    /// Charts surviving between the generate and download actions.
    pub charts: Arc<RwLock<Option<StoredCharts>>>,
}

impl AppState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_holds_no_charts() {
        let state = AppState::new();
        assert!(state.charts.read().unwrap().is_none());
    }
}
