//! Hard navigation seam. A denied navigation replaces the whole browsing
//! context instead of resolving the pending route transition.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

pub trait BrowsingContext: Send + Sync {
    /// Navigates the browsing context to `location`, discarding in-app state.
    fn assign(&self, location: &str);
}

/// Browsing context that records every hard navigation in order.
#[derive(Clone, Debug, Default)]
pub struct LocationHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LocationHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last location assigned, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BrowsingContext for LocationHistory {
    fn assign(&self, location: &str) {
        info!("hard navigation to {}", location);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}
