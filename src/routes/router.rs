//! Hosting router. Resolves a path against the route table, runs the guard
//! before every transition, and tracks the route currently rendered.

use super::table::{self, RouteDescriptor};
use crate::features::auth::{BrowsingContext, GuardDecision, NavigationGuard};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Result of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Rendered(RouteDescriptor),
    Redirected(String),
    NotFound(String),
}

pub struct Router<C: BrowsingContext> {
    guard: NavigationGuard,
    browsing: C,
    current: Mutex<Option<RouteDescriptor>>,
}

impl<C: BrowsingContext> Router<C> {
    pub fn new(guard: NavigationGuard, browsing: C) -> Self {
        Self {
            guard,
            browsing,
            current: Mutex::new(None),
        }
    }

    pub fn browsing(&self) -> &C {
        &self.browsing
    }

    /// Route rendered by the last allowed transition.
    pub fn current(&self) -> Option<RouteDescriptor> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attempts a transition to `path`. Unknown paths never reach the guard.
    pub async fn navigate(&self, path: &str) -> Navigation {
        let Some(target) = table::find(path) else {
            debug!("no route matches {}", path);
            return Navigation::NotFound(path.to_string());
        };

        match self.guard.before_each(target, &self.browsing).await {
            GuardDecision::Allow => {
                info!("rendering {}", target.view);
                *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(*target);
                Navigation::Rendered(*target)
            }
            GuardDecision::Redirect(location) => Navigation::Redirected(location),
        }
    }
}
