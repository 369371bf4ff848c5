//! Navigation guard. Every attempt to reach a protected route re-checks the
//! session against the backend; there is no verdict cache and no retry. Any
//! failure is logged and resolves to a redirect, so a transition is never left
//! unresolved and the caller never sees an error.

use super::{browsing::BrowsingContext, client, types::AuthVerdict};
use crate::{routes::RouteDescriptor, web::ApiClient};
use tracing::{Instrument, debug, error, info_span, warn};
use ulid::Ulid;

/// Terminal outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Pending,
    Allowed,
    Denied,
}

/// One in-flight transition attempt. Created per call to
/// [`NavigationGuard::evaluate`] and dropped once it resolves.
#[derive(Clone, Debug)]
pub struct NavigationIntent {
    pub id: Ulid,
    pub target: RouteDescriptor,
    pub resolution: Resolution,
}

impl NavigationIntent {
    #[must_use]
    pub fn new(target: &RouteDescriptor) -> Self {
        Self {
            id: Ulid::new(),
            target: *target,
            resolution: Resolution::Pending,
        }
    }

    fn resolve(&mut self, decision: &GuardDecision) {
        self.resolution = match decision {
            GuardDecision::Allow => Resolution::Allowed,
            GuardDecision::Redirect(_) => Resolution::Denied,
        };
    }
}

#[derive(Clone, Debug)]
pub struct NavigationGuard {
    api: ApiClient,
    login_redirect: String,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let login_redirect = api.config().login_redirect.clone();
        Self {
            api,
            login_redirect,
        }
    }

    #[must_use]
    pub fn login_redirect(&self) -> &str {
        &self.login_redirect
    }

    /// Decides whether the transition to `target` may proceed. Public routes
    /// are allowed without touching the network.
    pub async fn evaluate(&self, target: &RouteDescriptor) -> GuardDecision {
        let mut intent = NavigationIntent::new(target);

        if !target.requires_auth {
            intent.resolve(&GuardDecision::Allow);
            debug!(intent = %intent.id, route = target.name, "public route, no check");
            return GuardDecision::Allow;
        }

        let span = info_span!("guard.evaluate", intent = %intent.id, route = target.name);
        let decision = self.check(target).instrument(span).await;
        intent.resolve(&decision);

        debug!(
            intent = %intent.id,
            route = target.name,
            resolution = ?intent.resolution,
            "navigation resolved"
        );

        decision
    }

    /// Runs [`Self::evaluate`] and performs the hard redirect on denial.
    pub async fn before_each(
        &self,
        target: &RouteDescriptor,
        browsing: &dyn BrowsingContext,
    ) -> GuardDecision {
        let decision = self.evaluate(target).await;
        if let GuardDecision::Redirect(location) = &decision {
            browsing.assign(location);
        }
        decision
    }

    async fn check(&self, target: &RouteDescriptor) -> GuardDecision {
        match client::check_authenticated(&self.api).await {
            Ok(AuthVerdict::Authenticated) => GuardDecision::Allow,
            Ok(AuthVerdict::Unauthenticated) => {
                warn!("session not authenticated for {}", target.path);
                self.redirect()
            }
            Err(err) => {
                match err.status() {
                    Some(status) => {
                        error!("Authentication check rejected with status {status}");
                    }
                    None => error!("Error during authentication check: {err}"),
                }
                self.redirect()
            }
        }
    }

    fn redirect(&self) -> GuardDecision {
        GuardDecision::Redirect(self.login_redirect.clone())
    }
}
