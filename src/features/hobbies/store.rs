//! Hobby collection store. One instance per application, shared by cloning the
//! handle; every clone observes the same state through a `watch` channel.
//!
//! `refresh()` marks the store as loading as soon as it is called, re-fetches
//! the whole collection, and replaces it only when the response decodes. The
//! loading flag is cleared by a drop guard, so it also resets when the refresh
//! future is cancelled. Overlapping refreshes are not coordinated: whichever
//! response settles last owns `hobbies`, and the first one to settle clears
//! `is_loading`.

use super::{client, types::CollectionState, types::Hobby};
use crate::web::ApiClient;
use std::{future::Future, sync::Arc};
use tokio::sync::watch;
use tracing::{Instrument, debug, error, info_span};

#[derive(Clone, Debug)]
pub struct HobbiesStore {
    api: ApiClient,
    state: Arc<watch::Sender<CollectionState>>,
}

impl HobbiesStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(CollectionState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    /// Receiver that observes every state change, including loading toggles.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CollectionState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> CollectionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn hobbies(&self) -> Vec<Hobby> {
        self.state.borrow().hobbies.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Re-fetches the hobby collection. `is_loading` is set before this returns
    /// the future; the outcome is only visible through the shared state.
    pub fn refresh(&self) -> impl Future<Output = ()> + Send + 'static {
        let loading = LoadingGuard::start(Arc::clone(&self.state));
        let state = Arc::clone(&self.state);
        let api = self.api.clone();

        async move {
            let _loading = loading;

            match client::list_hobbies(&api).await {
                Ok(hobbies) => {
                    debug!("Hobbies fetched: {} items", hobbies.len());
                    state.send_modify(|state| state.hobbies = hobbies);
                }
                Err(err) => match err.status() {
                    Some(status) => error!("Failed to fetch hobbies. Status: {status} ({err})"),
                    None => error!("Error fetching hobbies: {err}"),
                },
            }
        }
        .instrument(info_span!("hobbies.refresh"))
    }
}

/// Holds `is_loading = true` for its lifetime.
struct LoadingGuard {
    state: Arc<watch::Sender<CollectionState>>,
}

impl LoadingGuard {
    fn start(state: Arc<watch::Sender<CollectionState>>) -> Self {
        state.send_modify(|state| state.is_loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.is_loading = false);
    }
}
