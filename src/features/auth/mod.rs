//! Auth feature: the session check client, the navigation guard and the hard
//! navigation seam it redirects through. The guard only reads the backend's
//! verdict; the session cookie itself stays opaque.

pub mod browsing;
pub mod client;
mod guards;
pub mod types;

pub use browsing::{BrowsingContext, LocationHistory};
pub use guards::{GuardDecision, NavigationGuard, NavigationIntent, Resolution};
