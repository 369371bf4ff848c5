//! Route table and the router that hosts the navigation guard.

pub mod paths;
mod router;
mod table;

pub use router::{Navigation, Router};
pub use table::{ROUTES, RouteDescriptor, View, find};
