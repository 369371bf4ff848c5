//! Hobbies feature: the remote collection store and its endpoint client.

pub mod client;
mod store;
pub mod types;

pub use store::HobbiesStore;
pub use types::{CollectionState, Hobby};
