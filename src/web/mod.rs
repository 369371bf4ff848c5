//! Shared client plumbing: API access, configuration, errors and the session
//! context that carries credentials into every request.

pub mod api;
pub mod config;
pub mod errors;
pub mod session;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
pub use session::SessionContext;
