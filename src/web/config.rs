//! Client configuration for the backend API. Values come from CLI flags with
//! environment fallbacks (see `cli::commands`); nothing here is secret. The
//! session cookie travels separately in [`super::SessionContext`].

use super::errors::AppError;
use std::time::Duration;
use url::Url;

/// Backend used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout (milliseconds) applied to every API call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Hard-redirect target for denied navigations. Differs from the in-app
/// `/login` route by its trailing slash, which forces a full page load.
pub const LOGIN_REDIRECT: &str = "/login/";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub login_redirect: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Builds a config around the given API base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is empty or cannot be parsed.
    pub fn new(api_base_url: &str, request_timeout: Duration) -> Result<Self, AppError> {
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("API base URL is required.".to_string()));
        }

        let api_base_url = Url::parse(trimmed)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {trimmed}: {err}")))?;

        Ok(Self {
            api_base_url,
            login_redirect: LOGIN_REDIRECT.to_string(),
            request_timeout,
        })
    }

    /// Resolves an endpoint path against the API base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the joined URL is not valid.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let url = build_url_with_base(self.api_base_url.as_str(), path);
        Url::parse(&url).map_err(|err| AppError::Config(format!("Invalid endpoint {url}: {err}")))
    }
}

/// Joins a base URL and a path with exactly one slash between them.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
