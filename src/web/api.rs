//! HTTP helpers for the backend JSON API with a consistent timeout and error
//! mapping. The guard and the store go through [`ApiClient`] so every request
//! carries the configured timeout and the explicit session context. The helpers
//! never log cookie values.

use super::{config::AppConfig, errors::AppError, session::SessionContext};
use crate::APP_USER_AGENT;
use reqwest::{Client, Response, header::COOKIE};
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info_span};

/// Maximum number of error body characters kept in diagnostics.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: AppConfig,
    session: SessionContext,
}

impl ApiClient {
    /// Builds a client bound to one backend and one session.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: AppConfig, session: SessionContext) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Fetches JSON with the session cookie attached, if any.
    ///
    /// # Errors
    /// Returns `Network`/`Timeout` when the request does not complete, `Http` on a
    /// non-success status and `Parse` when the body does not match `T`.
    pub async fn get_json_with_credentials<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AppError> {
        let url = self.config.endpoint(path)?;

        let mut request = self.http.get(url.clone());
        if let Some(cookie) = self.session.cookie_header() {
            request = request.header(COOKIE, cookie);
        }

        let span = info_span!(
            "api.get",
            http.method = "GET",
            url = %url,
            credentials = self.session.has_credentials()
        );

        let response = request
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        debug!("{} responded with {}", url, response.status());

        handle_json_response(response).await
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out.".to_string())
    } else if err.is_builder() {
        AppError::Config(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Decodes success bodies as `T` and turns other statuses into `AppError::Http`.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice::<T>(&body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Trims and truncates HTTP error bodies before they reach a log line.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
