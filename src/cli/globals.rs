use crate::web::{ApiClient, AppConfig, SessionContext};
use anyhow::Result;
use secrecy::SecretString;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_base_url: String,
    pub timeout: Duration,
    pub session: SessionContext,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_base_url: String, timeout: Duration) -> Self {
        Self {
            api_base_url,
            timeout,
            session: SessionContext::anonymous(),
        }
    }

    pub fn set_session_cookie(&mut self, cookie: SecretString) {
        self.session = SessionContext::with_cookie(cookie);
    }

    /// Builds the API client shared by the guard and the store.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn api_client(&self) -> Result<ApiClient> {
        let config = AppConfig::new(&self.api_base_url, self.timeout)?;
        Ok(ApiClient::new(config, self.session.clone())?)
    }
}
