//! Credential-bearing request context. The browser would attach the session
//! cookie implicitly; here it is passed explicitly so both network calls show
//! their dependency on it. The value is opaque and must never be logged.

use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    cookie: Option<SecretString>,
}

impl SessionContext {
    /// A context without credentials; the backend treats it as logged out.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context that sends `cookie` verbatim as the `Cookie` header.
    #[must_use]
    pub fn with_cookie(cookie: SecretString) -> Self {
        let cookie = if cookie.expose_secret().trim().is_empty() {
            None
        } else {
            Some(cookie)
        };
        Self { cookie }
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.cookie.is_some()
    }

    pub(crate) fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_ref().map(|cookie| cookie.expose_secret().trim())
    }
}
