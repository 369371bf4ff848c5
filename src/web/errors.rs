use thiserror::Error;

/// Failures of a single API request. Callers in this crate absorb these; they
/// only ever reach the diagnostic log.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
}

impl AppError {
    /// HTTP status of a protocol failure, `None` for every other kind.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::Http {
            status: 401,
            message: "Request failed.".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (401): Request failed.");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn status_is_none_for_transport_failures() {
        assert_eq!(AppError::Network("down".to_string()).status(), None);
        assert_eq!(AppError::Timeout("slow".to_string()).status(), None);
        assert_eq!(AppError::Parse("bad".to_string()).status(), None);
    }
}
