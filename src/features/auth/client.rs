//! Client wrapper for the session check endpoint.

use crate::{
    features::auth::types::{AuthCheckResponse, AuthVerdict},
    web::{ApiClient, AppError},
};

pub const AUTHENTICATED_PATH: &str = "/api/authenticated/";

/// Asks the backend whether the session cookie belongs to a logged-in user.
///
/// # Errors
/// Propagates transport, status and decoding failures; the guard decides what
/// they mean for the navigation.
pub async fn check_authenticated(api: &ApiClient) -> Result<AuthVerdict, AppError> {
    let response: AuthCheckResponse = api.get_json_with_credentials(AUTHENTICATED_PATH).await?;
    Ok(response.into())
}
