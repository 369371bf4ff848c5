//! Client helper for the hobbies endpoint. Authorization is enforced by the
//! backend through the session cookie.

use crate::{
    features::hobbies::types::Hobby,
    web::{ApiClient, AppError},
};

pub const HOBBIES_PATH: &str = "/api/hobbies/";

/// Fetches the full hobby list in server order.
///
/// # Errors
/// Returns an error on transport failure, non-success status, or a body that
/// is not an array of hobbies.
pub async fn list_hobbies(api: &ApiClient) -> Result<Vec<Hobby>, AppError> {
    api.get_json_with_credentials(HOBBIES_PATH).await
}
