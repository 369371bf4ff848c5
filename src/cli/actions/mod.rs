pub mod hobbies;
pub mod navigate;
pub mod routes;

use crate::cli::globals::GlobalArgs;
use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Routes,
    Navigate { path: String, globals: GlobalArgs },
    Hobbies { globals: GlobalArgs },
}

impl Action {
    /// # Errors
    /// Returns an error if the API client cannot be built or stdout is closed.
    pub async fn execute(self) -> Result<()> {
        match self {
            Self::Routes => routes::execute(),
            Self::Navigate { path, globals } => navigate::execute(&path, &globals).await,
            Self::Hobbies { globals } => hobbies::execute(&globals).await,
        }
    }
}
