//! # hobbyhub (client navigation & hobby state)
//!
//! `hobbyhub` is the client-side navigation and state layer of the hobbyhub web
//! application. It decides which views a visitor may reach based on the session
//! cookie, and it keeps the visitor's hobby list in sync with the backend API.
//!
//! ## Navigation Guard
//!
//! Every transition goes through [`routes::Router::navigate`]. Routes marked
//! `requires_auth` trigger one `GET /api/authenticated/` call carrying the
//! session cookie. Anything other than a `2xx` response with
//! `{"authenticated": true}` ends in a hard redirect to `/login/`. The guard
//! never surfaces an error to its caller and never caches a verdict.
//!
//! ## Hobbies Store
//!
//! [`features::hobbies::HobbiesStore`] owns the fetched hobby collection and its
//! loading flag. `refresh()` flips `is_loading` on, fetches `GET /api/hobbies/`,
//! replaces the collection wholesale on success, keeps the last-known-good
//! collection on any failure, and always flips `is_loading` back off.
//!
//! Both components only talk to the backend through [`web::api`], which applies
//! the configured request timeout and the explicit [`web::SessionContext`].

pub mod cli;
pub mod features;
pub mod routes;
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
