use crate::{
    cli::globals::GlobalArgs,
    features::auth::{LocationHistory, NavigationGuard},
    routes::{Navigation, Router},
};
use anyhow::Result;
use std::io::Write;

/// Runs one guarded navigation and prints its outcome. A redirect is a normal
/// outcome, not an error.
///
/// # Errors
/// Returns an error if the API client cannot be built or stdout cannot be written.
pub async fn execute(path: &str, globals: &GlobalArgs) -> Result<()> {
    let guard = NavigationGuard::new(globals.api_client()?);
    let router = Router::new(guard, LocationHistory::new());

    let navigation = router.navigate(path).await;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", describe(&navigation))?;
    Ok(())
}

fn describe(navigation: &Navigation) -> String {
    match navigation {
        Navigation::Rendered(route) => format!("rendered {}", route.view),
        Navigation::Redirected(location) => format!("redirect {location}"),
        Navigation::NotFound(path) => format!("not found {path}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::describe;
    use crate::routes::{Navigation, find};

    #[test]
    fn describes_each_outcome() {
        let profile = *find("/profile").unwrap();
        assert_eq!(
            describe(&Navigation::Rendered(profile)),
            "rendered Profile"
        );
        assert_eq!(
            describe(&Navigation::Redirected("/login/".to_string())),
            "redirect /login/"
        );
        assert_eq!(
            describe(&Navigation::NotFound("/nope".to_string())),
            "not found /nope"
        );
    }
}
