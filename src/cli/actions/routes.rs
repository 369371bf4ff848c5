use crate::routes::{ROUTES, RouteDescriptor};
use anyhow::Result;
use std::io::Write;

/// # Errors
/// Returns an error if stdout cannot be written.
pub fn execute() -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(render(&ROUTES).as_bytes())?;
    Ok(())
}

fn render(routes: &[RouteDescriptor]) -> String {
    routes
        .iter()
        .map(|route| {
            let access = if route.requires_auth { "auth" } else { "public" };
            format!("{}\t{}\t{}\n", route.path, route.name, access)
        })
        .collect()
}
