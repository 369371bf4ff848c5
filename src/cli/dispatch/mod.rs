//! Maps validated CLI matches to an [`Action`].

use crate::cli::{
    actions::Action,
    commands::{self, api},
    globals::GlobalArgs,
};
use anyhow::{Context, Result, anyhow};
use std::time::Duration;

/// # Errors
/// Returns an error if required arguments are missing or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let options = api::Options::parse(matches)?;

    let mut globals = GlobalArgs::new(options.api_base_url, Duration::from_millis(options.timeout_ms));
    if let Some(cookie) = options.session_cookie {
        globals.set_session_cookie(cookie);
    }

    match matches.subcommand() {
        Some((commands::CMD_ROUTES, _)) => Ok(Action::Routes),
        Some((commands::CMD_NAVIGATE, sub_m)) => {
            let path = sub_m
                .get_one::<String>(commands::ARG_PATH)
                .cloned()
                .context("missing required argument: <path>")?;
            Ok(Action::Navigate { path, globals })
        }
        Some((commands::CMD_HOBBIES, _)) => Ok(Action::Hobbies { globals }),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}
