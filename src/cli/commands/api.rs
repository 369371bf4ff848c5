use crate::web::config::DEFAULT_API_BASE_URL;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_SESSION_COOKIE: &str = "session-cookie";

/// Mirrors `web::config::DEFAULT_TIMEOUT_MS`.
const DEFAULT_TIMEOUT: &str = "10000";

#[derive(Debug)]
pub struct Options {
    pub api_base_url: String,
    pub timeout_ms: u64,
    pub session_cookie: Option<SecretString>,
}

impl Options {
    /// # Errors
    /// Returns an error if a defaulted argument is unexpectedly missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let api_base_url = matches
            .get_one::<String>(ARG_API_BASE_URL)
            .cloned()
            .context("missing required argument: --api-base-url")?;
        let timeout_ms = matches
            .get_one::<u64>(ARG_TIMEOUT)
            .copied()
            .context("missing required argument: --timeout")?;
        let session_cookie = matches
            .get_one::<String>(ARG_SESSION_COOKIE)
            .map(|cookie| SecretString::from(cookie.clone()));

        Ok(Self {
            api_base_url,
            timeout_ms,
            session_cookie,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL of the hobbyhub backend API")
                .env("HOBBYHUB_API_BASE_URL")
                .global(true)
                .default_value(DEFAULT_API_BASE_URL),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in milliseconds")
                .env("HOBBYHUB_TIMEOUT_MS")
                .global(true)
                .default_value(DEFAULT_TIMEOUT)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE)
                .long(ARG_SESSION_COOKIE)
                .help("Cookie header sent with API requests, example: sessionid=<id>")
                .env("HOBBYHUB_SESSION_COOKIE")
                .hide_env_values(true)
                .global(true),
        )
}
