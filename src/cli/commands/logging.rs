use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ENV_LOG_LEVEL: &str = "HOBBYHUB_LOG_LEVEL";

/// Level names indexed by the verbosity count they stand for.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Resolve a `HOBBYHUB_LOG_LEVEL` value (a count or a level name) to a
/// verbosity count.
fn parse_level(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let position = match input.parse::<usize>() {
        Ok(count) => (count < LEVEL_NAMES.len()).then_some(count),
        Err(_) => LEVEL_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(input)),
    };

    position
        .and_then(|count| u8::try_from(count).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level '{input}', expected 0-{} or one of: {}",
                LEVEL_NAMES.len() - 1,
                LEVEL_NAMES.join(", ")
            )
        })
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity; repeat to raise it (error, warn, info, debug, trace)")
            .env(ENV_LOG_LEVEL)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
