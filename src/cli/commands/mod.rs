pub mod api;
pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_ROUTES: &str = "routes";
pub const CMD_NAVIGATE: &str = "navigate";
pub const CMD_HOBBIES: &str = "hobbies";
pub const ARG_PATH: &str = "path";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("hobbyhub")
        .about("Guarded navigation and hobby state for the hobbyhub web client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_ROUTES).about("List the route table"))
        .subcommand(
            Command::new(CMD_NAVIGATE)
                .about("Run one guarded navigation")
                .arg(
                    Arg::new(ARG_PATH)
                        .help("In-app path, example: /profile")
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_HOBBIES).about("Fetch and print the hobby list"));

    let command = api::with_args(command);
    logging::with_args(command)
}
