pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_API_URL: &str = "api-url";
pub const ARG_ASSETS_DIR: &str = "assets-dir";
pub const ARG_SESSION_TTL: &str = "session-ttl-seconds";
pub const ARG_SECURE_COOKIES: &str = "secure-cookies";

/// Default upstream identity API, matching the local development layout.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

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

    let command = Command::new("portiko")
        .about("Session gateway and authentication front end")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("3000")
                .env("PORTIKO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the remote identity API")
                .default_value(DEFAULT_API_URL)
                .env("PORTIKO_API_URL"),
        )
        .arg(
            Arg::new(ARG_ASSETS_DIR)
                .long("assets-dir")
                .help("Directory holding the UI shell served at page routes")
                .default_value("dist")
                .env("PORTIKO_ASSETS_DIR"),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL)
                .long("session-ttl-seconds")
                .help("Session cookie TTL in seconds")
                .default_value("86400")
                .env("PORTIKO_SESSION_TTL_SECONDS")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_SECURE_COOKIES)
                .long("secure-cookies")
                .help("Mark the session cookie Secure (enable when serving over HTTPS)")
                .env("PORTIKO_SECURE_COOKIES")
                .action(ArgAction::SetTrue),
        );

    logging::with_args(command)
}
