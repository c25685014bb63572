//! Log subscriber setup.
//!
//! Responsibilities:
//! - Map the `-v` count to a tracing filter and output format.
//! - Keep the HTTP stack quieter than our own crates.
//!
//! Invariants:
//! - Everything is written to stderr; stdout carries command output only.
//! - `RUST_LOG`, when set, replaces the verbosity-derived filter.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Filter directives for a verbosity level.
fn filter_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info,reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn",
        1 => "debug,reqwest=info,hyper=info,hyper_util=info,rustls=info",
        _ => "debug",
    }
}

/// Install the global subscriber. Call once, after argument parsing.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)));
    let ansi = std::io::stderr().is_terminal();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false);

    if verbosity == 0 {
        builder.without_time().with_level(false).init();
    } else {
        builder.init();
    }
}
