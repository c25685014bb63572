//! ji - command line tools to query Jenkins.
//!
//! Responsibilities:
//! - Parse command-line arguments and set up logging.
//! - Load the Jenkins connection settings from `.env` and the environment.
//! - Run one command and turn its outcome into a structured exit code.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration parsing rules (see `crates/config`).
//!
//! Invariants:
//! - `--help-env` is honored before argument validation and before any config work.
//! - `completions` never needs a configuration.
//! - Errors are reported through the log on stderr, never on stdout.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod jobs;
mod logging;

use std::io::{IsTerminal, Write};

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use ji_config::{Config, ConfigLoader, DotenvStatus};
use tracing::{error, warn};

/// Load `.env` and the `JENKINS_*` variables, exiting on failure.
fn load_config() -> Config {
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            error!("{}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    if *loader.dotenv_status() == DotenvStatus::Missing {
        warn!("No .env found.  Try --help-env for more info.");
    }

    match loader.from_env().and_then(ConfigLoader::build) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if args::wants_help_env(std::env::args_os()) {
        print!("{}", args::HELP_ENV_TEXT);
        let _ = std::io::stdout().flush();
        std::process::exit(ExitCode::Success.as_i32());
    }

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    colored::control::set_override(color);

    let config = if cli.command.needs_config() {
        Some(load_config())
    } else {
        None
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config.as_ref(), &cancel, color).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            warn!("Interrupted");
            ExitCode::Success
        }
        Err(e) => {
            error!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
