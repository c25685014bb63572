//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the Jenkins client and the per-command options.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`); commands that need a connection
//!   fail if none was loaded.
//!
//! Invariants:
//! - All commands receive a valid cancellation token.
//! - Files are written relative to the current working directory.
//! - Stdout is flushed before returning so `-` output is never truncated.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use ji_client::JenkinsClient;
use ji_config::Config;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::commands::get::GetOptions;
use crate::commands::grep::GrepOptions;
use crate::commands::list::ListOptions;
use crate::commands::put::PutOptions;
use crate::jobs::SearchPattern;

/// Build the client, or fail when the command was started without configuration.
fn client_for(config: Option<&Config>) -> Result<JenkinsClient> {
    let config = config.ok_or_else(|| anyhow!("No Jenkins configuration loaded"))?;
    commands::build_client_from_config(config)
}

/// Dispatch CLI commands to their respective handlers.
///
/// `config` is `None` only for commands where [`Commands::needs_config`] is
/// false. `color` enables match highlighting for `grep`.
pub(crate) async fn run_command(
    cli: Cli,
    config: Option<&Config>,
    cancel_token: &CancellationToken,
    color: bool,
) -> Result<()> {
    let dir = Path::new(".");
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List {
            pattern,
            show_disabled,
            ignore_case,
        } => {
            let pattern = pattern
                .map(|p| SearchPattern::new(&p, ignore_case))
                .transpose()
                .context("Invalid match pattern")?;
            let options = ListOptions {
                pattern,
                show_disabled,
            };
            let report = commands::list::run(&client_for(config)?, &options, cancel_token).await?;
            debug!(
                "Listed {} jobs ({} inaccessible)",
                report.listed.len(),
                report.failures.len()
            );
        }
        Commands::Grep {
            search,
            list,
            show_disabled,
            write,
            ignore_case,
            force,
        } => {
            let options = GrepOptions {
                pattern: SearchPattern::new(&search, ignore_case)
                    .context("Invalid search pattern")?,
                list_only: list,
                show_disabled,
                write,
                force,
                color,
                dir,
            };
            let report = commands::grep::run(&client_for(config)?, &options, &mut out, cancel_token).await?;
            debug!(
                "{} matching jobs, {} files written, {} inaccessible",
                report.hits.len(),
                report.written.len(),
                report.failures.len()
            );
        }
        Commands::Get {
            name,
            filename,
            force,
        } => {
            let options = GetOptions {
                name,
                filename,
                force,
                dir,
            };
            commands::get::run(&client_for(config)?, &options, &mut out, cancel_token).await?;
        }
        Commands::Put { file, name, force } => {
            let options = PutOptions {
                source: file,
                name,
                force,
            };
            let stdin = std::io::stdin().lock();
            commands::put::run(&client_for(config)?, &options, stdin, cancel_token).await?;
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut out)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use secrecy::SecretString;

    #[test]
    fn test_client_requires_config() {
        let err = client_for(None).unwrap_err();
        assert!(err.to_string().contains("No Jenkins configuration loaded"));
    }

    #[test]
    fn test_client_from_config() {
        let config = Config::new(
            "https://jenkins.example.com/".to_string(),
            "admin".to_string(),
            SecretString::new("api-token".to_string().into()),
        );
        let client = client_for(Some(&config)).unwrap();
        assert_eq!(client.base_url(), "https://jenkins.example.com");
    }

    #[tokio::test]
    async fn test_completions_run_without_config() {
        let cli = Cli::parse_from(["ji", "completions", "bash"]);
        run_command(cli, None, &CancellationToken::new(), false)
            .await
            .unwrap();
    }
}
