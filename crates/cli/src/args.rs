//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Detect `--help-env` anywhere on the command line.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main`).

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "ji")]
#[command(about = "Command line tools to query Jenkins", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ji list --match web\n  ji grep docker --ignore_case --list\n  ji get web-ci --filename -\n  ji put web-ci.xml --name team/web-ci --force\n"
)]
pub struct Cli {
    /// Show more messages (-v for DEBUG and HTTP INFO, -vv for DEBUG everywhere)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Describe the .env file
    // Handled by `wants_help_env` before parsing; declared so it shows in `--help`.
    #[arg(long, global = true)]
    pub help_env: bool,

    /// Disable match highlighting
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List Jenkins jobs
    List {
        /// The string to look for in the job name
        #[arg(short = 'm', long = "match")]
        pattern: Option<String>,

        /// Show disabled jobs as well
        #[arg(short = 'd', long = "show_disabled")]
        show_disabled: bool,

        /// Matches are case insensitive
        #[arg(short, long = "ignore_case")]
        ignore_case: bool,
    },

    /// Search for a string in Jenkins job configuration
    Grep {
        /// The string to search for
        search: String,

        /// Only show the url
        #[arg(short, long)]
        list: bool,

        /// Show disabled jobs as well
        #[arg(short = 'd', long = "show_disabled")]
        show_disabled: bool,

        /// Save matched configuration using the name of the job as the filename
        #[arg(short, long)]
        write: bool,

        /// Matches are case insensitive
        #[arg(short, long = "ignore_case")]
        ignore_case: bool,

        /// Overwrite existing files when writing
        #[arg(short, long)]
        force: bool,
    },

    /// Fetch a Jenkins job's configuration
    Get {
        /// The full name of the job to get (folder/name for nested jobs)
        name: String,

        /// Output file name, or - for stdout (defaults to the display name)
        #[arg(short = 'o', long, value_name = "FILE")]
        filename: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Upload an XML file for a given Jenkins job
    Put {
        /// The XML file to use (- reads from stdin)
        file: String,

        /// The name of the job (defaults to the file name without extension)
        #[arg(short, long)]
        name: Option<String>,

        /// Replace the job if one with this name already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        shell: Shell,
    },
}

impl Commands {
    /// False for commands that run without a Jenkins connection.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Completions { .. })
    }
}

/// Printed by `--help-env`.
pub const HELP_ENV_TEXT: &str = "\
Environment Variable Help:
--------------------------

The .env file in the current directory should contain the following information for Jenkins:

- JENKINS_URL: Your Jenkins instance URL.
- JENKINS_USER: Your Jenkins username.
- JENKINS_TOKEN: Your Jenkins API token.

Optional: JENKINS_SKIP_VERIFY, JENKINS_TIMEOUT (seconds), JENKINS_MAX_RETRIES.
Variables already set in the environment take precedence over .env.
";

/// True if `--help-env` appears before any `--` separator.
///
/// Checked on the raw arguments so it works even when a command's required
/// arguments are missing.
pub fn wants_help_env<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    args.into_iter()
        .map(|a| a.as_ref().to_owned())
        .take_while(|a| a != "--")
        .any(|a| a == "--help-env")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from(["ji", "list", "-m", "cd", "-d", "-i"]).unwrap();
        match cli.command {
            Commands::List {
                pattern,
                show_disabled,
                ignore_case,
            } => {
                assert_eq!(pattern.as_deref(), Some("cd"));
                assert!(show_disabled);
                assert!(ignore_case);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_list_match_long_and_short_forms() {
        for flag in ["-m", "--match"] {
            let cli = Cli::try_parse_from(["ji", "list", flag, "web"]).unwrap();
            assert!(matches!(
                cli.command,
                Commands::List { pattern: Some(ref p), .. } if p == "web"
            ));
        }
        assert!(Cli::try_parse_from(["ji", "list", "-p", "web"]).is_err());
    }

    #[test]
    fn test_grep_long_flags() {
        let cli = Cli::try_parse_from([
            "ji",
            "grep",
            "docker",
            "--list",
            "--show_disabled",
            "--write",
            "--ignore_case",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Grep {
                list: true,
                show_disabled: true,
                write: true,
                ignore_case: true,
                force: false,
                ..
            }
        ));
    }

    #[test]
    fn test_only_completions_skip_config() {
        let cli = Cli::try_parse_from(["ji", "completions", "bash"]).unwrap();
        assert!(!cli.command.needs_config());
        let cli = Cli::try_parse_from(["ji", "get", "web-ci"]).unwrap();
        assert!(cli.command.needs_config());
    }

    #[test]
    fn test_help_env_listed_in_help() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("--help-env"));
    }

    #[test]
    fn test_verbose_counts_and_is_global() {
        let cli = Cli::try_parse_from(["ji", "get", "web-ci", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_put_stdin() {
        let cli = Cli::try_parse_from(["ji", "put", "-", "-n", "web-ci"]).unwrap();
        match cli.command {
            Commands::Put { file, name, force } => {
                assert_eq!(file, "-");
                assert_eq!(name.as_deref(), Some("web-ci"));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_help_env_text_names_required_variables() {
        for var in ["JENKINS_URL", "JENKINS_USER", "JENKINS_TOKEN"] {
            assert!(HELP_ENV_TEXT.contains(var));
        }
    }

    #[test]
    fn test_wants_help_env() {
        assert!(wants_help_env(["ji", "--help-env"]));
        assert!(wants_help_env(["ji", "grep", "--help-env"]));
        assert!(!wants_help_env(["ji", "grep", "--", "--help-env"]));
        assert!(!wants_help_env(["ji", "list"]));
    }
}
