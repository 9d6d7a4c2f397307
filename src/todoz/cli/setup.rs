use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version = get_version())]
#[command(about = "A small todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this todo file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all todos
    #[command(alias = "ls")]
    List,

    /// Show one todo
    Get {
        /// Todo ID (or a unique prefix of at least 4 characters)
        id: String,
    },

    /// Add a new todo
    #[command(alias = "create")]
    Add {
        /// Title of the todo (prompts if omitted)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Change a todo's title and/or completed state
    Update {
        /// Todo ID (or a unique prefix of at least 4 characters)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Completed state (true/false)
        #[arg(
            short,
            long,
            value_name = "STATE",
            action = ArgAction::Set,
            value_parser = BoolishValueParser::new()
        )]
        completed: Option<bool>,
    },

    /// Flip a todo between pending and completed
    Toggle {
        /// Todo ID (or a unique prefix of at least 4 characters)
        id: String,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Todo ID (or a unique prefix of at least 4 characters)
        id: String,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todoz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(parse(&["ls"]).command, Some(Commands::List));
        assert_eq!(
            parse(&["rm", "abcd"]).command,
            Some(Commands::Delete {
                id: "abcd".into(),
                force: false
            })
        );
        assert_eq!(
            parse(&["create", "-t", "Milk"]).command,
            Some(Commands::Add {
                title: Some("Milk".into())
            })
        );
    }

    #[test]
    fn update_parses_completed_state() {
        let cli = parse(&["update", "42", "--completed", "true", "--title", "New"]);
        assert_eq!(
            cli.command,
            Some(Commands::Update {
                id: "42".into(),
                title: Some("New".into()),
                completed: Some(true),
            })
        );

        let cli = parse(&["update", "42", "-c", "false"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Update {
                completed: Some(false),
                title: None,
                ..
            })
        ));
    }

    #[test]
    fn update_rejects_nonsense_state() {
        assert!(Cli::try_parse_from(["todoz", "update", "42", "-c", "maybe"]).is_err());
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = parse(&["list", "--data-file", "/tmp/t.json", "-v"]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/t.json")));
        assert!(cli.verbose);
    }
}
