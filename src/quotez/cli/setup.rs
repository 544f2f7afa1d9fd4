use clap::{Parser, Subcommand};
use quotez::init::HOME_ENV;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quotez", bin_name = "quotez", version = get_version())]
#[command(about = "Keep a collection of quotes in plain JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = HOME_ENV, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Register a new quote
    #[command(alias = "a")]
    Add {
        /// The quote itself
        content: String,

        /// Who said it
        author: String,
    },

    /// List quotes, one page at a time
    #[command(alias = "ls")]
    List {
        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Show a single quote
    #[command(alias = "v")]
    Show { id: u64 },

    /// Change the content or author of a quote
    #[command(alias = "e")]
    Modify {
        id: u64,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Delete a quote
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Write every quote into build/data.json
    Build,

    /// Create placeholder quotes
    Sample {
        /// How many quotes to create
        count: usize,
    },

    /// Interactive shell reading `action?key=value` lines from stdin
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_subcommand_is_none() {
        assert_eq!(parse(&["quotez"]).command, None);
    }

    #[test]
    fn parses_add() {
        let cli = parse(&["quotez", "add", "Stay hungry", "Steve Jobs"]);
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                content: "Stay hungry".into(),
                author: "Steve Jobs".into()
            })
        );
    }

    #[test]
    fn parses_list_page() {
        let cli = parse(&["quotez", "ls", "--page", "3"]);
        assert_eq!(cli.command, Some(Commands::List { page: Some(3) }));
    }

    #[test]
    fn parses_modify_flags() {
        let cli = parse(&["quotez", "modify", "4", "--author", "Anon"]);
        assert_eq!(
            cli.command,
            Some(Commands::Modify {
                id: 4,
                content: None,
                author: Some("Anon".into())
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["quotez", "build", "--home", "/tmp/q", "-v"]);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/q")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["quotez", "delete", "abc"]).is_err());
    }
}
