//! CLI mode implementation
//!
//! Command-line front end over the matcher for one-off searches.

use clap::{Parser, Subcommand};

/// chex-match CLI
#[derive(Parser)]
#[command(name = "chex-match")]
#[command(about = "Approximate substring search utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search text for an approximate occurrence of a pattern
    Search(SearchArgs),
    /// Show the error budget a pattern length and ratio derive to
    Budget(BudgetArgs),
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Pattern to look for (case- and accent-insensitive)
    #[arg(short = 'p', long)]
    pub pattern: String,

    /// Text to scan; read from stdin when omitted
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// Fuzziness ratio in 0.0..=1.0; 1.0 requires an exact occurrence
    #[arg(short = 'r', long, default_value_t = 0.5)]
    pub ratio: f64,

    /// Emit the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Budget command arguments
#[derive(Parser, Clone, Debug)]
pub struct BudgetArgs {
    /// Pattern length in characters
    #[arg(short = 'm', long)]
    pub pattern_len: usize,

    /// Fuzziness ratio in 0.0..=1.0
    #[arg(short = 'r', long)]
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let args = SearchArgs {
            pattern: "world".to_string(),
            text: Some("hello worxd".to_string()),
            ratio: 0.7,
            json: false,
        };
        assert_eq!(args.pattern, "world");
        assert_eq!(args.ratio, 0.7);
    }

    #[test]
    fn test_budget_args() {
        let args = BudgetArgs {
            pattern_len: 5,
            ratio: 0.7,
        };
        assert_eq!(args.pattern_len, 5);
    }

    #[test]
    fn test_cli_parses_search_command() {
        let cli = Cli::parse_from([
            "chex-match", "search", "-p", "world", "-t", "hello worxd", "-r", "0.7",
        ]);
        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.pattern, "world");
                assert_eq!(args.text.as_deref(), Some("hello worxd"));
                assert_eq!(args.ratio, 0.7);
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_default_ratio() {
        let cli = Cli::parse_from(["chex-match", "search", "-p", "abc"]);
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.ratio, 0.5),
            _ => panic!("expected search command"),
        }
    }
}
