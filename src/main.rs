//! chex-match CLI
//!
//! Thin command-line wrapper over the matcher library: one search or one
//! budget derivation per invocation, results on stdout, logs on stderr.
//!
//! Exit codes: 0 match found (or vacuous match), 1 no match, 2 invalid
//! input, 5 other errors.

mod cli;

use std::io::Read;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use chex_match::{error_budget, search_with_budget, standardize, MatchError};
use cli::{BudgetArgs, Cli, Commands, SearchArgs};

/// JSON shape of a search result
#[derive(Serialize)]
struct SearchReport {
    matched: bool,
    budget: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    substring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Some(Commands::Search(args)) => run_search(args),
        Some(Commands::Budget(args)) => run_budget(args),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(2);
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute the search command, returning the process exit code
fn run_search(args: SearchArgs) -> Result<i32> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let pattern_len = standardize(&args.pattern).chars().count();
    let budget = error_budget(pattern_len, args.ratio)?;
    let found = search_with_budget(&text, &args.pattern, budget)?;

    let code = if found.is_some() { 0 } else { 1 };
    if args.json {
        let report = match &found {
            Some(m) => SearchReport {
                matched: true,
                budget,
                substring: Some(m.text.clone()),
                start: Some(m.start),
                end: Some(m.end),
            },
            None => SearchReport {
                matched: false,
                budget,
                substring: None,
                start: None,
                end: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &found {
            Some(m) => println!("{}", m.text),
            None => info!("no match within budget {}", budget),
        }
    }

    Ok(code)
}

/// Execute the budget command
fn run_budget(args: BudgetArgs) -> Result<i32> {
    let budget = error_budget(args.pattern_len, args.ratio)?;
    println!("{}", budget);
    Ok(0)
}

/// Map an error to a process exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<MatchError>().is_some() {
        2 // precondition violation: bad ratio or oversized pattern
    } else {
        5 // other application errors
    }
}
