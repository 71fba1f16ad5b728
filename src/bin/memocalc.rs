//! Simple CLI for evaluating arithmetic expressions
//!
//! Expressions are evaluated against the standard registry, so the built-in
//! math functions (`abs`, `min`, `max`) are available.

use std::process;

use clap::{Parser, Subcommand};
use memocalc::Engine;

#[derive(Parser)]
#[command(name = "memocalc")]
#[command(about = "Evaluate integer arithmetic expressions with memoized function calls")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its value
    Evaluate {
        /// Expression to evaluate
        expression: String,
    },
    /// Parse an expression and print its tree
    Parse {
        /// Expression to parse
        expression: String,
    },
}

fn main() {
    // Setup human-panic for better error messages
    human_panic::setup_panic!();
    env_logger::init();

    let cli = Cli::parse();
    let engine = Engine::default();

    match cli.command {
        Commands::Evaluate { expression } => match engine.evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Parse { expression } => match engine.parse(&expression) {
            Ok(tree) => println!("{tree}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}
