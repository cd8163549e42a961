//! Breedplan CLI - find cheap breeding plans for a target phenotype.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Breedplan - minimum-expected-cost breeding plans
#[derive(Parser, Debug)]
#[command(name = "breedplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log generation summaries (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the cheapest way to breed a uniform target phenotype
    Plan(cli::plan::PlanArgs),

    /// List built-in species, or show one species' phenotype table
    Species {
        /// Species to show (default: list all)
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let result = match args.command {
        Commands::Plan(plan) => cli::plan::execute(&plan),
        Commands::Species { name } => cli::species::execute(name.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
