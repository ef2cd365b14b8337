//! ttt-search CLI - exhaustive Tic-Tac-Toe search
//!
//! Compares unpruned minimax with alpha-beta pruning by the number of
//! nodes each visits, and reports exact move values for a position.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ttt_search::cli::{self, config::CommonConfig};

#[derive(Parser)]
#[command(name = "ttt-search")]
#[command(version, about = "Minimax and alpha-beta search for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Log search progress to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide the progress spinner
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare minimax and alpha-beta node counts
    Compare(cli::commands::compare::CompareArgs),

    /// Show the value of every legal move in a position
    Analyze(cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let common = CommonConfig {
        progress: !args.no_progress,
        verbose: args.verbose,
    };
    cli::init_logging(&common);

    match args.command {
        Commands::Compare(compare_args) => cli::commands::compare::execute(compare_args, &common),
        Commands::Analyze(analyze_args) => cli::commands::analyze::execute(analyze_args),
    }
}
