//! Compare command - minimax and alpha-beta node counts side by side

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{CommonConfig, OutputFormat, SideArg},
        output::{create_spinner, format_number, print_banner, print_field, table_row},
        resolve_position,
    },
    export::write_json,
    search::{Comparison, Evaluation, compare},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax and alpha-beta node counts")]
pub struct CompareArgs {
    /// Starting position as 9 cells in row-major order (X, O, '.'); empty board if omitted
    #[arg(long)]
    pub state: Option<String>,

    /// Side to move; inferred from piece counts if omitted
    #[arg(long, value_enum)]
    pub to_move: Option<SideArg>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Export the report as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,
}

/// Serializable form of a comparison run
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub board: String,
    pub to_move: Player,
    pub minimax: Evaluation,
    pub alpha_beta: Evaluation,
    pub saved_nodes: u64,
    pub reduction_percent: f64,
}

impl ComparisonReport {
    pub fn new(board: &Board, to_move: Player, comparison: &Comparison) -> Self {
        Self {
            board: board.to_string().replace('\n', ""),
            to_move,
            minimax: comparison.minimax,
            alpha_beta: comparison.alpha_beta,
            saved_nodes: comparison.saved_nodes(),
            reduction_percent: comparison.reduction_percent(),
        }
    }
}

pub fn execute(args: CompareArgs, common: &CommonConfig) -> Result<()> {
    let (board, to_move) = resolve_position(args.state.as_deref(), args.to_move)?;

    let spinner = if common.progress && args.format == OutputFormat::Text {
        Some(create_spinner("Searching with minimax and alpha-beta...")?)
    } else {
        None
    };
    let comparison = compare(&board, to_move);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = ComparisonReport::new(&board, to_move, &comparison);

    match args.format {
        OutputFormat::Text => print_report(&board, &report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = args.export {
        write_json(&report, &path)?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}

fn print_report(board: &Board, report: &ComparisonReport) {
    print_banner("Minimax vs. alpha-beta");
    println!("{board}\n");
    print_field("To move", &report.to_move.to_string());
    println!();

    println!("{}", table_row("", "minimax", "alpha-beta"));
    println!(
        "{}",
        table_row(
            "Optimal value",
            &report.minimax.value.to_string(),
            &report.alpha_beta.value.to_string(),
        )
    );
    println!(
        "{}",
        table_row(
            "Nodes visited",
            &format_number(report.minimax.nodes),
            &format_number(report.alpha_beta.nodes),
        )
    );
    println!();

    print_field(
        "Pruned",
        &format!(
            "{} nodes ({:.2} %)",
            format_number(report.saved_nodes),
            report.reduction_percent
        ),
    );
}
