//! Analyze command - exact value of every legal move in a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{OutputFormat, SideArg},
        output::{format_number, print_banner, print_field},
        resolve_position,
    },
    search::analyze_position,
};

#[derive(Parser, Debug)]
#[command(about = "Show the value of every legal move in a position")]
pub struct AnalyzeArgs {
    /// Position as 9 cells in row-major order (X, O, '.'); empty board if omitted
    #[arg(long)]
    pub state: Option<String>,

    /// Side to move; inferred from piece counts if omitted
    #[arg(long, value_enum)]
    pub to_move: Option<SideArg>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let (board, to_move) = resolve_position(args.state.as_deref(), args.to_move)?;
    let analysis = analyze_position(&board, to_move)?;

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_banner("Position analysis");
    println!("{board}\n");
    print_field("To move", &analysis.to_move.to_string());
    print_field("Value", &analysis.value.to_string());
    print_field("Nodes", &format_number(analysis.nodes));

    println!("\nMoves:");
    for entry in &analysis.moves {
        let marker = if analysis.best_moves.contains(&entry.mv) {
            " *"
        } else {
            ""
        };
        println!("  {} -> {:>3}{marker}", entry.mv, entry.value);
    }

    Ok(())
}
