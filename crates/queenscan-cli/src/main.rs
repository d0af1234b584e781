//! queenscan: read an 8x8 board snapshot and report each queen's moves.
//!
//! The input is eight lines of eight characters, read from a file or from
//! stdin. A space is an empty cell; lowercase letters are the moving side
//! and uppercase letters the opponent. For every queen of the moving side
//! the tool walks the eight rays and prints the reachable cells, either as
//! text or as JSON.

mod json;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use queenscan_core::Board;
use queenscan_engine::{scan, MoveReport, QueenReport};

#[derive(Parser)]
#[command(name = "queenscan")]
#[command(about = "Lists every queen's sliding moves on an 8x8 board snapshot")]
struct Cli {
    /// Board file to read; stdin when omitted
    board: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Skip the board diagram before the reports
    #[arg(long)]
    no_board: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Board diagram and report lines for humans
    Text,
    /// One JSON document on stdout
    Json,
}

fn main() -> anyhow::Result<()> {
    // reports go to stdout, diagnostics to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let text = read_grid(cli.board.as_deref())?;
    let board = Board::parse(&text).context("malformed board grid")?;
    let reports = scan(&board);
    tracing::debug!("scanned board: {} queen(s)", reports.len());

    match cli.format {
        Format::Text => print!("{}", render_text(&board, &reports, !cli.no_board)),
        Format::Json => json::write_reports(std::io::stdout().lock(), &reports)?,
    }
    Ok(())
}

fn read_grid(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read the board from stdin")?;
            Ok(text)
        }
    }
}

/// Renders the text report: the optional board diagram, then one block per
/// queen with its announcement line and verdict.
fn render_text(board: &Board, reports: &[QueenReport], show_board: bool) -> String {
    let mut out = String::new();
    if show_board {
        out.push_str("Board:\n");
        out.push_str(&board.to_string());
        out.push('\n');
    }
    for report in reports {
        out.push('\n');
        out.push_str("Found a queen at ");
        out.push_str(&report.queen.to_algebraic());
        out.push('\n');
        match &report.moves {
            MoveReport::Checkmate => out.push_str("checkmate\n"),
            MoveReport::NoMoves => out.push_str("No moves for the queen.\n"),
            MoveReport::Moves(moves) => {
                for mv in moves {
                    out.push_str(&mv.to_string());
                    out.push('\n');
                }
            }
        }
    }
    out
}
