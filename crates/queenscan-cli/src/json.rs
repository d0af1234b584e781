//! JSON rendering of the scan reports.
//!
//! Mirrors the text output: one entry per queen with its outcome and, for
//! ordinary reports, the quiet moves and captures in ray order.

use queenscan_core::Side;
use queenscan_engine::{Move, MoveReport, QueenReport};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ScanJson {
    queens: Vec<QueenJson>,
}

#[derive(Serialize)]
struct QueenJson {
    /// The queen's cell label.
    queen: String,
    /// `"checkmate"`, `"no_moves"`, or `"moves"`.
    outcome: &'static str,
    /// Present only for the `"moves"` outcome.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    moves: Vec<MoveJson>,
}

#[derive(Serialize)]
struct MoveJson {
    /// Target cell label.
    to: String,
    /// Captured piece letter, uppercase, present for captures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    captures: Option<char>,
}

/// Writes all reports as one pretty-printed JSON document.
pub fn write_reports<W: Write>(mut writer: W, reports: &[QueenReport]) -> std::io::Result<()> {
    let scan = ScanJson {
        queens: reports.iter().map(queen_json).collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &scan)?;
    writeln!(writer)?;
    Ok(())
}

fn queen_json(report: &QueenReport) -> QueenJson {
    let (outcome, moves) = match &report.moves {
        MoveReport::Checkmate => ("checkmate", Vec::new()),
        MoveReport::NoMoves => ("no_moves", Vec::new()),
        MoveReport::Moves(moves) => ("moves", moves.iter().map(move_json).collect()),
    };
    QueenJson {
        queen: report.queen.to_algebraic(),
        outcome,
        moves,
    }
}

fn move_json(mv: &Move) -> MoveJson {
    match mv {
        Move::Quiet(to) => MoveJson {
            to: to.to_algebraic(),
            captures: None,
        },
        Move::Capture(to, piece) => MoveJson {
            to: to.to_algebraic(),
            captures: Some(piece.to_char(Side::Opponent)),
        },
        // a checkmate collapses into the report outcome before rendering
        Move::Checkmate => unreachable!(),
    }
}
