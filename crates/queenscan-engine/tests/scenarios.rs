//! Whole-grid scenarios: parse a textual board, scan it, and check the
//! reports a caller would render.

use queenscan_core::{Board, Coord, Piece};
use queenscan_engine::{scan, Move, MoveReport};

fn board(grid: &str) -> Board {
    Board::parse(grid).unwrap()
}

fn at(label: &str) -> Coord {
    Coord::from_algebraic(label).unwrap()
}

#[test]
fn test_startpos_queen_boxed_in() {
    let board = board(concat!(
        "RNBQKBNR\n",
        "PPPPPPPP\n",
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "pppppppp\n",
        "rnbqkbnr\n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].queen, at("d1"));
    assert_eq!(reports[0].moves, MoveReport::NoMoves);
}

#[test]
fn test_lone_queen_covers_27_cells() {
    let board = board(concat!(
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "   q    \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].queen, at("d4"));
    match &reports[0].moves {
        MoveReport::Moves(moves) => {
            assert_eq!(moves.len(), 27);
            // the north ray is reported first
            let first: Vec<String> = moves[..4].iter().map(|m| m.to_string()).collect();
            assert_eq!(first, ["d5", "d6", "d7", "d8"]);
        }
        other => panic!("expected a move list, got {:?}", other),
    }
}

#[test]
fn test_captures_stop_rays() {
    // the queen on d4 faces a rook two cells north and a pawn on the
    // north-east diagonal
    let board = board(concat!(
        "        \n",
        "        \n",
        "   R    \n",
        "    P   \n",
        "   q    \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    let moves = match &reports[0].moves {
        MoveReport::Moves(moves) => moves,
        other => panic!("expected a move list, got {:?}", other),
    };
    assert!(moves.contains(&Move::Quiet(at("d5"))));
    assert!(moves.contains(&Move::Capture(at("d6"), Piece::Rook)));
    assert!(moves.contains(&Move::Capture(at("e5"), Piece::Pawn)));
    // nothing beyond either blocker
    assert!(!moves.iter().any(|m| m.to_string().starts_with("d7")));
    assert!(!moves.iter().any(|m| m.to_string().starts_with("f6")));
}

#[test]
fn test_checkmate_suppresses_moves() {
    let board = board(concat!(
        "   K    \n",
        "        \n",
        "        \n",
        "        \n",
        "   q    \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].moves, MoveReport::Checkmate);
}

#[test]
fn test_shielded_king_not_checkmate() {
    let board = board(concat!(
        "   K    \n",
        "   R    \n",
        "        \n",
        "        \n",
        "   q    \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    let moves = match &reports[0].moves {
        MoveReport::Moves(moves) => moves,
        other => panic!("expected a move list, got {:?}", other),
    };
    assert!(moves.contains(&Move::Capture(at("d7"), Piece::Rook)));
}

#[test]
fn test_ringed_queen_has_no_moves() {
    let board = board(concat!(
        "        \n",
        "        \n",
        "        \n",
        "  ppp   \n",
        "  pqp   \n",
        "  ppp   \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].moves, MoveReport::NoMoves);
}

#[test]
fn test_independent_queen_reports() {
    // the c7 queen sees the king; the f3 queen is buried behind own pawns
    let board = board(concat!(
        "  K     \n",
        "  q     \n",
        "        \n",
        "        \n",
        "    ppp \n",
        "    pqp \n",
        "    ppp \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].queen, at("c7"));
    assert_eq!(reports[0].moves, MoveReport::Checkmate);
    assert_eq!(reports[1].queen, at("f3"));
    assert_eq!(reports[1].moves, MoveReport::NoMoves);
}

#[test]
fn test_no_queens_no_reports() {
    let board = board(concat!(
        "RNBQKBNR\n",
        "PPPPPPPP\n",
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "pppppppp\n",
        "rnbk bnr\n",
    ));
    assert!(scan(&board).is_empty());
}

#[test]
fn test_opponent_queen_is_capturable() {
    let board = board(concat!(
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "   q  Q \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].queen, at("d4"));
    let moves = match &reports[0].moves {
        MoveReport::Moves(moves) => moves,
        other => panic!("expected a move list, got {:?}", other),
    };
    assert!(moves.contains(&Move::Capture(at("g4"), Piece::Queen)));
    assert!(!moves.iter().any(|m| m.to_string().starts_with("h4")));
}

#[test]
fn test_two_queens_mixed_verdicts() {
    // the king on e7 is off every ray; only the d4 queen reaches the rook
    let board = board(concat!(
        "        \n",
        "    K   \n",
        "   R    \n",
        "        \n",
        "q  q    \n",
        "        \n",
        "        \n",
        "        \n",
    ));
    let reports = scan(&board);
    assert_eq!(reports.len(), 2);

    let a4 = &reports[0];
    assert_eq!(a4.queen, at("a4"));
    let lines: Vec<String> = match &a4.moves {
        MoveReport::Moves(moves) => moves.iter().map(|m| m.to_string()).collect(),
        other => panic!("expected a move list, got {:?}", other),
    };
    assert_eq!(lines.len(), 16);
    assert!(lines.contains(&"a5".to_string()));
    assert!(lines.contains(&"c6".to_string()));
    assert!(!lines.iter().any(|l| l.contains('x')));

    let d4 = &reports[1];
    assert_eq!(d4.queen, at("d4"));
    match &d4.moves {
        MoveReport::Moves(moves) => {
            assert!(moves.contains(&Move::Capture(at("d6"), Piece::Rook)));
        }
        other => panic!("expected a move list, got {:?}", other),
    }
}
