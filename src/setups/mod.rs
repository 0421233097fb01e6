//! Built-in setups (compile-time configs).

use crate::chess::piece::{PieceKind, Team};
use crate::setup::BoardSetup;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The usual starting position, White on rows 0 and 1.
pub fn standard() -> BoardSetup {
    let mut setup = BoardSetup::new(8, 8);
    for (x, &kind) in BACK_RANK.iter().enumerate() {
        let x = x as i32;
        setup = setup
            .with_piece(kind, Team::White, (x, 0))
            .with_piece(PieceKind::Pawn, Team::White, (x, 1))
            .with_piece(PieceKind::Pawn, Team::Black, (x, 6))
            .with_piece(kind, Team::Black, (x, 7));
    }
    setup
}

/// A lone white king in the middle of a 4x4 board.
pub fn lone_king_4x4() -> BoardSetup {
    BoardSetup::new(4, 4).with_piece(PieceKind::King, Team::White, (1, 1))
}

/// White king in the corner next to a friendly pawn and an enemy bishop.
pub fn king_capture_4x4() -> BoardSetup {
    BoardSetup::new(4, 4)
        .with_piece(PieceKind::King, Team::White, (0, 0))
        .with_piece(PieceKind::Pawn, Team::White, (1, 1))
        .with_piece(PieceKind::Bishop, Team::Black, (0, 1))
}

/// White bishop on a 5x5 board, one diagonal blocked by its own king and one
/// ending on an enemy pawn.
pub fn bishop_block_5x5() -> BoardSetup {
    BoardSetup::new(5, 5)
        .with_piece(PieceKind::Bishop, Team::White, (2, 2))
        .with_piece(PieceKind::Pawn, Team::Black, (3, 3))
        .with_piece(PieceKind::King, Team::White, (1, 1))
}

/// Return a setup by name.
pub fn by_name(name: &str) -> Option<BoardSetup> {
    match name {
        "standard" => Some(standard()),
        "lone_king_4x4" => Some(lone_king_4x4()),
        "king_capture_4x4" => Some(king_capture_4x4()),
        "bishop_block_5x5" => Some(bishop_block_5x5()),
        _ => None,
    }
}

/// Names of all built-in setups.
pub fn names() -> &'static [&'static str] {
    &[
        "standard",
        "lone_king_4x4",
        "king_capture_4x4",
        "bishop_block_5x5",
    ]
}
