use std::fmt;

use crate::chess::board::PieceId;
use crate::chess::piece::{Piece, PieceKind};
use crate::core::square::Square;

#[derive(Debug)]
/// Structured errors returned by board operations and move generation.
pub enum BoardError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A square outside `0 <= x < width, 0 <= y < height`.
    OutOfBounds {
        square: Square,
        width: i32,
        height: i32,
    },
    /// The target square already holds a piece that may not be replaced.
    InvalidPlacement { square: Square, occupant: Piece },
    /// The piece id has no recorded position (never placed, or removed).
    NotPlaced { id: PieceId },
    /// A move was requested from a square with no piece on it.
    EmptySquare { square: Square },
    /// Move generation is not defined for this piece kind.
    UnsupportedPiece { kind: PieceKind },
    /// I/O failure while reading or writing a setup file.
    Io { path: String, error: String },
    /// A setup document could not be parsed.
    Parse { error: String },
    /// A setup could not be encoded as JSON.
    Serialize { error: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {width}x{height}")
            }
            BoardError::OutOfBounds {
                square,
                width,
                height,
            } => write!(f, "square {square} is outside the {width}x{height} board"),
            BoardError::InvalidPlacement { square, occupant } => {
                write!(f, "square {square} is already occupied by {occupant}")
            }
            BoardError::NotPlaced { id } => write!(f, "piece {id} is not placed on the board"),
            BoardError::EmptySquare { square } => write!(f, "no piece on {square}"),
            BoardError::UnsupportedPiece { kind } => {
                write!(f, "move generation is not supported for {kind:?}")
            }
            BoardError::Io { path, error } => write!(f, "io error for {path}: {error}"),
            BoardError::Parse { error } => write!(f, "invalid setup: {error}"),
            BoardError::Serialize { error } => write!(f, "failed to encode setup: {error}"),
        }
    }
}

impl std::error::Error for BoardError {}
