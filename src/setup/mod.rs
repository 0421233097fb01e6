//! Board setups: a serializable description of board size and piece placement.
//!
//! Setups are the configuration layer of the crate. They can be written by hand
//! as JSON, e.g.
//!
//! ```json
//! {
//!   "width": 4,
//!   "height": 4,
//!   "pieces": [
//!     { "kind": "king", "team": "white", "square": { "x": 0, "y": 0 } }
//!   ]
//! }
//! ```
//!
//! or taken from the built-ins in [`crate::setups`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess::board::{Board, PieceId};
use crate::chess::error::BoardError;
use crate::chess::piece::{Piece, PieceKind, Team};
use crate::core::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub kind: PieceKind,
    pub team: Team,
    pub square: Square,
}

impl PlacedPiece {
    pub fn new(kind: PieceKind, team: Team, square: impl Into<Square>) -> Self {
        Self {
            kind,
            team,
            square: square.into(),
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        Piece::new(self.kind, self.team)
    }
}

fn default_side() -> i32 {
    8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSetup {
    #[serde(default = "default_side")]
    pub width: i32,
    #[serde(default = "default_side")]
    pub height: i32,
    #[serde(default)]
    pub pieces: Vec<PlacedPiece>,
}

impl BoardSetup {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pieces: Vec::new(),
        }
    }

    pub fn with_piece(mut self, kind: PieceKind, team: Team, square: impl Into<Square>) -> Self {
        self.pieces.push(PlacedPiece::new(kind, team, square));
        self
    }

    /// Build the board, placing pieces in listed order.
    ///
    /// The returned ids line up with `self.pieces`.
    pub fn build(&self) -> Result<(Board, Vec<PieceId>), BoardError> {
        let mut board = Board::new(self.width, self.height)?;
        let mut ids = Vec::with_capacity(self.pieces.len());
        for p in &self.pieces {
            ids.push(board.place(p.piece(), p.square)?);
        }
        Ok((board, ids))
    }

    /// Snapshot of the pieces currently on `board`.
    pub fn from_board(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            pieces: board
                .pieces()
                .map(|(_, p, sq)| PlacedPiece::new(p.kind, p.team, sq))
                .collect(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, BoardError> {
        serde_json::from_str(s).map_err(|e| BoardError::Parse {
            error: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, BoardError> {
        serde_json::to_string_pretty(self).map_err(|e| BoardError::Serialize {
            error: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let text = fs::read_to_string(path).map_err(|e| BoardError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), BoardError> {
        let text = self.to_json_pretty()?;
        fs::write(path, text).map_err(|e| BoardError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
