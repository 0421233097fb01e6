use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => f.write_str("white"),
            Team::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        !self.slide_dirs().is_empty()
    }

    /// Upper-case letter used in diagrams and setups.
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            King => 'K',
            Queen => 'Q',
            Rook => 'R',
            Bishop => 'B',
            Knight => 'N',
            Pawn => 'P',
        }
    }
}

/// A chess piece. Where it stands is tracked by the board, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self { kind, team }
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.team != other.team
    }

    /// `K Q R B N P` for White, lower case for Black.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.team {
            Team::White => c,
            Team::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        use PieceKind::*;
        let kind = match c.to_ascii_uppercase() {
            'K' => King,
            'Q' => Queen,
            'R' => Rook,
            'B' => Bishop,
            'N' => Knight,
            'P' => Pawn,
            _ => return None,
        };
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(kind, team))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.team, self.kind)
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_dirs_are_rook_plus_bishop() {
        for d in ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()) {
            assert!(QUEEN_DIRS.contains(d));
        }
        assert_eq!(QUEEN_DIRS.len(), ROOK_DIRS.len() + BISHOP_DIRS.len());
    }

    #[test]
    fn symbols_roundtrip_case_by_team() {
        let bn = Piece::new(PieceKind::Knight, Team::Black);
        assert_eq!(bn.symbol(), 'n');
        assert_eq!(Piece::from_symbol('n'), Some(bn));
        assert_eq!(Piece::from_symbol('Q'), Some(Piece::new(PieceKind::Queen, Team::White)));
        assert_eq!(Piece::from_symbol('x'), None);
    }

    #[test]
    fn only_queen_rook_bishop_slide() {
        assert!(PieceKind::Queen.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(!PieceKind::King.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(!PieceKind::Pawn.is_slider());
    }
}
