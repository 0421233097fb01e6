//! Pseudo-legal move generation.
//!
//! Moves follow each piece's pattern and respect occupancy (blocking, captures,
//! board edges). Whether a move leaves the mover's own king attacked is not
//! considered.

use rustc_hash::FxHashSet;

use crate::chess::board::{Board, PieceId};
use crate::chess::error::BoardError;
use crate::chess::piece::{Piece, PieceKind, Team, KNIGHT_DELTAS};
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::square::Square;

/// Destination squares reachable by one piece.
pub type MoveSet = FxHashSet<Square>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Moves for the piece `id` from wherever the board currently has it.
pub fn generate_moves(board: &Board, id: PieceId) -> Result<MoveSet, BoardError> {
    let piece = board.piece(id)?;
    let from = board.square_of(id)?;
    moves_from(board, piece, from)
}

/// Moves `piece` would have if it stood on `from`.
///
/// `from` itself is treated as the mover's square; whatever the board holds
/// there is ignored.
pub fn moves_from(board: &Board, piece: Piece, from: Square) -> Result<MoveSet, BoardError> {
    if !board.in_bounds(from) {
        return Err(BoardError::OutOfBounds {
            square: from,
            width: board.width(),
            height: board.height(),
        });
    }

    let mut out = MoveSet::default();
    match piece.kind {
        PieceKind::King => step_moves(board, piece, from, &KING_STEPS, &mut out)?,
        PieceKind::Knight => step_moves(board, piece, from, &KNIGHT_DELTAS, &mut out)?,
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            slide_moves(board, piece, from, piece.kind.slide_dirs(), &mut out)?
        }
        PieceKind::Pawn => return Err(BoardError::UnsupportedPiece { kind: piece.kind }),
    }
    Ok(out)
}

/// Fixed-offset movers: keep on-board targets that are empty or enemy-held.
fn step_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    deltas: &[Coord],
    out: &mut MoveSet,
) -> Result<(), BoardError> {
    for &d in deltas {
        let to = from.offset(d);
        if !board.in_bounds(to) {
            continue;
        }
        match board.occupant_at(to)? {
            Some(other) if !other.is_enemy_of(&piece) => continue,
            _ => {
                out.insert(to);
            }
        }
    }
    Ok(())
}

/// Ray-walk each direction until the edge or the first occupied square.
fn slide_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    dirs: &[Coord],
    out: &mut MoveSet,
) -> Result<(), BoardError> {
    for &dir in dirs {
        for step in 1.. {
            let to = from.offset(dir * step);
            if !board.in_bounds(to) {
                break;
            }
            match board.occupant_at(to)? {
                None => {
                    out.insert(to);
                }
                Some(other) => {
                    // Capture ends the ray; a friendly blocker is not a target.
                    if other.is_enemy_of(&piece) {
                        out.insert(to);
                    }
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Every pseudo-legal move for `team`, ordered by piece id then destination.
///
/// Pawns are skipped since they have no generated moves.
pub fn pseudo_legal_moves(board: &Board, team: Team) -> Result<Vec<Move>, BoardError> {
    let mut out = Vec::new();
    for (id, piece, from) in board.pieces() {
        if piece.team != team || piece.kind == PieceKind::Pawn {
            continue;
        }
        let mut dests: Vec<Square> = generate_moves(board, id)?.into_iter().collect();
        dests.sort_unstable();
        out.extend(dests.into_iter().map(|to| Move::new(from, to)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(squares: &[(i32, i32)]) -> MoveSet {
        squares.iter().map(|&s| Square::from(s)).collect()
    }

    #[test]
    fn rook_on_empty_board_sees_full_rank_and_file() {
        let mut b = Board::new(5, 5).unwrap();
        let id = b
            .place(Piece::new(PieceKind::Rook, Team::White), Square::new(1, 3))
            .unwrap();
        let moves = generate_moves(&b, id).unwrap();
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|s| s.x == 1 || s.y == 3));
        assert!(!moves.contains(&Square::new(1, 3)));
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let mut b = Board::new(6, 6).unwrap();
        b.place(Piece::new(PieceKind::Knight, Team::Black), Square::new(4, 4))
            .unwrap();
        b.place(Piece::new(PieceKind::Knight, Team::White), Square::new(2, 0))
            .unwrap();
        let from = Square::new(2, 2);
        let q = moves_from(&b, Piece::new(PieceKind::Queen, Team::White), from).unwrap();
        let r = moves_from(&b, Piece::new(PieceKind::Rook, Team::White), from).unwrap();
        let bi = moves_from(&b, Piece::new(PieceKind::Bishop, Team::White), from).unwrap();
        let union: MoveSet = r.union(&bi).copied().collect();
        assert_eq!(q, union);
        assert!(q.contains(&Square::new(4, 4)));
        assert!(!q.contains(&Square::new(5, 5)));
        assert!(!q.contains(&Square::new(2, 0)));
    }

    #[test]
    fn knight_jumps_over_blockers() {
        let mut b = Board::new(3, 3).unwrap();
        for sq in [(0, 1), (1, 0), (1, 1)] {
            b.place(Piece::new(PieceKind::Rook, Team::White), sq.into())
                .unwrap();
        }
        let n = moves_from(&b, Piece::new(PieceKind::Knight, Team::White), Square::new(0, 0))
            .unwrap();
        assert_eq!(n, set(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn pawn_is_rejected_explicitly() {
        let b = Board::standard();
        let err = moves_from(&b, Piece::new(PieceKind::Pawn, Team::White), Square::new(0, 1))
            .unwrap_err();
        assert!(matches!(err, BoardError::UnsupportedPiece { kind: PieceKind::Pawn }));
    }

    #[test]
    fn start_square_must_be_on_board() {
        let b = Board::new(4, 4).unwrap();
        let err = moves_from(&b, Piece::new(PieceKind::King, Team::White), Square::new(4, 0))
            .unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { .. }));
    }
}
