use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::chess::error::BoardError;
use crate::chess::movegen::Move;
use crate::chess::piece::Piece;
use crate::core::square::Square;

/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 1 << 20;

static NEXT_BOARD: AtomicU32 = AtomicU32::new(0);

/// Handle returned by [`Board::place`].
///
/// An id is only meaningful on the board that issued it (and that board's
/// clones). Ids are never reused, so a stale id keeps reporting
/// [`BoardError::NotPlaced`] after its piece is removed or captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId {
    board: u32,
    index: u32,
}

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.board, self.index)
    }
}

/// A rectangular board with at most one piece per square.
///
/// Occupancy is a dense `width * height` grid of piece ids; the placement
/// table maps each id back to its piece and square.
#[derive(Debug, Clone)]
pub struct Board {
    id: u32,
    width: i32,
    height: i32,
    cells: Vec<Option<PieceId>>,
    placed: Vec<Option<(Piece, Square)>>,
    live: usize,
}

impl Board {
    /// Fails with `InvalidDimensions` for non-positive sides or more than
    /// [`MAX_CELLS`] squares.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        match (width as usize).checked_mul(height as usize) {
            Some(n) if n <= MAX_CELLS => Ok(Self::with_cells(width, height, n)),
            _ => Err(BoardError::InvalidDimensions { width, height }),
        }
    }

    /// An empty 8x8 board.
    pub fn standard() -> Self {
        Self::with_cells(8, 8, 64)
    }

    fn with_cells(width: i32, height: i32, cells: usize) -> Self {
        Self {
            id: NEXT_BOARD.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            cells: vec![None; cells],
            placed: Vec::new(),
            live: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.x >= 0 && sq.y >= 0 && sq.x < self.width && sq.y < self.height
    }

    #[inline]
    fn index(&self, sq: Square) -> Option<usize> {
        if !self.in_bounds(sq) {
            return None;
        }
        Some((sq.y as usize) * (self.width as usize) + (sq.x as usize))
    }

    fn check_bounds(&self, sq: Square) -> Result<usize, BoardError> {
        self.index(sq).ok_or(BoardError::OutOfBounds {
            square: sq,
            width: self.width,
            height: self.height,
        })
    }

    /// Number of pieces currently on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Register `piece` on `sq`. Never overwrites an existing occupant.
    pub fn place(&mut self, piece: Piece, sq: Square) -> Result<PieceId, BoardError> {
        let idx = self.check_bounds(sq)?;
        if let Some(existing) = self.cells[idx] {
            return Err(BoardError::InvalidPlacement {
                square: sq,
                occupant: self.piece(existing)?,
            });
        }
        let id = PieceId {
            board: self.id,
            index: self.placed.len() as u32,
        };
        self.placed.push(Some((piece, sq)));
        self.cells[idx] = Some(id);
        self.live += 1;
        Ok(id)
    }

    /// Occupant of `sq`, rejecting squares outside the board.
    pub fn occupant_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        let idx = self.check_bounds(sq)?;
        Ok(self.cells[idx].and_then(|id| self.entry(id)).map(|(p, _)| p))
    }

    /// Occupant of `sq`; `None` for empty or off-board squares.
    ///
    /// Lenient form of [`Board::occupant_at`] for callers that filter bounds
    /// themselves.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let idx = self.index(sq)?;
        self.cells[idx].and_then(|id| self.entry(id)).map(|(p, _)| p)
    }

    #[inline]
    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.index(sq).and_then(|idx| self.cells[idx])
    }

    #[inline]
    fn entry(&self, id: PieceId) -> Option<(Piece, Square)> {
        if id.board != self.id {
            return None;
        }
        self.placed.get(id.index()).copied().flatten()
    }

    pub fn piece(&self, id: PieceId) -> Result<Piece, BoardError> {
        self.entry(id)
            .map(|(p, _)| p)
            .ok_or(BoardError::NotPlaced { id })
    }

    pub fn square_of(&self, id: PieceId) -> Result<Square, BoardError> {
        self.entry(id)
            .map(|(_, sq)| sq)
            .ok_or(BoardError::NotPlaced { id })
    }

    /// Take a piece off the board. Its id is `NotPlaced` from now on.
    pub fn remove(&mut self, id: PieceId) -> Result<Piece, BoardError> {
        let (piece, sq) = self.entry(id).ok_or(BoardError::NotPlaced { id })?;
        let idx = self.check_bounds(sq)?;
        self.cells[idx] = None;
        self.placed[id.index()] = None;
        self.live -= 1;
        Ok(piece)
    }

    /// Move the piece on `mv.from` to `mv.to`, capturing an enemy there.
    ///
    /// Only occupancy is checked, not the piece's movement pattern.
    pub fn apply(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        let from_idx = self.check_bounds(mv.from)?;
        let to_idx = self.check_bounds(mv.to)?;
        let Some(id) = self.cells[from_idx] else {
            return Err(BoardError::EmptySquare { square: mv.from });
        };
        let mover = self.piece(id)?;

        let mut captured = None;
        if let Some(target_id) = self.cells[to_idx] {
            let target = self.piece(target_id)?;
            if !target.is_enemy_of(&mover) {
                return Err(BoardError::InvalidPlacement {
                    square: mv.to,
                    occupant: target,
                });
            }
            self.placed[target_id.index()] = None;
            self.live -= 1;
            captured = Some(target);
        }

        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(id);
        self.placed[id.index()] = Some((mover, mv.to));
        Ok(captured)
    }

    /// All placed pieces, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.placed
            .iter()
            .enumerate()
            .filter_map(move |(i, e)| {
                e.as_ref().map(|&(p, sq)| {
                    let id = PieceId {
                        board: self.id,
                        index: i as u32,
                    };
                    (id, p, sq)
                })
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            let row: String = (0..self.width)
                .map(|x| {
                    self.piece_at(Square::new(x, y))
                        .map_or('.', |p| p.symbol())
                })
                .collect();
            writeln!(f, "{y:>2} {row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::{PieceKind, Team};

    fn wk() -> Piece {
        Piece::new(PieceKind::King, Team::White)
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            Board::new(0, 4),
            Err(BoardError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(Board::new(3, -1).is_err());
    }

    #[test]
    fn rejects_boards_past_the_cell_cap() {
        assert!(matches!(
            Board::new(i32::MAX, i32::MAX),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(Board::new(1 << 11, 1 << 10).is_err());
        assert!(Board::new(1 << 10, 1 << 10).is_ok());
    }

    #[test]
    fn len_tracks_placements_removals_and_captures() {
        let mut b = Board::new(4, 4).unwrap();
        let k = b.place(wk(), Square::new(0, 0)).unwrap();
        b.place(Piece::new(PieceKind::Rook, Team::Black), Square::new(0, 3))
            .unwrap();
        b.place(Piece::new(PieceKind::Rook, Team::Black), Square::new(3, 3))
            .unwrap();
        assert_eq!(b.len(), 3);
        b.apply(Move::new(Square::new(0, 0), Square::new(0, 3)))
            .unwrap();
        assert_eq!(b.len(), 2);
        b.remove(k).unwrap();
        assert_eq!(b.len(), 1);
        assert!(!b.is_empty());
    }

    #[test]
    fn standard_matches_new_eight_by_eight() {
        let std_board = Board::standard();
        let built = Board::new(8, 8).unwrap();
        assert_eq!((std_board.width(), std_board.height()), (8, 8));
        assert_eq!(std_board.to_string(), built.to_string());
        assert!(std_board.is_empty());
    }

    #[test]
    fn bounds_are_half_open() {
        let b = Board::new(4, 3).unwrap();
        assert!(b.in_bounds(Square::new(0, 0)));
        assert!(b.in_bounds(Square::new(3, 2)));
        assert!(!b.in_bounds(Square::new(4, 0)));
        assert!(!b.in_bounds(Square::new(0, 3)));
        assert!(!b.in_bounds(Square::new(-1, 0)));
    }

    #[test]
    fn placement_does_not_overwrite() {
        let mut b = Board::new(4, 4).unwrap();
        b.place(wk(), Square::new(1, 1)).unwrap();
        let err = b
            .place(Piece::new(PieceKind::Rook, Team::Black), Square::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidPlacement { occupant, .. } if occupant == wk()));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn display_draws_top_row_first() {
        let mut b = Board::new(3, 2).unwrap();
        b.place(wk(), Square::new(0, 0)).unwrap();
        b.place(Piece::new(PieceKind::Knight, Team::Black), Square::new(2, 1))
            .unwrap();
        assert_eq!(b.to_string(), " 1 ..n\n 0 K..\n");
    }
}
