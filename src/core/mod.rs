//! Low-level geometry shared by the board and the move generator.
//!
//! - [`coord`]: integer offsets and the king step ring.
//! - [`square`]: board cells as `(x, y)` value types.

pub mod coord;
pub mod square;
