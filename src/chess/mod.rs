//! Chess pieces on a bounded rectangular board.

pub mod board;
pub mod error;
pub mod movegen;
pub mod piece;
