//! Pseudo-legal chess move generation on bounded rectangular boards.
//!
//! The [`chess::board::Board`] owns occupancy; [`chess::movegen`] answers
//! "where can this piece go" without mutating anything.

pub mod core;
pub mod chess;
pub mod setup;
pub mod setups;
