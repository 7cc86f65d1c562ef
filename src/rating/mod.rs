//! The difficulty rating engine.
//!
//! Rating simulates a human working through a grid with pattern-based
//! techniques instead of backtracking. The hardest technique the grid
//! demands determines its difficulty label.

mod candidates;
mod engine;
mod finding;
mod techniques;

pub use self::candidates::CandidateMap;
pub use self::engine::{rate, Difficulty, Rating, Technique, Termination};
