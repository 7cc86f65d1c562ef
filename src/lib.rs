//! A sudoku difficulty grader.
//!
//! ## Overview
//!
//! This library rates sudoku puzzles the way a human experiences them. It
//! solves with pattern-based techniques from naked singles up to XY-Wings
//! and derives the difficulty from the hardest technique the grid demands,
//! rather than from how long a backtracking solver churns.
//!
//! ## Example
//!
//! ```
//! use sudoku_grader::{rate, Difficulty, Sudoku};
//!
//! let line = "...26.7.168..7..9.19...45..82.1...4...46.29...5...3.28..93...74.4..5..367.3.18...";
//!
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! let rating = rate(&sudoku);
//!
//! assert_eq!(rating.difficulty, Difficulty::Easy);
//! println!("{} (score {})", rating.difficulty, rating.max_score);
//! ```

pub mod bitset;
pub mod board;
mod errors;
pub mod generator;
mod helper;
pub mod rating;

pub use crate::board::Sudoku;
pub use crate::errors::InvalidBoard;
pub use crate::rating::{rate, Difficulty, Rating, Technique, Termination};
