//! The board itself plus the position and digit types that index into it
mod candidate;
mod digit;
pub mod positions;
mod sudoku;

pub(crate) use self::positions::*;

pub use self::{
    candidate::Candidate,
    digit::Digit,
    positions::{Block, Cell, Col, House, Line, Row},
    sudoku::Sudoku,
};
