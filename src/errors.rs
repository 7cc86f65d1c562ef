#[cfg(doc)]
use crate::Sudoku;

/// Error for the [`Sudoku`] constructors.
///
/// Construction fails fast on malformed input so the grader never rates a
/// board that violates the sudoku invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoard {
    /// Input does not describe exactly 81 cells
    #[error("board should have 81 cells, found {0}")]
    WrongLength(usize),
    /// A cell character that is neither a digit nor an empty-cell marker
    #[error("invalid character {1:?} at cell {0}")]
    InvalidChar(usize, char),
    /// A cell value outside `0..=9`
    #[error("cell {0} contains {1}, outside 0..=9")]
    InvalidDigit(usize, u8),
    /// A digit occurs twice in a row, column or block
    #[error("digit {digit} appears more than once in the unit(s) of cell {cell}")]
    Conflict {
        /// Cell index (0..81) of the second occurrence found
        cell: usize,
        /// The duplicated digit
        digit: u8,
    },
}
