use crate::bitset::Set;
use crate::board::{Cell, Digit, Sudoku};
use crate::helper::{CellArray, HouseArray};

/// Per-cell candidate digits, derived from a grid snapshot.
///
/// An empty cell's candidates are the digits not yet placed in its row,
/// column or block. Solved cells carry the empty set, which lets house scans
/// skip them without consulting the grid.
///
/// The map is a pure function of the grid it was built from. The grader
/// rebuilds it after every applied technique rather than maintaining it
/// incrementally, so eliminations live only as long as the current pass.
#[derive(Clone, PartialEq, Eq)]
pub struct CandidateMap {
    candidates: CellArray<Set<Digit>>,
}

impl CandidateMap {
    pub fn from_grid(sudoku: &Sudoku) -> CandidateMap {
        let mut house_digits = HouseArray([Set::NONE; 27]);
        for cell in Cell::all() {
            if let Some(digit) = sudoku.get(cell) {
                house_digits[cell.row()] |= digit;
                house_digits[cell.col()] |= digit;
                house_digits[cell.block()] |= digit;
            }
        }

        let mut candidates = CellArray([Set::NONE; 81]);
        for cell in Cell::all() {
            if sudoku.get(cell).is_none() {
                let excluded = house_digits[cell.row()]
                    | house_digits[cell.col()]
                    | house_digits[cell.block()];
                candidates[cell] = Set::ALL.without(excluded);
            }
        }
        CandidateMap { candidates }
    }

    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Removes `digit` from `cell`'s candidates. Returns whether the digit
    /// was present.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        let had = self.candidates[cell].contains(digit);
        self.candidates[cell].remove(digit);
        had
    }
}
