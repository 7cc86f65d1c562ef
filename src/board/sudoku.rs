use crate::bitset::Set;
use crate::board::{Cell, Digit, House};
use crate::errors::InvalidBoard;

use std::fmt;

/// A 9x9 sudoku grid, fully or partially filled.
///
/// Cells hold `0` for empty or a digit `1..=9`. Every constructor checks the
/// input: 81 cells, digits in range and no digit twice in any row, column or
/// block. A `Sudoku` held by the grader is always a valid board.
///
/// `Clone`/`Copy` produce independent deep copies; the grader copies the
/// caller's board before mutating it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; 81]);

impl Sudoku {
    /// Creates a sudoku from a byte array, `0` meaning empty.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, InvalidBoard> {
        for (cell, &byte) in bytes.iter().enumerate() {
            if byte > 9 {
                return Err(InvalidBoard::InvalidDigit(cell, byte));
            }
        }
        let sudoku = Sudoku(bytes);
        sudoku.check_unique_digits()?;
        Ok(sudoku)
    }

    /// Creates a sudoku from 9 rows of 9 cells, `0` meaning empty.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Sudoku, InvalidBoard> {
        let mut bytes = [0; 81];
        for (chunk, row) in bytes.chunks_exact_mut(9).zip(rows.iter()) {
            chunk.copy_from_slice(row);
        }
        Sudoku::from_bytes(bytes)
    }

    /// Creates a sudoku from a line of 81 characters. Digits stand for
    /// themselves, `.`, `_` and `0` for empty cells.
    pub fn from_str_line(s: &str) -> Result<Sudoku, InvalidBoard> {
        let n_chars = s.chars().count();
        if n_chars != 81 {
            return Err(InvalidBoard::WrongLength(n_chars));
        }
        let mut bytes = [0; 81];
        for (cell, ch) in s.chars().enumerate() {
            bytes[cell] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => return Err(InvalidBoard::InvalidChar(cell, ch)),
            };
        }
        let sudoku = Sudoku(bytes);
        sudoku.check_unique_digits()?;
        Ok(sudoku)
    }

    // uniqueness invariant: no digit twice among the filled cells of a unit
    fn check_unique_digits(&self) -> Result<(), InvalidBoard> {
        for house in House::all() {
            let mut seen = Set::NONE;
            for cell in house.cells() {
                if let Some(digit) = self.get(cell) {
                    if seen.contains(digit) {
                        return Err(InvalidBoard::Conflict {
                            cell: cell.as_index(),
                            digit: digit.get(),
                        });
                    }
                    seen |= digit;
                }
            }
        }
        Ok(())
    }

    /// Returns the digit in `cell`, `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn assign(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Checks whether all cells are filled.
    ///
    /// The uniqueness invariant is enforced at construction, so a fully
    /// filled grid is a solved grid.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&num| num != 0)
    }

    /// Number of filled cells.
    pub fn n_clues(&self) -> usize {
        self.0.iter().filter(|&&num| num != 0).count()
    }

    /// Returns the cell contents as an array, `0` meaning empty.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    ///////////////////////////////////////////////////////////////////////////
    //      Backtracking solver
    ///////////////////////////////////////////////////////////////////////////

    fn first_empty(&self) -> Option<Cell> {
        self.0
            .iter()
            .position(|&num| num == 0)
            .map(|idx| Cell::new(idx as u8))
    }

    fn can_place(&self, cell: Cell, digit: Digit) -> bool {
        let mut excluded = Set::NONE;
        for other in cell.row().cells() | cell.col().cells() | cell.block().cells() {
            if let Some(placed) = self.get(other) {
                excluded |= placed;
            }
        }
        !excluded.contains(digit)
    }

    /// Finds a solution via backtracking. Returns `None` if none exists.
    pub fn solve_one(&self) -> Option<Sudoku> {
        let mut work = *self;
        match work.solve_recursive() {
            true => Some(work),
            false => None,
        }
    }

    fn solve_recursive(&mut self) -> bool {
        let cell = match self.first_empty() {
            Some(cell) => cell,
            None => return true,
        };
        for digit in Digit::all() {
            if self.can_place(cell, digit) {
                self.assign(cell, digit);
                if self.solve_recursive() {
                    return true;
                }
                self.0[cell.as_index()] = 0; // backtrack
            }
        }
        false
    }

    /// Like [`solve_one`](Self::solve_one), but additionally reports how many
    /// solver calls were needed. The count is a rough proxy for how much
    /// guessing the puzzle forces on a backtracker.
    pub fn solve_counting_steps(&self) -> (Option<Sudoku>, usize) {
        fn solve(sudoku: &mut Sudoku, steps: &mut usize) -> bool {
            *steps += 1;
            let cell = match sudoku.first_empty() {
                Some(cell) => cell,
                None => return true,
            };
            for digit in Digit::all() {
                if sudoku.can_place(cell, digit) {
                    sudoku.assign(cell, digit);
                    if solve(sudoku, steps) {
                        return true;
                    }
                    sudoku.0[cell.as_index()] = 0;
                }
            }
            false
        }

        let mut work = *self;
        let mut steps = 0;
        match solve(&mut work, &mut steps) {
            true => (Some(work), steps),
            false => (None, steps),
        }
    }

    /// Counts solutions, stopping as soon as more than `limit` are found.
    /// Returns `min(number of solutions, limit + 1)`.
    pub fn solution_count_up_to(&self, limit: usize) -> usize {
        fn count(sudoku: &mut Sudoku, limit: usize, found: &mut usize) {
            if *found > limit {
                return;
            }
            let cell = match sudoku.first_empty() {
                Some(cell) => cell,
                None => {
                    *found += 1;
                    return;
                }
            };
            for digit in Digit::all() {
                if sudoku.can_place(cell, digit) {
                    sudoku.assign(cell, digit);
                    count(sudoku, limit, found);
                    sudoku.0[cell.as_index()] = 0;
                    if *found > limit {
                        return;
                    }
                }
            }
        }

        let mut work = *self;
        let mut found = 0;
        count(&mut work, limit, &mut found);
        found
    }

    /// Checks whether exactly one solution exists.
    pub fn has_unique_solution(&self) -> bool {
        self.solution_count_up_to(1) == 1
    }

    // solve with a per-cell shuffled digit order, for the generator
    pub(crate) fn solve_randomized(&mut self, rng: &mut impl rand::Rng) -> bool {
        use rand::seq::SliceRandom;

        let cell = match self.first_empty() {
            Some(cell) => cell,
            None => return true,
        };
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);
        for &num in &digits {
            let digit = Digit::new(num);
            if self.can_place(cell, digit) {
                self.assign(cell, digit);
                if self.solve_randomized(rng) {
                    return true;
                }
                self.0[cell.as_index()] = 0;
            }
        }
        false
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (_, 3) | (_, 6) => write!(f, " ")?, // separate stacks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate bands in rows
                (_, 0) if cell != 0 => writeln!(f)?,
                _ => {}
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LINE: &str =
        "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";

    #[test]
    fn parse_line_roundtrip() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        assert_eq!(sudoku.get(Cell::new(3)), Some(Digit::new(2)));
        assert_eq!(sudoku.get(Cell::new(0)), None);
        assert_eq!(sudoku.n_clues(), 27);
    }

    #[test]
    fn from_rows_matches_line_parse() {
        let from_line = Sudoku::from_str_line(LINE).unwrap();
        let mut rows = [[0; 9]; 9];
        for (idx, byte) in from_line.to_bytes().iter().enumerate() {
            rows[idx / 9][idx % 9] = *byte;
        }
        assert_eq!(Sudoku::from_rows(rows), Ok(from_line));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Sudoku::from_str_line("123"),
            Err(InvalidBoard::WrongLength(3))
        );
    }

    #[test]
    fn rejects_invalid_char() {
        let mut line = String::from(&LINE[..80]);
        line.push('x');
        assert_eq!(
            Sudoku::from_str_line(&line),
            Err(InvalidBoard::InvalidChar(80, 'x'))
        );
    }

    #[test]
    fn rejects_out_of_range_digit() {
        let mut bytes = [0; 81];
        bytes[17] = 10;
        assert_eq!(
            Sudoku::from_bytes(bytes),
            Err(InvalidBoard::InvalidDigit(17, 10))
        );
    }

    #[test]
    fn rejects_duplicate_in_row() {
        let mut bytes = [0; 81];
        bytes[0] = 5;
        bytes[8] = 5;
        assert_eq!(
            Sudoku::from_bytes(bytes),
            Err(InvalidBoard::Conflict { cell: 8, digit: 5 })
        );
    }

    #[test]
    fn rejects_duplicate_in_block() {
        let mut bytes = [0; 81];
        bytes[0] = 7; // r0c0
        bytes[10] = 7; // r1c1, same block, different row and col
        assert!(matches!(
            Sudoku::from_bytes(bytes),
            Err(InvalidBoard::Conflict { digit: 7, .. })
        ));
    }

    #[test]
    fn solves_unique_puzzle() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        let solution = sudoku.solve_one().unwrap();
        assert!(solution.is_solved());
        // the givens survive
        for cell in Cell::all() {
            if let Some(digit) = sudoku.get(cell) {
                assert_eq!(solution.get(cell), Some(digit));
            }
        }
        assert!(sudoku.has_unique_solution());
    }

    #[test]
    fn counts_multiple_solutions() {
        // empty board has a huge number of solutions; count caps at limit + 1
        let empty = Sudoku::from_bytes([0; 81]).unwrap();
        assert_eq!(empty.solution_count_up_to(3), 4);
        assert!(!empty.has_unique_solution());
    }

    #[test]
    fn step_count_is_at_least_empty_cells() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        let (solution, steps) = sudoku.solve_counting_steps();
        assert!(solution.unwrap().is_solved());
        // one call per filled cell plus the root call, more if it backtracked
        assert!(steps > 81 - sudoku.n_clues());
    }
}
