//! Puzzle generation via randomized backtracking.

use crate::board::{Cell, Sudoku};

use rand::prelude::*;

/// Generates a random solved grid.
pub fn generate_solved(rng: &mut impl Rng) -> Sudoku {
    let mut sudoku = Sudoku([0; 81]);
    // an empty grid always has a solution
    let solved = sudoku.solve_randomized(rng);
    debug_assert!(solved);
    sudoku
}

/// Generates a puzzle with a unique solution by digging clues out of a
/// random solved grid.
///
/// Removal stops when `target_clues` cells remain or when no further cell
/// can be cleared without losing uniqueness, whichever comes first. Targets
/// below the known minimum of 17 clues are never reached.
pub fn generate_puzzle(rng: &mut impl Rng, target_clues: usize) -> Sudoku {
    let mut sudoku = generate_solved(rng);

    let mut cells: Vec<Cell> = Cell::all().collect();
    cells.shuffle(rng);

    for cell in cells {
        if sudoku.n_clues() <= target_clues {
            break;
        }
        let removed = sudoku.0[cell.as_index()];
        sudoku.0[cell.as_index()] = 0;
        if !sudoku.has_unique_solution() {
            sudoku.0[cell.as_index()] = removed;
        }
    }
    sudoku
}
