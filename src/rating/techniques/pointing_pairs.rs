//! Pointing pairs: all of a digit's candidates in a block on one line.
//!
//! Also known as box-line reduction. The digit must go on that line inside
//! the block, so it can be cleared from the line's cells in other blocks.

use crate::bitset::Set;
use crate::board::{Block, Cell, Digit, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

pub(crate) fn find(map: &CandidateMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    for block in Block::all() {
        for digit in Digit::all() {
            let cells = block
                .cells()
                .into_iter()
                .filter(|&cell| map.candidates(cell).contains(digit))
                .fold(Set::<Cell>::NONE, |set, cell| set | cell);

            if cells.len() < 2 {
                continue;
            }

            let mut rows = cells.into_iter().map(|cell| cell.row());
            let first_row = rows.next().unwrap();
            if rows.all(|row| row == first_row) {
                findings.push(Finding::PointingPair {
                    block,
                    line: first_row.line(),
                    digit,
                    cells,
                });
                continue;
            }

            let mut cols = cells.into_iter().map(|cell| cell.col());
            let first_col = cols.next().unwrap();
            if cols.all(|col| col == first_col) {
                findings.push(Finding::PointingPair {
                    block,
                    line: first_col.line(),
                    digit,
                    cells,
                });
            }
        }
    }
    findings
}

pub(crate) fn apply(findings: &[Finding], _sudoku: &mut Sudoku, map: &mut CandidateMap) -> u32 {
    let mut eliminated = 0;
    for finding in findings {
        if let Finding::PointingPair {
            block, line, digit, ..
        } = finding
        {
            for cell in line.cells().without(block.cells()) {
                if map.eliminate(cell, *digit) {
                    eliminated += 1;
                }
            }
        }
    }
    eliminated
}

#[cfg(test)]
mod test {
    use super::*;

    // clear 5 from all of block 0 except r0c0 and r0c1, pointing along row 0
    fn map_with_pointing_five() -> CandidateMap {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        for cell in Block::new(0).cells() {
            if cell != Cell::new(0) && cell != Cell::new(1) {
                map.eliminate(cell, Digit::new(5));
            }
        }
        map
    }

    #[test]
    fn detects_row_pointing() {
        let map = map_with_pointing_five();
        let found = find(&map).iter().any(|finding| {
            matches!(
                *finding,
                Finding::PointingPair { block, line, digit, .. }
                    if block == Block::new(0)
                        && line == Cell::new(0).row().line()
                        && digit == Digit::new(5)
            )
        });
        assert!(found);
    }

    #[test]
    fn apply_clears_digit_from_line_outside_block() {
        let mut sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = map_with_pointing_five();
        let findings = find(&map);
        let eliminated = apply(&findings, &mut sudoku, &mut map);
        // row 0 has 6 cells outside block 0
        assert_eq!(eliminated, 6);
        assert!(!map.candidates(Cell::new(8)).contains(Digit::new(5)));
        // the pointing cells keep the digit
        assert!(map.candidates(Cell::new(0)).contains(Digit::new(5)));
    }

    #[test]
    fn single_position_is_not_pointing() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        for cell in Block::new(0).cells() {
            if cell != Cell::new(0) {
                map.eliminate(cell, Digit::new(5));
            }
        }
        let pointing_five = find(&map).iter().any(|finding| {
            matches!(*finding, Finding::PointingPair { digit, .. } if digit == Digit::new(5))
        });
        assert!(!pointing_five);
    }
}
