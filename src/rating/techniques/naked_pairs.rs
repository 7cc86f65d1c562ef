//! Naked pairs: two cells of a house locked on the same two candidates.

use crate::board::{Cell, House, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

pub(crate) fn find(map: &CandidateMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    for house in House::all() {
        let bivalue: Vec<Cell> = house
            .cells()
            .into_iter()
            .filter(|&cell| map.candidates(cell).len() == 2)
            .collect();

        for (i, &first) in bivalue.iter().enumerate() {
            for &second in &bivalue[i + 1..] {
                if map.candidates(first) == map.candidates(second) {
                    findings.push(Finding::NakedPair {
                        house,
                        cells: [first, second],
                        digits: map.candidates(first),
                    });
                }
            }
        }
    }
    findings
}

pub(crate) fn apply(findings: &[Finding], _sudoku: &mut Sudoku, map: &mut CandidateMap) -> u32 {
    let mut eliminated = 0;
    for finding in findings {
        if let Finding::NakedPair {
            house,
            cells,
            digits,
        } = finding
        {
            let rest = house.cells().without(cells[0]).without(cells[1]);
            for cell in rest {
                for digit in *digits {
                    if map.eliminate(cell, digit) {
                        eliminated += 1;
                    }
                }
            }
        }
    }
    eliminated
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitset::Set;
    use crate::board::{Digit, Row};

    // restrict two cells of row 0 to the same two candidates
    fn map_with_pair() -> CandidateMap {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        for cell in [Cell::new(0), Cell::new(4)] {
            for num in 3..=9 {
                map.eliminate(cell, Digit::new(num));
            }
        }
        map
    }

    #[test]
    fn detects_pair_in_row() {
        let map = map_with_pair();
        let expected = Finding::NakedPair {
            house: Row::new(0).house(),
            cells: [Cell::new(0), Cell::new(4)],
            digits: Digit::new(1).as_set() | Digit::new(2),
        };
        assert!(find(&map).contains(&expected));
    }

    #[test]
    fn apply_strips_pair_digits_from_rest_of_house() {
        let mut sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = map_with_pair();

        let findings = find(&map);
        let eliminated = apply(&findings, &mut sudoku, &mut map);
        assert!(eliminated > 0);

        let pair: Set<Digit> = Digit::new(1).as_set() | Digit::new(2);
        for cell in Row::new(0).cells() {
            match cell.get() {
                0 | 4 => assert_eq!(map.candidates(cell), pair),
                _ => assert!(!map.candidates(cell).overlaps(pair)),
            }
        }
    }

    #[test]
    fn second_application_eliminates_nothing() {
        let mut sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = map_with_pair();
        let findings = find(&map);
        apply(&findings, &mut sudoku, &mut map);
        assert_eq!(apply(&findings, &mut sudoku, &mut map), 0);
    }
}
