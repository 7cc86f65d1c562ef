//! Basic fish: X-Wing and Swordfish.
//!
//! A fish of size N confines a digit to N cover lines across N base lines.
//! All base lines share one orientation, the cover lines run perpendicular.
//! The digit must land on a base line within each cover line, so every
//! other candidate of the digit on the cover lines can be eliminated.

use crate::bitset::Set;
use crate::board::positions::LinePos;
use crate::board::{Cell, Digit, Line, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

// positions on `line` still open for `digit`
fn line_positions(map: &CandidateMap, line: Line, digit: Digit) -> Set<LinePos> {
    let mut positions = Set::NONE;
    for pos in LinePos::all() {
        if map.candidates(line.cell_at(pos)).contains(digit) {
            positions |= pos;
        }
    }
    positions
}

// the 9 rows and the 9 cols, as line index ranges
const ORIENTATIONS: [std::ops::Range<u8>; 2] = [0..9, 9..18];

pub(crate) fn find_x_wings(map: &CandidateMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    for digit in Digit::all() {
        for orientation in ORIENTATIONS {
            let lines: Vec<(Line, Set<LinePos>)> = orientation
                .map(Line::new)
                .map(|line| (line, line_positions(map, line, digit)))
                .filter(|&(_, positions)| positions.len() == 2)
                .collect();

            for (i, &(line1, positions)) in lines.iter().enumerate() {
                for &(line2, other) in &lines[i + 1..] {
                    if positions != other {
                        continue;
                    }
                    let mut cover = positions
                        .into_iter()
                        .map(|pos| line1.crossing_line_at(pos));
                    findings.push(Finding::XWing {
                        digit,
                        base: [line1, line2],
                        cover: [cover.next().unwrap(), cover.next().unwrap()],
                    });
                }
            }
        }
    }
    findings
}

pub(crate) fn find_swordfish(map: &CandidateMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    for digit in Digit::all() {
        for orientation in ORIENTATIONS {
            let lines: Vec<(Line, Set<LinePos>)> = orientation
                .map(Line::new)
                .map(|line| (line, line_positions(map, line, digit)))
                .filter(|&(_, positions)| (2..=3).contains(&positions.len()))
                .collect();

            for (i, &(line1, positions1)) in lines.iter().enumerate() {
                for (j, &(line2, positions2)) in lines.iter().enumerate().skip(i + 1) {
                    for &(line3, positions3) in &lines[j + 1..] {
                        let union = positions1 | positions2 | positions3;
                        if union.len() != 3 {
                            continue;
                        }
                        let mut cover =
                            union.into_iter().map(|pos| line1.crossing_line_at(pos));
                        findings.push(Finding::Swordfish {
                            digit,
                            base: [line1, line2, line3],
                            cover: [
                                cover.next().unwrap(),
                                cover.next().unwrap(),
                                cover.next().unwrap(),
                            ],
                        });
                    }
                }
            }
        }
    }
    findings
}

fn eliminate(map: &mut CandidateMap, digit: Digit, base: &[Line], cover: &[Line]) -> u32 {
    let base_cells = base
        .iter()
        .fold(Set::<Cell>::NONE, |cells, line| cells | line.cells());
    let cover_cells = cover
        .iter()
        .fold(Set::<Cell>::NONE, |cells, line| cells | line.cells());

    let mut eliminated = 0;
    for cell in cover_cells.without(base_cells) {
        if map.eliminate(cell, digit) {
            eliminated += 1;
        }
    }
    eliminated
}

pub(crate) fn apply(findings: &[Finding], _sudoku: &mut Sudoku, map: &mut CandidateMap) -> u32 {
    let mut eliminated = 0;
    for finding in findings {
        match finding {
            Finding::XWing { digit, base, cover } => {
                eliminated += eliminate(map, *digit, base, cover);
            }
            Finding::Swordfish { digit, base, cover } => {
                eliminated += eliminate(map, *digit, base, cover);
            }
            _ => {}
        }
    }
    eliminated
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Col, Row};

    // confine `digit` in the given rows to the given columns
    fn confine(map: &mut CandidateMap, digit: Digit, rows: &[u8], cols: &[u8]) {
        for &row in rows {
            for cell in Row::new(row).cells() {
                if !cols.contains(&cell.col().get()) {
                    map.eliminate(cell, digit);
                }
            }
        }
    }

    #[test]
    fn detects_x_wing_in_rows() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        let digit = Digit::new(4);
        confine(&mut map, digit, &[2, 5], &[3, 6]);

        let expected = Finding::XWing {
            digit,
            base: [Row::new(2).line(), Row::new(5).line()],
            cover: [Col::new(3).line(), Col::new(6).line()],
        };
        assert!(find_x_wings(&map).contains(&expected));
    }

    #[test]
    fn x_wing_elimination_spares_pattern_cells() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut sudoku_work = sudoku;
        let mut map = CandidateMap::from_grid(&sudoku);
        let digit = Digit::new(4);
        confine(&mut map, digit, &[2, 5], &[3, 6]);

        let findings = find_x_wings(&map);
        let eliminated = apply(&findings, &mut sudoku_work, &mut map);
        // 7 cells per cover column outside the two base rows
        assert_eq!(eliminated, 14);

        for cell in Col::new(3).cells() {
            let on_base = cell.row().get() == 2 || cell.row().get() == 5;
            assert_eq!(map.candidates(cell).contains(digit), on_base);
        }
    }

    #[test]
    fn detects_swordfish_with_two_position_lines() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        let digit = Digit::new(7);
        // rows 0 and 4 hold two of the three cover columns, row 8 all three
        confine(&mut map, digit, &[0], &[1, 5]);
        confine(&mut map, digit, &[4], &[5, 7]);
        confine(&mut map, digit, &[8], &[1, 5, 7]);

        let found = find_swordfish(&map).iter().any(|finding| {
            matches!(
                *finding,
                Finding::Swordfish { digit: d, base, .. }
                    if d == digit
                        && base == [Row::new(0).line(), Row::new(4).line(), Row::new(8).line()]
            )
        });
        assert!(found);
    }

    #[test]
    fn detection_is_idempotent() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        let digit = Digit::new(4);
        confine(&mut map, digit, &[2, 5], &[3, 6]);

        assert_eq!(find_x_wings(&map), find_x_wings(&map));
        assert_eq!(find_swordfish(&map), find_swordfish(&map));
    }

    #[test]
    fn no_x_wing_without_matching_positions() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let mut map = CandidateMap::from_grid(&sudoku);
        let digit = Digit::new(4);
        confine(&mut map, digit, &[2], &[3, 6]);
        confine(&mut map, digit, &[5], &[3, 7]);

        let found = find_x_wings(&map)
            .iter()
            .any(|finding| matches!(*finding, Finding::XWing { digit: d, .. } if d == digit));
        assert!(!found);
    }
}
