//! XY-Wing: a bent triple of bivalue cells.
//!
//! A pivot with candidates `{x, y}` sees a wing `{x, z}` and a wing
//! `{y, z}`. Whichever digit the pivot takes forces `z` into one of the
//! wings, so `z` cannot appear in any cell seeing both wings.

use crate::board::{Cell, Digit, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

pub(crate) fn find(map: &CandidateMap) -> Vec<Finding> {
    let bivalue: Vec<Cell> = Cell::all()
        .filter(|&cell| map.candidates(cell).len() == 2)
        .collect();

    let mut findings = Vec::new();
    for &pivot in &bivalue {
        let mut pivot_digits = map.candidates(pivot).into_iter();
        let x = pivot_digits.next().unwrap();
        let y = pivot_digits.next().unwrap();

        for &wing1 in &bivalue {
            if wing1 == pivot || !pivot.sees(wing1) {
                continue;
            }
            let wing1_digits = map.candidates(wing1);
            if !wing1_digits.contains(x) {
                continue;
            }
            let z = match wing1_digits.without(x).unique() {
                Some(z) => z,
                None => continue, // {x, x} cannot happen, but stay total
            };

            for &wing2 in &bivalue {
                if wing2 == pivot || wing2 == wing1 || !pivot.sees(wing2) {
                    continue;
                }
                if map.candidates(wing2) == y.as_set() | z {
                    findings.push(Finding::XyWing {
                        pivot,
                        wings: [wing1, wing2],
                        digit: z,
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
        if let Finding::XyWing {
            pivot,
            wings,
            digit,
        } = finding
        {
            for cell in Cell::all() {
                if cell == *pivot || cell == wings[0] || cell == wings[1] {
                    continue;
                }
                if cell.sees(wings[0]) && cell.sees(wings[1]) && map.eliminate(cell, *digit) {
                    eliminated += 1;
                }
            }
        }
    }
    eliminated
}
