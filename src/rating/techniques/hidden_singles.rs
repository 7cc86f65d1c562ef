//! Hidden singles: a digit with only one possible cell left in a house.

use crate::board::{Candidate, Digit, House, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

pub(crate) fn find(map: &CandidateMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    for house in House::all() {
        for digit in Digit::all() {
            let mut cells = house.cells().into_iter().filter(|&cell| {
                // solved cells carry no candidates, so a digit already
                // placed in the house can never produce a position here
                map.candidates(cell).contains(digit)
            });
            if let (Some(cell), None) = (cells.next(), cells.next()) {
                findings.push(Finding::HiddenSingle {
                    candidate: Candidate::new(cell, digit),
                    house,
                });
            }
        }
    }
    findings
}

pub(crate) fn apply(findings: &[Finding], sudoku: &mut Sudoku, _map: &mut CandidateMap) -> u32 {
    // the same placement may be found through its row, col and block;
    // assign each candidate once
    let mut placed = Vec::new();
    for finding in findings {
        if let Finding::HiddenSingle { candidate, .. } = finding {
            if !placed.contains(candidate) {
                sudoku.assign(candidate.cell, candidate.digit);
                placed.push(*candidate);
            }
        }
    }
    placed.len() as u32
}
