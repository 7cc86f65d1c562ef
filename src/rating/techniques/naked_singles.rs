//! Naked singles: a cell whose candidate set has shrunk to one digit.

use crate::board::{Candidate, Cell, Sudoku};
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;

pub(crate) fn find(map: &CandidateMap) -> Vec<Finding> {
    Cell::all()
        .filter_map(|cell| {
            let digit = map.candidates(cell).unique()?;
            Some(Finding::NakedSingle {
                candidate: Candidate::new(cell, digit),
            })
        })
        .collect()
}

pub(crate) fn apply(findings: &[Finding], sudoku: &mut Sudoku, _map: &mut CandidateMap) -> u32 {
    let mut placed = 0;
    for finding in findings {
        if let Finding::NakedSingle { candidate } = finding {
            sudoku.assign(candidate.cell, candidate.digit);
            placed += 1;
        }
    }
    placed
}
