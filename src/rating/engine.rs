use crate::board::Sudoku;
use crate::rating::candidates::CandidateMap;
use crate::rating::finding::Finding;
use crate::rating::techniques::{
    fish, hidden_singles, naked_pairs, naked_singles, pointing_pairs, xy_wing,
};

use std::fmt;

/// Iterations after which rating gives up on an unsolved grid.
const MAX_ITERATIONS: u32 = 1000;

/// The solving techniques the engine knows, ordered by difficulty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Technique {
    NakedSingle,
    HiddenSingle,
    NakedPair,
    /// Reserved in the score table, no detector yet.
    HiddenPair,
    PointingPair,
    XWing,
    Swordfish,
    XyWing,
    /// Marker for grids the implemented techniques cannot crack.
    RequiresExpert,
}

impl Technique {
    /// Score per the common technique hierarchy. Up to 15 rates Easy,
    /// up to 90 Medium, everything above Hard.
    pub fn score(self) -> u32 {
        match self {
            Technique::NakedSingle => 15,
            Technique::HiddenSingle => 15,
            Technique::NakedPair => 65,
            Technique::HiddenPair => 70,
            Technique::PointingPair => 80,
            Technique::XWing => 120,
            Technique::Swordfish => 160,
            Technique::XyWing => 180,
            Technique::RequiresExpert => 200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Technique::NakedSingle => "naked_single",
            Technique::HiddenSingle => "hidden_single",
            Technique::NakedPair => "naked_pair",
            Technique::HiddenPair => "hidden_pair",
            Technique::PointingPair => "pointing_pair",
            Technique::XWing => "x_wing",
            Technique::Swordfish => "swordfish",
            Technique::XyWing => "xy_wing",
            Technique::RequiresExpert => "requires_expert_technique",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty label derived from the hardest technique a grid required.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_score(score: u32) -> Difficulty {
        match score {
            0..=15 => Difficulty::Easy,
            16..=90 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rating run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The grid was solved by the implemented techniques.
    Solved,
    /// No technique made progress; the grid needs something harder.
    Stuck,
    /// The iteration cap was hit without solving the grid.
    Capped,
}

/// The result of rating a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    pub difficulty: Difficulty,
    /// Score of the hardest technique used.
    pub max_score: u32,
    /// One entry per engine iteration, in the order the techniques fired.
    pub techniques: Vec<Technique>,
    pub termination: Termination,
}

type Detect = fn(&CandidateMap) -> Vec<Finding>;
type Apply = fn(&[Finding], &mut Sudoku, &mut CandidateMap) -> u32;

struct Entry {
    technique: Technique,
    detect: Detect,
    apply: Apply,
}

// easiest first; within an iteration the first technique with any
// effect wins and ends the pass
static DISPATCH: [Entry; 7] = [
    Entry {
        technique: Technique::NakedSingle,
        detect: naked_singles::find,
        apply: naked_singles::apply,
    },
    Entry {
        technique: Technique::HiddenSingle,
        detect: hidden_singles::find,
        apply: hidden_singles::apply,
    },
    Entry {
        technique: Technique::NakedPair,
        detect: naked_pairs::find,
        apply: naked_pairs::apply,
    },
    Entry {
        technique: Technique::PointingPair,
        detect: pointing_pairs::find,
        apply: pointing_pairs::apply,
    },
    Entry {
        technique: Technique::XWing,
        detect: fish::find_x_wings,
        apply: fish::apply,
    },
    Entry {
        technique: Technique::Swordfish,
        detect: fish::find_swordfish,
        apply: fish::apply,
    },
    Entry {
        technique: Technique::XyWing,
        detect: xy_wing::find,
        apply: xy_wing::apply,
    },
];

/// Rates how hard `sudoku` is for a human solver.
///
/// The engine repeatedly takes a candidate snapshot of the grid and fires
/// the easiest technique that makes progress. Placements from singles carry
/// over to the next iteration; eliminations only live within the snapshot
/// they were made in, so a grid whose progress consists purely of
/// eliminations keeps re-deriving them until the iteration cap.
pub fn rate(sudoku: &Sudoku) -> Rating {
    let mut grid = *sudoku;
    let mut techniques = Vec::new();
    let mut max_score = 0;
    let mut termination = Termination::Capped;

    let mut iteration = 0;
    while !grid.is_solved() && iteration < MAX_ITERATIONS {
        iteration += 1;
        let mut map = CandidateMap::from_grid(&grid);
        let mut applied = false;

        for entry in &DISPATCH {
            let findings = (entry.detect)(&map);
            if findings.is_empty() {
                continue;
            }
            if (entry.apply)(&findings, &mut grid, &mut map) > 0 {
                techniques.push(entry.technique);
                max_score = max_score.max(entry.technique.score());
                applied = true;
                break;
            }
        }

        if !applied {
            techniques.push(Technique::RequiresExpert);
            max_score = max_score.max(Technique::RequiresExpert.score());
            termination = Termination::Stuck;
            break;
        }
    }

    if grid.is_solved() {
        termination = Termination::Solved;
    }

    Rating {
        difficulty: Difficulty::from_score(max_score),
        max_score,
        techniques,
        termination,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // row r of the pattern grid holds 1..=9 shifted by 3r + r/3
    fn pattern_grid() -> Sudoku {
        let mut bytes = [0; 81];
        for (cell, byte) in bytes.iter_mut().enumerate() {
            let (row, col) = (cell / 9, cell % 9);
            *byte = ((row * 3 + row / 3 + col) % 9) as u8 + 1;
        }
        Sudoku::from_bytes(bytes).unwrap()
    }

    #[test]
    fn solved_grid_rates_easy_without_techniques() {
        let rating = rate(&pattern_grid());
        assert_eq!(rating.difficulty, Difficulty::Easy);
        assert_eq!(rating.max_score, 0);
        assert!(rating.techniques.is_empty());
        assert_eq!(rating.termination, Termination::Solved);
    }

    #[test]
    fn lone_empty_cells_need_one_round_of_naked_singles() {
        let mut bytes = pattern_grid().to_bytes();
        // scattered over distinct rows, cols and blocks
        for cell in [0, 40, 80] {
            bytes[cell] = 0;
        }
        let rating = rate(&Sudoku::from_bytes(bytes).unwrap());
        assert_eq!(rating.techniques, vec![Technique::NakedSingle]);
        assert_eq!(rating.max_score, 15);
        assert_eq!(rating.difficulty, Difficulty::Easy);
        assert_eq!(rating.termination, Termination::Solved);
    }

    #[test]
    fn empty_grid_is_beyond_the_implemented_techniques() {
        let rating = rate(&Sudoku::from_bytes([0; 81]).unwrap());
        assert_eq!(rating.techniques, vec![Technique::RequiresExpert]);
        assert_eq!(rating.max_score, 200);
        assert_eq!(rating.difficulty, Difficulty::Hard);
        assert_eq!(rating.termination, Termination::Stuck);
    }

    #[test]
    fn difficulty_boundaries() {
        assert_eq!(Difficulty::from_score(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(15), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(16), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(90), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(91), Difficulty::Hard);
        assert_eq!(Difficulty::from_score(200), Difficulty::Hard);
    }

    #[test]
    fn scores_follow_the_technique_hierarchy() {
        let ordered = [
            Technique::NakedSingle,
            Technique::HiddenSingle,
            Technique::NakedPair,
            Technique::HiddenPair,
            Technique::PointingPair,
            Technique::XWing,
            Technique::Swordfish,
            Technique::XyWing,
            Technique::RequiresExpert,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].score() <= pair[1].score());
        }
        assert_eq!(Technique::NakedSingle.score(), 15);
        assert_eq!(Technique::PointingPair.score(), 80);
        assert_eq!(Technique::XWing.score(), 120);
    }

    #[test]
    fn rating_is_deterministic() {
        let mut bytes = pattern_grid().to_bytes();
        for cell in (0..81).step_by(3) {
            bytes[cell] = 0;
        }
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert_eq!(rate(&sudoku), rate(&sudoku));
    }
}
