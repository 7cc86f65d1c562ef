use crate::bitset::Set;
use crate::board::{Block, Candidate, Cell, Digit, House, Line};

/// A single detected technique instance.
///
/// A finding records enough of the pattern to apply its deduction later:
/// placements for the singles, eliminations for everything else. Detection
/// never mutates; the grader applies all findings of one technique in a
/// batch after detection finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// The candidate's cell has exactly one digit left.
    NakedSingle { candidate: Candidate },
    /// The candidate's digit fits only one cell of `house`.
    HiddenSingle { candidate: Candidate, house: House },
    /// Two cells of a house sharing the same two candidates.
    NakedPair {
        house: House,
        cells: [Cell; 2],
        digits: Set<Digit>,
    },
    /// All of `digit`'s candidates in `block` lie on `line`.
    PointingPair {
        block: Block,
        line: Line,
        digit: Digit,
        cells: Set<Cell>,
    },
    /// `digit` restricted to the same two crossing lines in two base lines.
    XWing {
        digit: Digit,
        base: [Line; 2],
        cover: [Line; 2],
    },
    /// `digit` restricted to three crossing lines across three base lines.
    Swordfish {
        digit: Digit,
        base: [Line; 3],
        cover: [Line; 3],
    },
    /// Bent triple: a bivalue pivot with two bivalue wings eliminating
    /// their shared digit.
    XyWing {
        pivot: Cell,
        wings: [Cell; 2],
        digit: Digit,
    },
}
