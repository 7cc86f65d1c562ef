use std::num::NonZeroU8;

/// A digit `1..=9`, the only values a sudoku cell can take.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a digit.
    ///
    /// # Panics
    /// Panics if `digit` is outside `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Checked constructor, `None` if `digit` is outside `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a digit from its zero-based index.
    ///
    /// # Panics
    /// Panics if `idx` is outside `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new_checked(idx + 1).unwrap()
    }

    /// Iterator over the digits 1 through 9.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// The digit as a number.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// The digit as a zero-based `usize` index.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
