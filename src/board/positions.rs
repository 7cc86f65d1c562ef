//! Index types for cells and the units (houses) they belong to.
//!
//! Houses are numbered rows first (0..9), then columns (9..18), then blocks
//! (18..27); a block's index within its group is `row_band * 3 + col_stack`.
//! The [`Line`] type covers the first 18 houses, which is what the fish
//! patterns operate on.

use crate::bitset::Set;

pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new instance.
                ///
                /// # Panics
                /// Panics in debug mode, if the index is out of range.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Checked constructor, `None` if the index is out of range.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the raw index.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the raw index as `usize`, for array indexing.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Iterator over all instances, in index order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
    Line: 18,
    House: 27,
    LinePos: 9,
);

/// A [`Line`], split into which kind of line it is.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum LineKind {
    Row(Row),
    Col(Col),
}

impl Line {
    pub fn categorize(self) -> LineKind {
        debug_assert!(self.0 < BLOCK_OFFSET);
        match self.0 < COL_OFFSET {
            true => LineKind::Row(Row::new(self.0)),
            false => LineKind::Col(Col::new(self.0 - COL_OFFSET)),
        }
    }

    /// The line running perpendicular through position `pos` of this line.
    pub fn crossing_line_at(self, pos: LinePos) -> Line {
        match self.categorize() {
            LineKind::Row(_) => Col::new(pos.get()).line(),
            LineKind::Col(_) => Row::new(pos.get()).line(),
        }
    }

    pub fn cell_at(self, pos: LinePos) -> Cell {
        match self.categorize() {
            LineKind::Row(row) => Cell::new(row.0 * 9 + pos.0),
            LineKind::Col(col) => Cell::new(pos.0 * 9 + col.0),
        }
    }
}

/// A [`House`], split into which kind of unit it is.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HouseKind {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    pub fn categorize(self) -> HouseKind {
        debug_assert!(self.0 < 27);
        match self.0 {
            0..=8 => HouseKind::Row(Row::new(self.0)),
            9..=17 => HouseKind::Col(Col::new(self.0 - COL_OFFSET)),
            _ => HouseKind::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

macro_rules! into_cells {
    ( $( $name:ident => |$arg:ident| $code:block );* $(;)* ) => {
        $(
            impl $name {
                /// The set of cells belonging to this unit.
                pub fn cells(self) -> Set<Cell> {
                    let $arg = self;
                    Set($code)
                }
            }
        )*
    };
}

// the closure syntax only binds a hygienic name for each code block,
// nothing is captured
into_cells!(
    Row  => |row| { 0o777 << (9 * row.0) };
    Col  => |col| { 0o_001_001_001___001_001_001___001_001_001 << col.0 };
    Block => |block| {
        let band = block.0 / 3;
        let stack = block.0 % 3;
        0o007_007_007 << (band * 27 + stack * 3)
    };
    Line => |line| {
        match line.categorize() {
            LineKind::Row(row) => row.cells().0,
            LineKind::Col(col) => col.cells().0,
        }
    };
    House => |house| {
        match house.categorize() {
            HouseKind::Row(row) => row.cells().0,
            HouseKind::Col(col) => col.cells().0,
            HouseKind::Block(block) => block.cells().0,
        }
    };
);

impl Cell {
    /// Constructs the cell at `(row, col)`.
    pub fn from_coords(row: u8, col: u8) -> Cell {
        debug_assert!(row < 9 && col < 9);
        Cell::new(row * 9 + col)
    }

    #[inline(always)]
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    #[inline(always)]
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    #[inline(always)]
    pub fn block(self) -> Block {
        Block::new(self.0 / 27 * 3 + self.0 % 9 / 3)
    }

    /// Whether `self` and `other` share a row, column or block.
    ///
    /// This is the adjacency relation the XY-Wing pattern is built on.
    pub fn sees(self, other: Cell) -> bool {
        self.row() == other.row() || self.col() == other.col() || self.block() == other.block()
    }
}

macro_rules! impl_into_house {
    ( $( $from:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for House {
                fn from($arg: $from) -> House {
                    let $arg = $arg.0;
                    House::new($code)
                }
            }

            impl $from {
                /// The [`House`] index of this unit.
                #[inline(always)]
                pub fn house(self) -> House {
                    self.into()
                }
            }
        )*
    };
}

impl_into_house!(
    Row, |r| { r },
    Col, |c| { c + COL_OFFSET },
    Block, |b| { b + BLOCK_OFFSET },
    Line, |l| { l },
);

impl Row {
    pub fn line(self) -> Line {
        Line::new(self.0)
    }
}

impl Col {
    pub fn line(self) -> Line {
        Line::new(self.0 + COL_OFFSET)
    }
}
