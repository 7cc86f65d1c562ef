//! Bitmask-backed sets over board element types
//!
//! Technique detectors deal with sets of [`Digit`s](crate::board::Digit),
//! [`Cell`s](crate::board::Cell) and line positions a lot. Efficient storage matters,
//! but it should not be possible to confuse bitmasks for different things.
//! This module contains type-safe, space-efficient fixed-length bitsets for
//! the element types the grader works with.

use crate::board::positions::LinePos;
use crate::board::{Cell, Digit};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Fixed-size set of digits, cells or line positions, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T: SetElement>(pub(crate) T::Storage);

/// Iterator over a [`Set`], yielding elements lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iter<T: SetElement>(T::Storage);

impl<T: SetElement> IntoIterator for Set<T>
where
    Iter<T>: Iterator,
{
    type Item = <Iter<T> as Iterator>::Item;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////
//                             Set operators
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    Set(
                        $trait::$fn_name(self.0, other.0)
                    )
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: T) -> Self {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: T) {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl<T: SetElement> Not for Set<T>
where
    Self: PartialEq + Copy,
{
    type Output = Self;
    fn not(self) -> Self {
        Self::ALL.without(self)
    }
}

impl<T: SetElement> Set<T>
where
    Self: PartialEq + Copy,
{
    /// The set with every element present.
    pub const ALL: Set<T> = Set(<T as SetElement>::ALL);

    /// The set with no element present.
    pub const NONE: Set<T> = Set(<T as SetElement>::NONE);

    /// The elements of this set that are not in `other`.
    pub fn without(self, other: impl Into<Self>) -> Self {
        Set(self.0 & !other.into().0)
    }

    /// Removes every element of `other` from this set.
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.0 &= !other.into().0;
    }

    /// Whether the two sets share at least one element.
    pub fn overlaps(&self, other: Self) -> bool {
        *self & other != Set::NONE
    }

    /// Whether every element of `other` is in this set.
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        *self & other == other
    }

    /// Number of elements in the set.
    pub fn len(&self) -> u8 {
        T::count_possibilities(self.0) as u8
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sole element of the set, `None` unless the set has exactly one.
    pub fn unique(self) -> Option<T>
    where
        Iter<T>: Iterator<Item = T>,
    {
        match self.len() {
            1 => self.into_iter().next(),
            _ => None,
        }
    }
}

impl<T: SetElement> From<T> for Set<T> {
    fn from(element: T) -> Self {
        element.as_set()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// Element types a [`Set`] can hold. Sealed.
#[allow(missing_docs)]
pub trait SetElement: Sized + set_element::Sealed {
    const ALL: Self::Storage;
    const NONE: Self::Storage;

    type Storage: BitAnd<Output = Self::Storage>
        + BitAndAssign
        + BitOr<Output = Self::Storage>
        + BitOrAssign
        + BitXor<Output = Self::Storage>
        + BitXorAssign
        + Not<Output = Self::Storage>
        + PartialOrd
        + std::fmt::Binary
        + Copy;

    fn count_possibilities(set: Self::Storage) -> u32;
    fn as_set(self) -> Set<Self>;
}
mod set_element {
    use super::*;
    pub trait Sealed {}

    macro_rules! impl_sealed {
        ($($type:ty),*) => {
            $(
                impl Sealed for $type {}
            )*
        };
    }

    impl_sealed! {
        Cell, Digit, LinePos
    }
}

macro_rules! impl_setelement {
    ( $( $type:ty => $storage_ty:ty, $all:expr),* $(,)* ) => {
        $(
            impl SetElement for $type {
                const ALL: $storage_ty = $all;
                const NONE: $storage_ty = 0;

                type Storage = $storage_ty;

                fn count_possibilities(set: Self::Storage) -> u32 {
                    set.count_ones()
                }

                fn as_set(self) -> Set<Self> {
                    Set(1 << self.as_index() as u8)
                }
            }

            impl $type {
                /// The singleton set holding just this element.
                pub fn as_set(self) -> Set<Self> {
                    SetElement::as_set(self)
                }
            }
        )*
    };
}

impl_setelement!(
    // 81 board cells
    Cell => u128, 0o777_777_777___777_777_777___777_777_777,
    // digits 1 through 9
    Digit => u16, 0o777,
    // 9 positions within a row or column
    LinePos => u16, 0o777,
);

macro_rules! impl_iter_for_setiter {
    ( $( $type:ty => $constructor:expr ),* $(,)* ) => {
        $(
            impl Iterator for Iter<$type> {
                type Item = $type;

                fn next(&mut self) -> Option<Self::Item> {
                    debug_assert!(self.0 <= <Set<$type>>::ALL.0, "{:o}", self.0);
                    if self.0 == 0 {
                        return None;
                    }
                    let lowest_bit = self.0 & (!self.0 + 1);
                    let bit_pos = lowest_bit.trailing_zeros() as u8;
                    self.0 ^= lowest_bit;
                    Some($constructor(bit_pos))
                }
            }
        )*
    };
}

// the constructors differ, so no blanket impl
impl_iter_for_setiter!(
    Cell => Cell::new,
    Digit => Digit::from_index,
    LinePos => LinePos::new,
);

use std::fmt;
impl<T: SetElement> fmt::Binary for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_set_roundtrip() {
        for digit in <Set<Digit>>::ALL {
            assert_eq!(digit.as_set().into_iter().count(), 1);
            assert_eq!(digit.as_set().unique(), Some(digit));
        }
    }

    #[test]
    fn unique_is_none_for_non_singletons() {
        assert_eq!(<Set<Digit>>::NONE.unique(), None);
        assert_eq!((Digit::new(3).as_set() | Digit::new(7)).unique(), None);
    }

    #[test]
    fn without_and_remove_agree() {
        let mut set = <Set<Digit>>::ALL;
        let removed = Digit::new(5).as_set() | Digit::new(9);
        let without = set.without(removed);
        set.remove(removed);
        assert_eq!(set, without);
        assert_eq!(set.len(), 7);
    }
}
