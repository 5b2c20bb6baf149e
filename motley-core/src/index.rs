//! Type-level indices into an alternative list.
//!
//! An index is a Peano numeral: [`Zero`] or [`Succ<N>`]. Indices exist only
//! at the type level (neither type can be constructed) and collapse to a
//! `u8` tag through [`Index::TAG`]. The aliases `U0`..`U7` cover the common
//! arities; longer lists spell `Succ<U7>` and onward.

use core::marker::PhantomData;

/// Index zero: the first alternative of a list.
pub struct Zero {
    _never: core::convert::Infallible,
}

/// The index after `N`.
pub struct Succ<N> {
    _never: core::convert::Infallible,
    _marker: PhantomData<N>,
}

/// A type-level index, convertible to its `u8` tag.
///
/// The tag space is bounded by [`VACANT`](crate::VACANT): an alternative
/// list may hold at most 255 entries, the last tag value being reserved
/// for the vacant sentinel.
pub trait Index {
    /// The runtime tag this index denotes.
    const TAG: u8;
}

impl Index for Zero {
    const TAG: u8 = 0;
}

impl<N: Index> Index for Succ<N> {
    const TAG: u8 = N::TAG + 1;
}

/// Index 0.
pub type U0 = Zero;
/// Index 1.
pub type U1 = Succ<U0>;
/// Index 2.
pub type U2 = Succ<U1>;
/// Index 3.
pub type U3 = Succ<U2>;
/// Index 4.
pub type U4 = Succ<U3>;
/// Index 5.
pub type U5 = Succ<U4>;
/// Index 6.
pub type U6 = Succ<U5>;
/// Index 7.
pub type U7 = Succ<U6>;
