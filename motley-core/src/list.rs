//! Alternative lists and their payload representation.
//!
//! A list of alternatives is a nested tuple, `(A, (B, (C, ())))`, and its
//! payload representation is the matching nest of untagged unions:
//! `Cons<A, Cons<B, Cons<C, Nil>>>`. At most one leg of the nest is live at
//! a time; which one is recorded externally by [`RawSlot`](crate::RawSlot).
//!
//! All per-alternative addressing goes through raw-pointer field
//! projections so that no reference to a dead union leg is ever formed.

use core::convert::Infallible;
use core::mem::ManuallyDrop;
use core::ptr::{addr_of, addr_of_mut};

use crate::{Index, Succ, Zero};

/// The terminator of a payload union nest. Uninhabited: a list of zero
/// alternatives has no payload to represent.
pub struct Nil {
    _never: Infallible,
}

/// One leg of a payload union nest: either this alternative's value or the
/// rest of the nest.
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// A fixed list of alternative types, spelled as a nested tuple.
///
/// # Safety
///
/// Implemented only for `()` and `(Head, Tail)` where `Tail: AltList`;
/// `Repr` must be the union nest matching the list, and `drop_at` must
/// destroy exactly the alternative named by `tag`.
pub unsafe trait AltList {
    /// The payload representation: a nest of [`Cons`] unions ending in
    /// [`Nil`].
    type Repr;

    /// Number of alternatives in the list.
    const LEN: u8;

    /// Whether any alternative has drop glue. When `false`, teardown is a
    /// tag reset and no per-alternative work happens at all.
    const NEEDS_DROP: bool;

    /// Destroys the alternative at `tag` in place.
    ///
    /// # Safety
    ///
    /// `repr` must point to a payload whose live alternative is `tag`,
    /// and `tag < Self::LEN`. The payload must not be read again until
    /// reinitialized.
    unsafe fn drop_at(repr: *mut Self::Repr, tag: u8);

    /// The type name of the alternative at `tag`, for diagnostics.
    fn alt_name(tag: u8) -> &'static str;
}

unsafe impl AltList for () {
    type Repr = Nil;
    const LEN: u8 = 0;
    const NEEDS_DROP: bool = false;

    unsafe fn drop_at(_repr: *mut Nil, tag: u8) {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }

    fn alt_name(_tag: u8) -> &'static str {
        "<out of range>"
    }
}

unsafe impl<Head, Tail: AltList> AltList for (Head, Tail) {
    type Repr = Cons<Head, Tail::Repr>;
    const LEN: u8 = 1 + Tail::LEN;
    const NEEDS_DROP: bool = core::mem::needs_drop::<Head>() || Tail::NEEDS_DROP;

    unsafe fn drop_at(repr: *mut Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { core::ptr::drop_in_place(addr_of_mut!((*repr).data).cast::<Head>()) }
        } else {
            unsafe { Tail::drop_at(addr_of_mut!((*repr).next).cast::<Tail::Repr>(), tag - 1) }
        }
    }

    fn alt_name(tag: u8) -> &'static str {
        if tag == 0 {
            core::any::type_name::<Head>()
        } else {
            Tail::alt_name(tag - 1)
        }
    }
}

/// Positions alternative `T` at index `N` within the list.
///
/// Resolution doubles as the compile-time alternative lookup: a type that
/// appears exactly once in the list pins `N` by inference, a type that is
/// absent fails to resolve, and a duplicated type is an ambiguity error
/// unless the index is spelled explicitly.
///
/// # Safety
///
/// `from_value` must initialize exactly the leg at index `N`, and the
/// pointer projections must address that same leg.
pub unsafe trait Split<T, N: Index>: AltList {
    /// Builds a payload whose live alternative is `T` at index `N`.
    fn from_value(value: T) -> Self::Repr;

    /// Moves the value out of the payload.
    ///
    /// # Safety
    ///
    /// The live alternative of `repr` must be index `N`.
    unsafe fn into_value_unchecked(repr: Self::Repr) -> T;

    /// Projects a pointer to the alternative at index `N`.
    ///
    /// # Safety
    ///
    /// `repr` must point to a valid payload allocation. Reading through
    /// the result additionally requires that index `N` is live.
    unsafe fn alt_ptr(repr: *const Self::Repr) -> *const T;

    /// Mutable counterpart of [`alt_ptr`](Split::alt_ptr).
    ///
    /// # Safety
    ///
    /// Same as [`alt_ptr`](Split::alt_ptr).
    unsafe fn alt_ptr_mut(repr: *mut Self::Repr) -> *mut T;
}

unsafe impl<Head, Tail: AltList> Split<Head, Zero> for (Head, Tail) {
    fn from_value(value: Head) -> Self::Repr {
        Cons {
            data: ManuallyDrop::new(value),
        }
    }

    unsafe fn into_value_unchecked(repr: Self::Repr) -> Head {
        unsafe { ManuallyDrop::into_inner(repr.data) }
    }

    unsafe fn alt_ptr(repr: *const Self::Repr) -> *const Head {
        unsafe { addr_of!((*repr).data).cast::<Head>() }
    }

    unsafe fn alt_ptr_mut(repr: *mut Self::Repr) -> *mut Head {
        unsafe { addr_of_mut!((*repr).data).cast::<Head>() }
    }
}

unsafe impl<Head, Tail, T, N> Split<T, Succ<N>> for (Head, Tail)
where
    Tail: Split<T, N>,
    N: Index,
    Succ<N>: Index,
{
    fn from_value(value: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_value(value)),
        }
    }

    unsafe fn into_value_unchecked(repr: Self::Repr) -> T {
        unsafe { Tail::into_value_unchecked(ManuallyDrop::into_inner(repr.next)) }
    }

    unsafe fn alt_ptr(repr: *const Self::Repr) -> *const T {
        unsafe { Tail::alt_ptr(addr_of!((*repr).next).cast::<Tail::Repr>()) }
    }

    unsafe fn alt_ptr_mut(repr: *mut Self::Repr) -> *mut T {
        unsafe { Tail::alt_ptr_mut(addr_of_mut!((*repr).next).cast::<Tail::Repr>()) }
    }
}
