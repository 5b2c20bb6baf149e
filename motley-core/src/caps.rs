//! The capability matrix.
//!
//! Whether a container over the list `S` supports cloning, comparison,
//! hashing, debug formatting or in-place exchange is decided entirely at
//! compile time: each capability is a recursion over the list whose
//! `(Head, Tail)` impl bounds `Head` by the corresponding trait. A list
//! with one non-conforming alternative simply never implements the
//! capability, and everything built on it degrades with no runtime
//! component.
//!
//! Every operation here takes the tag of the live alternative and walks
//! the union nest to it; the binary operations (`eq_at`, `cmp_at`, …)
//! require both payloads to be live at the *same* tag, which the callers
//! establish by comparing tags first.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::mem::ManuallyDrop;
use core::ptr::{addr_of, addr_of_mut};

use crate::{AltList, Cons, Swap};

/// Clones the live alternative: the list supports it iff every
/// alternative is [`Clone`].
///
/// # Safety
///
/// Implementations must clone exactly the alternative named by `tag`.
pub unsafe trait ListClone: AltList {
    /// Builds a new payload by cloning the alternative live at `tag`.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be `tag`, with `tag < Self::LEN`.
    unsafe fn clone_at(repr: *const Self::Repr, tag: u8) -> Self::Repr;

    /// Clones in place: `dst`'s live alternative at `tag` is assigned
    /// from `src`'s via the alternative's own `clone_from`.
    ///
    /// # Safety
    ///
    /// Both payloads must be live at `tag`, with `tag < Self::LEN`.
    unsafe fn clone_from_at(dst: *mut Self::Repr, src: *const Self::Repr, tag: u8);
}

unsafe impl ListClone for () {
    unsafe fn clone_at(_repr: *const Self::Repr, tag: u8) -> Self::Repr {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }

    unsafe fn clone_from_at(_dst: *mut Self::Repr, _src: *const Self::Repr, tag: u8) {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: Clone, Tail: ListClone> ListClone for (Head, Tail) {
    unsafe fn clone_at(repr: *const Self::Repr, tag: u8) -> Self::Repr {
        if tag == 0 {
            let head = unsafe { &*addr_of!((*repr).data).cast::<Head>() };
            Cons {
                data: ManuallyDrop::new(head.clone()),
            }
        } else {
            let next = unsafe { Tail::clone_at(addr_of!((*repr).next).cast(), tag - 1) };
            Cons {
                next: ManuallyDrop::new(next),
            }
        }
    }

    unsafe fn clone_from_at(dst: *mut Self::Repr, src: *const Self::Repr, tag: u8) {
        if tag == 0 {
            let dst = unsafe { &mut *addr_of_mut!((*dst).data).cast::<Head>() };
            let src = unsafe { &*addr_of!((*src).data).cast::<Head>() };
            dst.clone_from(src);
        } else {
            unsafe {
                Tail::clone_from_at(
                    addr_of_mut!((*dst).next).cast(),
                    addr_of!((*src).next).cast(),
                    tag - 1,
                )
            }
        }
    }
}

/// Compares two payloads live at the same tag: supported iff every
/// alternative is [`PartialEq`].
///
/// # Safety
///
/// Implementations must compare exactly the alternative named by `tag`.
pub unsafe trait ListPartialEq: AltList {
    /// Equality of the alternatives live at `tag` in both payloads.
    ///
    /// # Safety
    ///
    /// Both payloads must be live at `tag`, with `tag < Self::LEN`.
    unsafe fn eq_at(a: *const Self::Repr, b: *const Self::Repr, tag: u8) -> bool;
}

unsafe impl ListPartialEq for () {
    unsafe fn eq_at(_a: *const Self::Repr, _b: *const Self::Repr, tag: u8) -> bool {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: PartialEq, Tail: ListPartialEq> ListPartialEq for (Head, Tail) {
    unsafe fn eq_at(a: *const Self::Repr, b: *const Self::Repr, tag: u8) -> bool {
        if tag == 0 {
            let a = unsafe { &*addr_of!((*a).data).cast::<Head>() };
            let b = unsafe { &*addr_of!((*b).data).cast::<Head>() };
            a == b
        } else {
            unsafe { Tail::eq_at(addr_of!((*a).next).cast(), addr_of!((*b).next).cast(), tag - 1) }
        }
    }
}

/// Marker: every alternative is [`Eq`], so equality is total.
///
/// # Safety
///
/// Only implemented when each alternative's `PartialEq` is reflexive.
pub unsafe trait ListEq: ListPartialEq {}

unsafe impl ListEq for () {}
unsafe impl<Head: Eq, Tail: ListEq> ListEq for (Head, Tail) {}

/// Partial ordering of two payloads live at the same tag: supported iff
/// every alternative is [`PartialOrd`].
///
/// # Safety
///
/// Implementations must compare exactly the alternative named by `tag`.
pub unsafe trait ListPartialOrd: ListPartialEq {
    /// Partial ordering of the alternatives live at `tag`.
    ///
    /// # Safety
    ///
    /// Both payloads must be live at `tag`, with `tag < Self::LEN`.
    unsafe fn partial_cmp_at(
        a: *const Self::Repr,
        b: *const Self::Repr,
        tag: u8,
    ) -> Option<Ordering>;
}

unsafe impl ListPartialOrd for () {
    unsafe fn partial_cmp_at(
        _a: *const Self::Repr,
        _b: *const Self::Repr,
        tag: u8,
    ) -> Option<Ordering> {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: PartialOrd, Tail: ListPartialOrd> ListPartialOrd for (Head, Tail) {
    unsafe fn partial_cmp_at(
        a: *const Self::Repr,
        b: *const Self::Repr,
        tag: u8,
    ) -> Option<Ordering> {
        if tag == 0 {
            let a = unsafe { &*addr_of!((*a).data).cast::<Head>() };
            let b = unsafe { &*addr_of!((*b).data).cast::<Head>() };
            a.partial_cmp(b)
        } else {
            unsafe {
                Tail::partial_cmp_at(addr_of!((*a).next).cast(), addr_of!((*b).next).cast(), tag - 1)
            }
        }
    }
}

/// Total ordering of two payloads live at the same tag: supported iff
/// every alternative is [`Ord`].
///
/// # Safety
///
/// Implementations must compare exactly the alternative named by `tag`.
pub unsafe trait ListOrd: ListPartialOrd + ListEq {
    /// Total ordering of the alternatives live at `tag`.
    ///
    /// # Safety
    ///
    /// Both payloads must be live at `tag`, with `tag < Self::LEN`.
    unsafe fn cmp_at(a: *const Self::Repr, b: *const Self::Repr, tag: u8) -> Ordering;
}

unsafe impl ListOrd for () {
    unsafe fn cmp_at(_a: *const Self::Repr, _b: *const Self::Repr, tag: u8) -> Ordering {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: Ord, Tail: ListOrd> ListOrd for (Head, Tail) {
    unsafe fn cmp_at(a: *const Self::Repr, b: *const Self::Repr, tag: u8) -> Ordering {
        if tag == 0 {
            let a = unsafe { &*addr_of!((*a).data).cast::<Head>() };
            let b = unsafe { &*addr_of!((*b).data).cast::<Head>() };
            a.cmp(b)
        } else {
            unsafe { Tail::cmp_at(addr_of!((*a).next).cast(), addr_of!((*b).next).cast(), tag - 1) }
        }
    }
}

/// Hashes the live alternative: supported iff every alternative is
/// [`Hash`].
///
/// The hasher is erased to `&mut dyn Hasher` so the recursion stays
/// object-shaped instead of growing a generic parameter per level.
///
/// # Safety
///
/// Implementations must hash exactly the alternative named by `tag`.
pub unsafe trait ListHash: AltList {
    /// Feeds the alternative live at `tag` into `state`.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be `tag`, with `tag < Self::LEN`.
    unsafe fn hash_at(repr: *const Self::Repr, tag: u8, state: &mut dyn Hasher);
}

unsafe impl ListHash for () {
    unsafe fn hash_at(_repr: *const Self::Repr, tag: u8, _state: &mut dyn Hasher) {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: Hash, Tail: ListHash> ListHash for (Head, Tail) {
    unsafe fn hash_at(repr: *const Self::Repr, tag: u8, mut state: &mut dyn Hasher) {
        if tag == 0 {
            let head = unsafe { &*addr_of!((*repr).data).cast::<Head>() };
            head.hash(&mut state);
        } else {
            unsafe { Tail::hash_at(addr_of!((*repr).next).cast(), tag - 1, state) }
        }
    }
}

/// Debug-formats the live alternative: supported iff every alternative is
/// [`Debug`](core::fmt::Debug).
///
/// # Safety
///
/// Implementations must format exactly the alternative named by `tag`.
pub unsafe trait ListDebug: AltList {
    /// Formats the alternative live at `tag`.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be `tag`, with `tag < Self::LEN`.
    unsafe fn fmt_at(
        repr: *const Self::Repr,
        tag: u8,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result;
}

unsafe impl ListDebug for () {
    unsafe fn fmt_at(
        _repr: *const Self::Repr,
        tag: u8,
        _f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: core::fmt::Debug, Tail: ListDebug> ListDebug for (Head, Tail) {
    unsafe fn fmt_at(
        repr: *const Self::Repr,
        tag: u8,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        if tag == 0 {
            let head = unsafe { &*addr_of!((*repr).data).cast::<Head>() };
            core::fmt::Debug::fmt(head, f)
        } else {
            unsafe { Tail::fmt_at(addr_of!((*repr).next).cast(), tag - 1, f) }
        }
    }
}

/// Exchanges two payloads live at the same tag through the alternative's
/// [`Swap`] impl: supported iff every alternative is [`Swap`].
///
/// # Safety
///
/// Implementations must exchange exactly the alternative named by `tag`.
pub unsafe trait ListSwap: AltList {
    /// Swaps the alternatives live at `tag` in both payloads, calling the
    /// alternative's own [`Swap::swap_with`] exactly once.
    ///
    /// # Safety
    ///
    /// Both payloads must be live at `tag`, with `tag < Self::LEN`, and
    /// must not alias.
    unsafe fn swap_at(a: *mut Self::Repr, b: *mut Self::Repr, tag: u8);
}

unsafe impl ListSwap for () {
    unsafe fn swap_at(_a: *mut Self::Repr, _b: *mut Self::Repr, tag: u8) {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head: Swap, Tail: ListSwap> ListSwap for (Head, Tail) {
    unsafe fn swap_at(a: *mut Self::Repr, b: *mut Self::Repr, tag: u8) {
        if tag == 0 {
            let a = unsafe { &mut *addr_of_mut!((*a).data).cast::<Head>() };
            let b = unsafe { &mut *addr_of_mut!((*b).data).cast::<Head>() };
            a.swap_with(b);
        } else {
            unsafe {
                Tail::swap_at(addr_of_mut!((*a).next).cast(), addr_of_mut!((*b).next).cast(), tag - 1)
            }
        }
    }
}
