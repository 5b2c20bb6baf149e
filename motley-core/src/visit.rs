//! Visitation dispatch.
//!
//! A visitor is an object with one `Output` type and one entry point per
//! alternative it can meet ([`VisitRef`]/[`VisitMut`]). Keeping `Output`
//! on the visitor itself, rather than on each entry point, is what
//! enforces the single common result type across every alternative
//! combination: there is structurally nowhere to declare a second one.
//!
//! [`ListVisitRef`]/[`ListVisitMut`] are the dispatch recursions: given a
//! tag, they walk the union nest to the live alternative and hand it to
//! the visitor. Multi-container visitation composes these per-container
//! walks with binder adapters (see the `motley` crate), one nesting level
//! per participant.

use crate::AltList;

/// A visitation callable: carries the single result type shared by every
/// alternative entry point.
pub trait Visitor {
    /// The common result type of all entry points.
    type Output;
}

/// Entry point for visiting an alternative by shared reference.
pub trait VisitRef<T>: Visitor {
    /// Visits the live alternative.
    fn visit_ref(&mut self, alt: &T) -> Self::Output;
}

/// Entry point for visiting an alternative by mutable reference.
pub trait VisitMut<T>: Visitor {
    /// Visits the live alternative.
    fn visit_mut(&mut self, alt: &mut T) -> Self::Output;
}

/// Dispatches a [`VisitRef`] visitor over the alternative live at a tag:
/// supported iff the visitor has an entry point for every alternative.
///
/// # Safety
///
/// Implementations must hand the visitor exactly the alternative named by
/// `tag`.
pub unsafe trait ListVisitRef<V: Visitor>: AltList {
    /// Invokes `visitor` on the alternative live at `tag`.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be `tag`, with `tag < Self::LEN`.
    unsafe fn visit_ref_at(repr: *const Self::Repr, tag: u8, visitor: &mut V) -> V::Output;
}

unsafe impl<V: Visitor> ListVisitRef<V> for () {
    unsafe fn visit_ref_at(_repr: *const Self::Repr, tag: u8, _visitor: &mut V) -> V::Output {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head, Tail, V> ListVisitRef<V> for (Head, Tail)
where
    V: VisitRef<Head>,
    Tail: ListVisitRef<V>,
{
    unsafe fn visit_ref_at(repr: *const Self::Repr, tag: u8, visitor: &mut V) -> V::Output {
        if tag == 0 {
            let head = unsafe { &*core::ptr::addr_of!((*repr).data).cast::<Head>() };
            visitor.visit_ref(head)
        } else {
            unsafe {
                Tail::visit_ref_at(core::ptr::addr_of!((*repr).next).cast(), tag - 1, visitor)
            }
        }
    }
}

/// Dispatches a [`VisitMut`] visitor over the alternative live at a tag:
/// supported iff the visitor has an entry point for every alternative.
///
/// # Safety
///
/// Implementations must hand the visitor exactly the alternative named by
/// `tag`.
pub unsafe trait ListVisitMut<V: Visitor>: AltList {
    /// Invokes `visitor` on the alternative live at `tag`.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be `tag`, with `tag < Self::LEN`.
    unsafe fn visit_mut_at(repr: *mut Self::Repr, tag: u8, visitor: &mut V) -> V::Output;
}

unsafe impl<V: Visitor> ListVisitMut<V> for () {
    unsafe fn visit_mut_at(_repr: *mut Self::Repr, tag: u8, _visitor: &mut V) -> V::Output {
        unreachable!("tag {tag} out of range for exhausted alternative list")
    }
}

unsafe impl<Head, Tail, V> ListVisitMut<V> for (Head, Tail)
where
    V: VisitMut<Head>,
    Tail: ListVisitMut<V>,
{
    unsafe fn visit_mut_at(repr: *mut Self::Repr, tag: u8, visitor: &mut V) -> V::Output {
        if tag == 0 {
            let head = unsafe { &mut *core::ptr::addr_of_mut!((*repr).data).cast::<Head>() };
            visitor.visit_mut(head)
        } else {
            unsafe {
                Tail::visit_mut_at(core::ptr::addr_of_mut!((*repr).next).cast(), tag - 1, visitor)
            }
        }
    }
}
