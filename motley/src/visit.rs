//! The visitation engine.
//!
//! Single-variant [`visit`]/[`visit_mut`] dispatch a visitor over the
//! live alternative. Multi-variant [`visit2`]/[`visit3`] dispatch over
//! the Cartesian combination of live alternatives: the combination is
//! first condensed into a canonical mixed-radix index (which is where a
//! vacant participant is refused, before any dispatch happens) and then
//! selected by nesting one per-variant tag walk inside another, binding
//! each resolved alternative with an adapter until the full tuple reaches
//! the visitor.
//!
//! Every visitor names a single `Output` on its [`Visitor`] impl, so all
//! combinations necessarily agree on the result type.

use motley_core::{
    AccessError, AltList, ListVisitMut, ListVisitRef, RawSlot, VisitRef, Visitor,
};

use crate::trace;
use crate::Variant;

/// Visits the live alternative of `v` by shared reference.
///
/// Fails with [`AccessError::Vacant`] before calling the visitor if `v`
/// holds no value.
pub fn visit<S, V>(visitor: &mut V, v: &Variant<S>) -> Result<V::Output, AccessError>
where
    V: Visitor,
    S: ListVisitRef<V>,
{
    let tag = v.slot().tag();
    match v.index() {
        None => Err(AccessError::Vacant),
        Some(_) => Ok(unsafe { S::visit_ref_at(v.slot().payload(), tag, visitor) }),
    }
}

/// Visits the live alternative of `v` by mutable reference.
///
/// Fails with [`AccessError::Vacant`] before calling the visitor if `v`
/// holds no value.
pub fn visit_mut<S, V>(visitor: &mut V, v: &mut Variant<S>) -> Result<V::Output, AccessError>
where
    V: Visitor,
    S: ListVisitMut<V>,
{
    let tag = v.slot().tag();
    match v.index() {
        None => Err(AccessError::Vacant),
        Some(_) => Ok(unsafe { S::visit_mut_at(v.slot_mut().payload_mut(), tag, visitor) }),
    }
}

/// Entry point for visiting a pair of alternatives, one from each of two
/// variants.
pub trait Visit2<A, B>: Visitor {
    /// Visits the live combination.
    fn visit2(&mut self, a: &A, b: &B) -> Self::Output;
}

/// Entry point for visiting a triple of alternatives, one from each of
/// three variants.
pub trait Visit3<A, B, C>: Visitor {
    /// Visits the live combination.
    fn visit3(&mut self, a: &A, b: &B, c: &C) -> Self::Output;
}

/// The canonical index of a pair of variants: the mixed-radix encoding
/// `a.index() * len(S2) + b.index()`, refusing vacant participants.
///
/// This is the number a flat dispatch table would be indexed by; the
/// nested walk selects the same combination.
pub fn canonical_index2<S1, S2>(
    a: &Variant<S1>,
    b: &Variant<S2>,
) -> Result<usize, AccessError>
where
    S1: AltList,
    S2: AltList,
{
    let i = a.index().ok_or(AccessError::Vacant)?;
    let j = b.index().ok_or(AccessError::Vacant)?;
    Ok(i * S2::LEN as usize + j)
}

/// The canonical index of a triple of variants (mixed radix, most
/// significant participant first), refusing vacant participants.
pub fn canonical_index3<S1, S2, S3>(
    a: &Variant<S1>,
    b: &Variant<S2>,
    c: &Variant<S3>,
) -> Result<usize, AccessError>
where
    S1: AltList,
    S2: AltList,
    S3: AltList,
{
    let i = a.index().ok_or(AccessError::Vacant)?;
    let j = b.index().ok_or(AccessError::Vacant)?;
    let k = c.index().ok_or(AccessError::Vacant)?;
    Ok((i * S2::LEN as usize + j) * S3::LEN as usize + k)
}

/// Visits the live combination of two variants.
///
/// Fails with [`AccessError::Vacant`], before the visitor runs, if
/// either participant holds no value.
pub fn visit2<S1, S2, V>(
    visitor: &mut V,
    a: &Variant<S1>,
    b: &Variant<S2>,
) -> Result<V::Output, AccessError>
where
    V: Visitor,
    S1: for<'v> ListVisitRef<PairOuter<'v, S2, V>>,
    S2: AltList,
{
    let _canonical = canonical_index2(a, b)?;
    trace!(canonical = _canonical, "visit2");
    let mut outer = PairOuter {
        second: b.slot(),
        visitor,
    };
    Ok(unsafe { S1::visit_ref_at(a.slot().payload(), a.slot().tag(), &mut outer) })
}

/// Visits the live combination of three variants.
///
/// Fails with [`AccessError::Vacant`], before the visitor runs, if any
/// participant holds no value.
pub fn visit3<S1, S2, S3, V>(
    visitor: &mut V,
    a: &Variant<S1>,
    b: &Variant<S2>,
    c: &Variant<S3>,
) -> Result<V::Output, AccessError>
where
    V: Visitor,
    S1: for<'v> ListVisitRef<TripleOuter<'v, S2, S3, V>>,
    S2: AltList,
    S3: AltList,
{
    let _canonical = canonical_index3(a, b, c)?;
    trace!(canonical = _canonical, "visit3");
    let mut outer = TripleOuter {
        second: b.slot(),
        third: c.slot(),
        visitor,
    };
    Ok(unsafe { S1::visit_ref_at(a.slot().payload(), a.slot().tag(), &mut outer) })
}

/// Adapter dispatching the second variant of a pair once the first
/// alternative is bound.
pub struct PairOuter<'v, S2: AltList, V> {
    second: &'v RawSlot<S2>,
    visitor: &'v mut V,
}

impl<S2: AltList, V: Visitor> Visitor for PairOuter<'_, S2, V> {
    type Output = V::Output;
}

impl<A, S2, V> VisitRef<A> for PairOuter<'_, S2, V>
where
    V: Visitor,
    S2: AltList + for<'a> ListVisitRef<PairInner<'a, A, V>>,
{
    fn visit_ref(&mut self, a: &A) -> V::Output {
        let mut inner = PairInner {
            first: a,
            visitor: &mut *self.visitor,
        };
        // The caller established that the second participant is live.
        unsafe { S2::visit_ref_at(self.second.payload(), self.second.tag(), &mut inner) }
    }
}

/// Adapter forwarding a fully bound pair to the visitor.
pub struct PairInner<'a, A, V> {
    first: &'a A,
    visitor: &'a mut V,
}

impl<A, V: Visitor> Visitor for PairInner<'_, A, V> {
    type Output = V::Output;
}

impl<A, B, V: Visit2<A, B>> VisitRef<B> for PairInner<'_, A, V> {
    fn visit_ref(&mut self, b: &B) -> V::Output {
        self.visitor.visit2(self.first, b)
    }
}

/// Adapter dispatching the second and third variants of a triple once the
/// first alternative is bound.
pub struct TripleOuter<'v, S2: AltList, S3: AltList, V> {
    second: &'v RawSlot<S2>,
    third: &'v RawSlot<S3>,
    visitor: &'v mut V,
}

impl<S2: AltList, S3: AltList, V: Visitor> Visitor for TripleOuter<'_, S2, S3, V> {
    type Output = V::Output;
}

impl<A, S2, S3, V> VisitRef<A> for TripleOuter<'_, S2, S3, V>
where
    V: Visitor,
    S3: AltList,
    S2: AltList + for<'x, 'y> ListVisitRef<PairOuter<'x, S3, BindFirst<'y, A, V>>>,
{
    fn visit_ref(&mut self, a: &A) -> V::Output {
        let mut bound = BindFirst {
            first: a,
            visitor: &mut *self.visitor,
        };
        let mut outer = PairOuter {
            second: self.third,
            visitor: &mut bound,
        };
        unsafe { S2::visit_ref_at(self.second.payload(), self.second.tag(), &mut outer) }
    }
}

/// Adapter turning a [`Visit3`] visitor into a [`Visit2`] visitor over
/// the remaining participants.
pub struct BindFirst<'a, A, V> {
    first: &'a A,
    visitor: &'a mut V,
}

impl<A, V: Visitor> Visitor for BindFirst<'_, A, V> {
    type Output = V::Output;
}

impl<A, B, C, V: Visit3<A, B, C>> Visit2<B, C> for BindFirst<'_, A, V> {
    fn visit2(&mut self, b: &B, c: &C) -> V::Output {
        self.visitor.visit3(self.first, b, c)
    }
}
