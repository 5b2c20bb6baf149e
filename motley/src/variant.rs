//! The public container type.

use motley_core::{AccessError, AltList, Index, ListDebug, RawSlot, Split, Zero, VACANT};

use crate::trace;

/// A value holding one alternative out of the compile-time list `S`.
///
/// `S` is a nested tuple of alternative types, usually spelled with
/// [`Alts!`](crate::Alts): `Variant<Alts![i32, String]>`, or directly as
/// [`Variant![i32, String]`](crate::Variant!). Alternatives are addressed
/// by type (when the type occurs exactly once in the list) or by
/// type-level index ([`U0`](motley_core::U0), [`U1`](motley_core::U1), …)
/// when it does not.
///
/// A variant is *vacant* when a value-changing operation destroyed its old
/// value and then failed (by panic or by `Err`) to construct the new
/// one. Every checked operation reports vacancy as
/// [`AccessError::Vacant`]; assigning or emplacing into a vacant variant
/// is always legal and is the normal recovery.
pub struct Variant<S: AltList> {
    slot: RawSlot<S>,
}

impl<S: AltList> Variant<S> {
    /// Number of alternatives in the list.
    pub const COUNT: usize = S::LEN as usize;

    /// Constructs the alternative matching `value`'s type.
    ///
    /// The alternative must occur exactly once in the list; otherwise the
    /// lookup fails to resolve at compile time and the index parameter
    /// has to be spelled (`Variant::new::<_, U1>(..)` or
    /// [`new_at`](Variant::new_at)).
    #[inline]
    pub fn new<T, N>(value: T) -> Self
    where
        S: Split<T, N>,
        N: Index,
    {
        Self {
            slot: RawSlot::new(value),
        }
    }

    /// Constructs the alternative at index `N`, spelled first so call
    /// sites read `Variant::new_at::<U1, _>(value)`.
    #[inline]
    pub fn new_at<N, T>(value: T) -> Self
    where
        S: Split<T, N>,
        N: Index,
    {
        Self {
            slot: RawSlot::new(value),
        }
    }

    /// The index of the live alternative, or `None` when vacant.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.slot.index()
    }

    /// Whether the variant holds no value.
    ///
    /// True only after a value-changing operation destroyed the old value
    /// and failed to construct its replacement.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.slot.is_vacant()
    }

    /// Whether the live alternative is the one at index `N`.
    #[inline]
    pub fn holds<T, N>(&self) -> bool
    where
        S: Split<T, N>,
        N: Index,
    {
        self.slot.tag() == N::TAG
    }

    /// The live alternative, if it is the one requested. Never fails.
    #[inline]
    pub fn peek<T, N>(&self) -> Option<&T>
    where
        S: Split<T, N>,
        N: Index,
    {
        if self.slot.tag() == N::TAG {
            Some(unsafe { self.slot.alt_ref() })
        } else {
            None
        }
    }

    /// Mutable counterpart of [`peek`](Variant::peek). Never fails.
    #[inline]
    pub fn peek_mut<T, N>(&mut self) -> Option<&mut T>
    where
        S: Split<T, N>,
        N: Index,
    {
        if self.slot.tag() == N::TAG {
            Some(unsafe { self.slot.alt_mut() })
        } else {
            None
        }
    }

    /// The live alternative, or an [`AccessError`] naming what was found
    /// instead.
    #[inline]
    pub fn get<T, N>(&self) -> Result<&T, AccessError>
    where
        S: Split<T, N>,
        N: Index,
    {
        match self.slot.tag() {
            tag if tag == N::TAG => Ok(unsafe { self.slot.alt_ref() }),
            VACANT => Err(AccessError::Vacant),
            tag => Err(AccessError::WrongAlternative {
                expected: core::any::type_name::<T>(),
                actual: S::alt_name(tag),
            }),
        }
    }

    /// Mutable counterpart of [`get`](Variant::get).
    #[inline]
    pub fn get_mut<T, N>(&mut self) -> Result<&mut T, AccessError>
    where
        S: Split<T, N>,
        N: Index,
    {
        match self.slot.tag() {
            tag if tag == N::TAG => Ok(unsafe { self.slot.alt_mut() }),
            VACANT => Err(AccessError::Vacant),
            tag => Err(AccessError::WrongAlternative {
                expected: core::any::type_name::<T>(),
                actual: S::alt_name(tag),
            }),
        }
    }

    /// Consumes the variant, returning the alternative at index `N` if it
    /// is the live one, or the variant unchanged if not.
    #[inline]
    pub fn into_alt<T, N>(mut self) -> Result<T, Self>
    where
        S: Split<T, N>,
        N: Index,
    {
        if self.slot.tag() == N::TAG {
            Ok(unsafe { self.slot.read_out() })
        } else {
            Err(self)
        }
    }

    /// Destroys the live alternative (if any) and constructs `value` at
    /// index `N`. The tag is published only once the new value is in
    /// place.
    #[inline]
    pub fn emplace<T, N>(&mut self, value: T) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
    {
        trace!(tag = N::TAG, "emplace");
        self.slot.emplace(value)
    }

    /// Like [`emplace`](Variant::emplace), but the value is made by
    /// `make` *after* the old value is destroyed: if `make` unwinds, the
    /// variant is left vacant.
    #[inline]
    pub fn emplace_with<T, N, F>(&mut self, make: F) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
        F: FnOnce() -> T,
    {
        trace!(tag = N::TAG, "emplace_with");
        self.slot.emplace_with(make)
    }

    /// Fallible in-place construction: on `Err` the variant is left
    /// vacant and the error propagates untouched.
    #[inline]
    pub fn try_emplace_with<T, N, E, F>(&mut self, make: F) -> Result<&mut T, E>
    where
        S: Split<T, N>,
        N: Index,
        F: FnOnce() -> Result<T, E>,
    {
        trace!(tag = N::TAG, "try_emplace_with");
        self.slot.try_emplace_with(make)
    }

    /// Kind-deduced assignment: assigns in place when the matching
    /// alternative is already live, emplaces otherwise.
    #[inline]
    pub fn set<T, N>(&mut self, value: T) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
    {
        if self.slot.tag() == N::TAG {
            let slot = unsafe { self.slot.alt_mut() };
            *slot = value;
            slot
        } else {
            self.slot.emplace(value)
        }
    }

    #[inline]
    pub(crate) fn slot(&self) -> &RawSlot<S> {
        &self.slot
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self) -> &mut RawSlot<S> {
        &mut self.slot
    }

    #[inline]
    pub(crate) fn from_slot(slot: RawSlot<S>) -> Self {
        Self { slot }
    }
}

impl<Head: Default, Tail: AltList> Default for Variant<(Head, Tail)> {
    /// Default-constructs the *first* alternative, which must itself be
    /// default-constructible, even when the same type occurs again later
    /// in the list.
    fn default() -> Self {
        Self {
            slot: RawSlot::new::<Head, Zero>(Head::default()),
        }
    }
}

impl<S: AltList + ListDebug> core::fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.slot.index() {
            None => f.write_str("Variant(#vacant)"),
            Some(i) => {
                write!(f, "Variant(#{i}: ")?;
                unsafe { S::fmt_at(self.slot.payload(), self.slot.tag(), f)? };
                f.write_str(")")
            }
        }
    }
}
