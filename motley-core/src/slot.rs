//! The tagged slot: payload storage plus the record of which alternative
//! is live.
//!
//! [`RawSlot`] is the lifetime controller of the container. It owns an
//! uninitialized payload and a tag, and guarantees the two stay coherent:
//! the tag is reset *before* a value is destroyed and published only
//! *after* a value is fully constructed, so an unwind at any point leaves
//! the slot vacant rather than pointing at a half-built or half-dead
//! value.

use core::mem::MaybeUninit;

use crate::{AltList, Index, Split};

/// The tag value marking a slot with no live alternative.
///
/// A slot becomes vacant when a value-changing operation destroys the old
/// value and the construction of the new one fails (panic or `Err`).
pub const VACANT: u8 = u8::MAX;

/// Payload storage for one alternative out of the list `S`, tagged with
/// which alternative (if any) is live.
pub struct RawSlot<S: AltList> {
    tag: u8,
    payload: MaybeUninit<S::Repr>,
}

impl<S: AltList> RawSlot<S> {
    /// Creates a slot with no live alternative.
    #[inline]
    pub const fn vacant() -> Self {
        Self {
            tag: VACANT,
            payload: MaybeUninit::uninit(),
        }
    }

    /// Creates a slot holding `value` at index `N`.
    #[inline]
    pub fn new<T, N>(value: T) -> Self
    where
        S: Split<T, N>,
        N: Index,
    {
        Self {
            tag: N::TAG,
            payload: MaybeUninit::new(S::from_value(value)),
        }
    }

    /// The raw tag: an index into the list, or [`VACANT`].
    #[inline]
    pub const fn tag(&self) -> u8 {
        self.tag
    }

    /// The index of the live alternative, if any.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        if self.tag == VACANT {
            None
        } else {
            Some(self.tag as usize)
        }
    }

    /// Whether no alternative is live.
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.tag == VACANT
    }

    /// Raw pointer to the payload, for dispatch machinery.
    #[inline]
    pub const fn payload(&self) -> *const S::Repr {
        self.payload.as_ptr()
    }

    /// Mutable raw pointer to the payload, for dispatch machinery.
    #[inline]
    pub fn payload_mut(&mut self) -> *mut S::Repr {
        self.payload.as_mut_ptr()
    }

    /// Destroys the live alternative, if any, and marks the slot vacant.
    ///
    /// Idempotent. The tag is reset before the destructor runs, so an
    /// unwinding destructor cannot leave a destroyed value published as
    /// live. When no alternative in the list has drop glue this is a tag
    /// reset and nothing else.
    pub fn clear(&mut self) {
        let tag = self.tag;
        if tag == VACANT {
            return;
        }
        self.tag = VACANT;
        if S::NEEDS_DROP {
            unsafe { S::drop_at(self.payload.as_mut_ptr(), tag) }
        }
    }

    /// Places `value` at index `N` in a vacant slot and publishes the tag.
    ///
    /// Constructing over a live slot does not drop the old value; callers
    /// uphold the vacancy precondition ([`clear`](RawSlot::clear) first).
    #[inline]
    pub fn construct<T, N>(&mut self, value: T) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
    {
        debug_assert!(self.is_vacant(), "construct over a live alternative");
        self.payload.write(S::from_value(value));
        self.tag = N::TAG;
        unsafe { &mut *S::alt_ptr_mut(self.payload.as_mut_ptr()) }
    }

    /// Installs a whole payload representation under `tag`.
    ///
    /// This is the infallible second half of the two-step assignment path:
    /// the representation was built elsewhere and moves in bitwise.
    ///
    /// # Safety
    ///
    /// `repr`'s live alternative must be the one named by `tag`, with
    /// `tag < S::LEN`, and the slot must be vacant.
    #[inline]
    pub unsafe fn install(&mut self, repr: S::Repr, tag: u8) {
        debug_assert!(self.is_vacant(), "install over a live alternative");
        debug_assert!(tag < S::LEN);
        self.payload.write(repr);
        self.tag = tag;
    }

    /// Destroys the live alternative (if any), then constructs `value` at
    /// index `N`.
    #[inline]
    pub fn emplace<T, N>(&mut self, value: T) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
    {
        self.clear();
        self.construct(value)
    }

    /// Destroys the live alternative (if any), then constructs the value
    /// returned by `make` at index `N`.
    ///
    /// `make` runs after the old value is gone: if it unwinds, the slot
    /// stays vacant and the tag is never published.
    #[inline]
    pub fn emplace_with<T, N, F>(&mut self, make: F) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
        F: FnOnce() -> T,
    {
        self.clear();
        self.construct(make())
    }

    /// Fallible form of [`emplace_with`](RawSlot::emplace_with): on `Err`
    /// the slot stays vacant and the error propagates untouched.
    #[inline]
    pub fn try_emplace_with<T, N, E, F>(&mut self, make: F) -> Result<&mut T, E>
    where
        S: Split<T, N>,
        N: Index,
        F: FnOnce() -> Result<T, E>,
    {
        self.clear();
        Ok(self.construct(make()?))
    }

    /// Shared reference to the alternative at index `N`.
    ///
    /// # Safety
    ///
    /// Index `N` must be the live alternative.
    #[inline]
    pub unsafe fn alt_ref<T, N>(&self) -> &T
    where
        S: Split<T, N>,
        N: Index,
    {
        debug_assert_eq!(self.tag, N::TAG);
        unsafe { &*S::alt_ptr(self.payload.as_ptr()) }
    }

    /// Mutable reference to the alternative at index `N`.
    ///
    /// # Safety
    ///
    /// Index `N` must be the live alternative.
    #[inline]
    pub unsafe fn alt_mut<T, N>(&mut self) -> &mut T
    where
        S: Split<T, N>,
        N: Index,
    {
        debug_assert_eq!(self.tag, N::TAG);
        unsafe { &mut *S::alt_ptr_mut(self.payload.as_mut_ptr()) }
    }

    /// Moves the alternative at index `N` out, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Index `N` must be the live alternative.
    #[inline]
    pub unsafe fn read_out<T, N>(&mut self) -> T
    where
        S: Split<T, N>,
        N: Index,
    {
        debug_assert_eq!(self.tag, N::TAG);
        self.tag = VACANT;
        unsafe { S::alt_ptr(self.payload.as_ptr()).read() }
    }
}

impl<S: AltList> Drop for RawSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
