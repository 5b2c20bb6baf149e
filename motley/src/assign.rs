//! The assignment engine.
//!
//! Copy-assignment is `Clone::clone_from`, with three outcomes chosen by
//! comparing tags:
//!
//! - source vacant: the target is cleared; terminal, nothing can fail.
//! - same alternative: the alternative's own `clone_from` runs in place.
//!   A panic there leaves the index unchanged and the value in whatever
//!   state the alternative's guarantee says.
//! - different alternatives: the incoming value is first cloned into a
//!   temporary payload (a panic during that clone propagates with the
//!   target untouched), and only then does the target tear down its old
//!   value and take the temporary with an infallible bitwise move. The
//!   target can therefore never be left vacant by assignment; vacancy is
//!   reserved for in-place construction, where there is no temporary to
//!   fall back to.
//!
//! Move-assignment needs no engine: assigning a `Variant` by value is a
//! native bitwise move.

use motley_core::{AltList, ListClone, RawSlot, VACANT};

use crate::trace;
use crate::Variant;

impl<S: AltList + ListClone> Clone for Variant<S> {
    fn clone(&self) -> Self {
        let tag = self.slot().tag();
        if tag == VACANT {
            return Self::from_slot(RawSlot::vacant());
        }
        let repr = unsafe { S::clone_at(self.slot().payload(), tag) };
        let mut slot = RawSlot::vacant();
        unsafe { slot.install(repr, tag) };
        Self::from_slot(slot)
    }

    fn clone_from(&mut self, source: &Self) {
        let tag = source.slot().tag();
        if tag == VACANT {
            trace!("clone_from: vacant source, clearing target");
            self.slot_mut().clear();
            return;
        }
        if self.slot().tag() == tag {
            trace!(tag, "clone_from: in place");
            unsafe { S::clone_from_at(self.slot_mut().payload_mut(), source.slot().payload(), tag) };
        } else {
            // Stage the clone before touching the old value.
            trace!(tag, "clone_from: cross-alternative, staging");
            let staged = unsafe { S::clone_at(source.slot().payload(), tag) };
            let slot = self.slot_mut();
            slot.clear();
            unsafe { slot.install(staged, tag) };
        }
    }
}
