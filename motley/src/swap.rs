//! The swap engine.
//!
//! When both sides are live at the same alternative, the exchange goes
//! through that alternative's [`Swap`](motley_core::Swap) impl, exactly
//! once, so types with a meaningful in-place exchange keep it. In every other
//! case (different alternatives, or one side vacant) the whole
//! representation is exchanged bitwise, which for Rust values is always
//! correct and cannot fail.

use motley_core::{AltList, ListSwap, VACANT};

use crate::trace;
use crate::Variant;

impl<S: AltList + ListSwap> Variant<S> {
    /// Exchanges the contents of two variants, vacancy included.
    pub fn swap_with(&mut self, other: &mut Self) {
        let tag = self.slot().tag();
        if tag == other.slot().tag() {
            if tag == VACANT {
                return;
            }
            trace!(tag, "swap: same alternative, dispatching");
            unsafe {
                S::swap_at(
                    self.slot_mut().payload_mut(),
                    other.slot_mut().payload_mut(),
                    tag,
                )
            };
        } else {
            trace!("swap: representation exchange");
            core::mem::swap(self.slot_mut(), other.slot_mut());
        }
    }
}
