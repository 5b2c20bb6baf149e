//! Relational operators and hashing.
//!
//! All of these compare the index first and only consult values when the
//! indices agree, through the same per-tag walks that power visitation.
//! A vacant variant equals a vacant variant and orders before any live
//! one; hashing feeds the tag byte always and the value only when live,
//! so vacant variants of one list type hash alike.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use motley_core::{AltList, ListEq, ListHash, ListOrd, ListPartialEq, ListPartialOrd};

use crate::Variant;

impl<S: AltList + ListPartialEq> PartialEq for Variant<S> {
    fn eq(&self, other: &Self) -> bool {
        if self.slot().tag() != other.slot().tag() {
            return false;
        }
        match self.index() {
            None => true,
            Some(_) => unsafe {
                S::eq_at(self.slot().payload(), other.slot().payload(), self.slot().tag())
            },
        }
    }
}

impl<S: AltList + ListEq> Eq for Variant<S> {}

impl<S: AltList + ListPartialOrd> PartialOrd for Variant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.index(), other.index()) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(i), Some(j)) if i != j => i.partial_cmp(&j),
            (Some(_), Some(_)) => unsafe {
                S::partial_cmp_at(
                    self.slot().payload(),
                    other.slot().payload(),
                    self.slot().tag(),
                )
            },
        }
    }
}

impl<S: AltList + ListOrd> Ord for Variant<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.index(), other.index()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(i), Some(j)) if i != j => i.cmp(&j),
            (Some(_), Some(_)) => unsafe {
                S::cmp_at(
                    self.slot().payload(),
                    other.slot().payload(),
                    self.slot().tag(),
                )
            },
        }
    }
}

impl<S: AltList + ListHash> Hash for Variant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.slot().tag());
        if self.index().is_some() {
            let erased: &mut dyn Hasher = state;
            unsafe { S::hash_at(self.slot().payload(), self.slot().tag(), erased) };
        }
    }
}
