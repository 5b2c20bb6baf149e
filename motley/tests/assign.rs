use std::panic::{catch_unwind, AssertUnwindSafe};

use motley::{Variant, U1, U2};
use motley_testhelpers::test;

/// Clones fine until armed, then panics on the next clone.
#[derive(Debug, PartialEq)]
struct Grenade {
    armed: bool,
}

impl Grenade {
    fn inert() -> Self {
        Grenade { armed: false }
    }

    fn armed() -> Self {
        Grenade { armed: true }
    }
}

impl Clone for Grenade {
    fn clone(&self) -> Self {
        if self.armed {
            panic!("clone refused");
        }
        Grenade { armed: false }
    }
}

#[test]
fn clone_preserves_index_and_value() {
    let v: Variant![i32, String] = Variant::new(String::from("cloned"));
    let w = v.clone();
    assert_eq!(w.index(), Some(1));
    assert_eq!(w.get::<String, _>().unwrap().as_str(), "cloned");
    // Source untouched.
    assert_eq!(v.get::<String, _>().unwrap().as_str(), "cloned");
}

#[test]
fn cloning_a_vacant_variant_yields_a_vacant_variant() {
    let mut v: Variant![i32, String] = Variant::new(1);
    let _ = v.try_emplace_with::<String, U1, (), _>(|| Err(()));
    let w = v.clone();
    assert!(w.is_vacant());
}

#[test]
fn assigning_from_a_vacant_source_clears_the_target() {
    let mut source: Variant![i32, String] = Variant::new(1);
    let _ = source.try_emplace_with::<String, U1, (), _>(|| Err(()));

    let mut target: Variant![i32, String] = Variant::new(String::from("old"));
    target.clone_from(&source);
    assert!(target.is_vacant());
}

#[test]
fn same_alternative_assignment_runs_in_place() {
    let mut target: Variant![i32, String] = Variant::new(String::from("before"));
    let source: Variant![i32, String] = Variant::new(String::from("after"));

    target.clone_from(&source);
    assert_eq!(target.index(), Some(1));
    assert_eq!(target.get::<String, _>().unwrap().as_str(), "after");
}

#[test]
fn cross_alternative_assignment_replaces_the_value() {
    let mut target: Variant![i32, String] = Variant::new(7);
    let source: Variant![i32, String] = Variant::new(String::from("incoming"));

    target.clone_from(&source);
    assert_eq!(target.index(), Some(1));
    assert_eq!(target.get::<String, _>().unwrap().as_str(), "incoming");
}

#[test]
fn panicking_cross_assignment_leaves_the_target_intact() {
    // The incoming value is staged in a temporary before the old value is
    // touched, so a panicking clone changes nothing.
    let mut target: Variant![i32, Grenade, String] = Variant::new(String::from("hello"));
    let source: Variant![i32, Grenade, String] = Variant::new_at::<U1, _>(Grenade::armed());

    let outcome = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(outcome.is_err());

    assert!(!target.is_vacant());
    assert_eq!(target.index(), Some(2));
    assert_eq!(target.get::<String, _>().unwrap().as_str(), "hello");
}

#[test]
fn panicking_same_alternative_assignment_keeps_the_index() {
    let mut target: Variant![i32, Grenade, String] = Variant::new_at::<U1, _>(Grenade::inert());
    let source: Variant![i32, Grenade, String] = Variant::new_at::<U1, _>(Grenade::armed());

    let outcome = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(outcome.is_err());

    // The variant adds no guarantee about the value beyond the
    // alternative's own, but the index must not have changed.
    assert_eq!(target.index(), Some(1));
}

#[test]
fn vacancy_comes_only_from_in_place_construction() {
    let mut v: Variant![i32, Grenade, String] = Variant::new(5);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        v.emplace_with::<Grenade, U1, _>(|| Grenade::armed().clone());
    }));
    assert!(outcome.is_err());
    assert!(v.is_vacant());

    // Assignment recovers the variant.
    let source: Variant![i32, Grenade, String] = Variant::new(String::from("rescue"));
    v.clone_from(&source);
    assert_eq!(v.index(), Some(2));
    assert_eq!(v.get::<String, _>().unwrap().as_str(), "rescue");
}

#[test]
fn move_assignment_is_a_plain_move() {
    let mut v: Variant![i32, String] = Variant::new(String::from("kept"));
    let w: Variant![i32, String] = Variant::new(3);
    v = w;
    assert_eq!(v.index(), Some(0));
    assert_eq!(*v.get::<i32, _>().unwrap(), 3);
}

#[test]
fn set_reuses_the_live_alternative_slot() {
    let mut v: Variant![i32, String, f64] = Variant::new_at::<U2, _>(1.0);
    v.set(2.0);
    assert_eq!(v.index(), Some(2));
    assert_eq!(v.peek::<f64, _>(), Some(&2.0));
}
