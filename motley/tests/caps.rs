//! The container's special operations exist exactly when every
//! alternative supports them; checked entirely at compile time.

use core::fmt::Debug;
use core::hash::Hash;

use motley::{Variant, U0};
use motley_testhelpers::test;
use static_assertions::{assert_impl_all, assert_not_impl_any};

struct Bare;

type Full = Variant![i32, String, bool];
type WithBare = Variant![i32, Bare];
type WithMutRef = Variant![i32, &'static mut i32];
type Uncomparable = Variant![i32, f64];
type WithRc = Variant![i32, std::rc::Rc<i32>];

assert_impl_all!(Full: Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Send, Sync);

// One non-conforming alternative degrades the whole container.
assert_not_impl_any!(WithBare: Clone, PartialEq, Hash, Debug);

// A mutable reference can be held but not duplicated.
assert_not_impl_any!(WithMutRef: Clone);

// Floats stop at partial comparison, and so does the container.
assert_impl_all!(Uncomparable: PartialEq, PartialOrd);
assert_not_impl_any!(Uncomparable: Eq, Ord, Hash);

assert_not_impl_any!(WithRc: Send, Sync);

#[test]
fn degraded_containers_still_hold_values() {
    let mut v: WithBare = Variant::new_at::<U0, _>(5);
    assert_eq!(v.peek::<i32, _>(), Some(&5));
    v.emplace::<Bare, _>(Bare);
    assert_eq!(v.index(), Some(1));
}

#[test]
fn partial_comparison_works_without_total_order() {
    let a: Uncomparable = Variant::new(1.0f64);
    let b: Uncomparable = Variant::new(f64::NAN);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(a == a.clone());
}
