use std::sync::atomic::{AtomicUsize, Ordering};

use motley::{Swap, Variant, U1};
use motley_testhelpers::test;

#[test]
fn same_alternative_swap_dispatches_to_the_custom_impl_once() {
    static SWAPS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone, PartialEq)]
    struct Tracked(u32);

    impl Swap for Tracked {
        fn swap_with(&mut self, other: &mut Self) {
            SWAPS.fetch_add(1, Ordering::SeqCst);
            core::mem::swap(self, other);
        }
    }

    let mut a: Variant![i32, Tracked] = Variant::new(Tracked(1));
    let mut b: Variant![i32, Tracked] = Variant::new(Tracked(2));

    a.swap_with(&mut b);

    assert_eq!(SWAPS.load(Ordering::SeqCst), 1);
    assert_eq!(a.peek::<Tracked, _>(), Some(&Tracked(2)));
    assert_eq!(b.peek::<Tracked, _>(), Some(&Tracked(1)));
}

#[test]
fn cross_alternative_swap_exchanges_representations() {
    static SWAPS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone, PartialEq)]
    struct Tracked(u32);

    impl Swap for Tracked {
        fn swap_with(&mut self, other: &mut Self) {
            SWAPS.fetch_add(1, Ordering::SeqCst);
            core::mem::swap(self, other);
        }
    }

    let mut a: Variant![i32, Tracked] = Variant::new(7);
    let mut b: Variant![i32, Tracked] = Variant::new(Tracked(9));

    a.swap_with(&mut b);

    // The whole representation moved; no per-alternative swap ran.
    assert_eq!(SWAPS.load(Ordering::SeqCst), 0);
    assert_eq!(a.peek::<Tracked, _>(), Some(&Tracked(9)));
    assert_eq!(b.peek::<i32, _>(), Some(&7));
}

#[test]
fn swapping_with_a_vacant_side_moves_the_value_over() {
    let mut a: Variant![i32, String] = Variant::new(String::from("movable"));
    let mut b: Variant![i32, String] = Variant::new(1);
    let _ = b.try_emplace_with::<String, U1, (), _>(|| Err(()));
    assert!(b.is_vacant());

    a.swap_with(&mut b);

    assert!(a.is_vacant());
    assert_eq!(b.get::<String, _>().unwrap().as_str(), "movable");
}

#[test]
fn swapping_two_vacant_variants_is_a_no_op() {
    let mut a: Variant![i32, String] = Variant::new(1);
    let mut b: Variant![i32, String] = Variant::new(2);
    let _ = a.try_emplace_with::<String, U1, (), _>(|| Err(()));
    let _ = b.try_emplace_with::<String, U1, (), _>(|| Err(()));

    a.swap_with(&mut b);
    assert!(a.is_vacant());
    assert!(b.is_vacant());
}

#[test]
fn default_swap_exchanges_values() {
    let mut a: Variant![i32, String] = Variant::new(String::from("left"));
    let mut b: Variant![i32, String] = Variant::new(String::from("right"));

    a.swap_with(&mut b);
    assert_eq!(a.get::<String, _>().unwrap().as_str(), "right");
    assert_eq!(b.get::<String, _>().unwrap().as_str(), "left");
}
