use motley::{AccessError, Alts, Variant, U0, U1, U2};
use motley_testhelpers::{test, IPanic};

#[test]
fn default_constructs_the_first_alternative() {
    let v: Variant![i32, i16] = Variant::default();
    assert_eq!(v.index(), Some(0));
    assert!(!v.is_vacant());
    assert_eq!(v.peek::<i32, _>(), Some(&0));
}

#[test]
fn emplace_switches_alternatives_and_access_follows() {
    let mut v: Variant![i32, i16] = Variant::default();
    let v2 = v.clone();
    assert_eq!(v2.index(), Some(0));

    v.emplace::<i16, U1>(2);
    assert_eq!(v.index(), Some(1));
    assert_eq!(*v.get::<i16, _>().unwrap(), 2);

    match v.get::<i32, _>() {
        Err(AccessError::WrongAlternative { expected, actual }) => {
            assert!(expected.contains("i32"));
            assert!(actual.contains("i16"));
        }
        other => panic!("expected a wrong-alternative error, got {other:?}"),
    }

    v.clone_from(&v2);
    assert_eq!(v.index(), Some(0));
}

#[test]
fn get_equals_the_value_just_emplaced() -> Result<(), IPanic> {
    let mut v: Variant![i32, String, f64] = Variant::new(1);
    v.emplace::<String, U1>(String::from("round trip"));
    assert_eq!(v.get::<String, _>()?.as_str(), "round trip");
    v.emplace::<f64, U2>(2.5);
    assert_eq!(*v.get::<f64, _>()?, 2.5);
    v.emplace::<i32, U0>(-3);
    assert_eq!(*v.get::<i32, _>()?, -3);
    Ok(())
}

#[test]
fn exactly_one_of_vacant_or_in_range_holds() {
    let mut v: Variant![i32, String] = Variant::new(9);
    assert!(!v.is_vacant());
    assert!(v.index().unwrap() < 2);

    let _ = v.try_emplace_with::<String, U1, (), _>(|| Err(()));
    assert!(v.is_vacant());
    assert_eq!(v.index(), None);
}

#[test]
fn converting_construction_picks_the_unique_alternative() {
    let v: Variant![i32, String] = Variant::new(String::from("by type"));
    assert_eq!(v.index(), Some(1));

    // Duplicate alternatives are reachable by index.
    let v: Variant![u32, u32] = Variant::new_at::<U1, _>(8);
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.peek::<u32, U1>(), Some(&8));
    assert_eq!(v.peek::<u32, U0>(), None);
}

#[test]
fn set_assigns_in_place_or_emplaces() {
    let mut v: Variant![i32, String] = Variant::new(1);
    v.set(2);
    assert_eq!(v.index(), Some(0));
    assert_eq!(v.peek::<i32, _>(), Some(&2));

    v.set(String::from("switched"));
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.peek::<String, _>().unwrap().as_str(), "switched");

    v.peek_mut::<String, _>().unwrap().push_str(" again");
    assert_eq!(v.peek::<String, _>().unwrap().as_str(), "switched again");
}

#[test]
fn reference_alternatives_borrow_instead_of_owning() {
    let i = 42;
    let s = String::from("hello world");

    let mut v: Variant![&i32, &String] = Variant::new(&i);
    assert_eq!(v.index(), Some(0));
    assert_eq!(**v.get::<&i32, _>().unwrap(), 42);
    assert!(core::ptr::eq(*v.get::<&i32, _>().unwrap(), &i));

    v.emplace::<&String, U1>(&s);
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.get::<&String, _>().unwrap().as_str(), "hello world");
    assert!(core::ptr::eq(*v.get::<&String, _>().unwrap(), &s));
}

#[test]
fn mutation_through_a_reference_alternative() {
    let mut i = 42;
    {
        let mut v: Variant![&mut i32] = Variant::new(&mut i);
        **v.get_mut::<&mut i32, _>().unwrap() = 24;
    }
    assert_eq!(i, 24);
}

#[test]
fn move_only_alternatives_move_in_and_out() {
    #[derive(Debug, PartialEq)]
    struct Opaque(String);

    let mut v: Variant![i32, Opaque] = Variant::new(Opaque(String::from("hello world")));
    assert_eq!(v.get::<Opaque, _>().unwrap().0.as_str(), "hello world");

    v.emplace::<Opaque, U1>(Opaque(String::from("goodbye")));
    let taken = v.into_alt::<Opaque, _>().unwrap();
    assert_eq!(taken, Opaque(String::from("goodbye")));
}

#[test]
fn into_alt_returns_the_variant_on_mismatch() {
    let v: Variant![i32, String] = Variant::new(5);
    let v = v.into_alt::<String, _>().unwrap_err();
    assert_eq!(v.peek::<i32, _>(), Some(&5));
}

#[test]
fn vacant_access_reports_vacancy() {
    let mut v: Variant![i32, String] = Variant::new(5);
    let _ = v.try_emplace_with::<String, U1, (), _>(|| Err(()));

    assert_eq!(v.get::<i32, _>().unwrap_err(), AccessError::Vacant);
    assert_eq!(v.peek::<i32, _>(), None);
    assert!(!v.holds::<i32, _>());

    // Assigning into a vacant variant is the normal recovery.
    v.set(7);
    assert_eq!(v.peek::<i32, _>(), Some(&7));
}

#[test]
fn debug_shows_index_and_value() {
    let mut v: Variant![i32, String] = Variant::new(42);
    assert_eq!(format!("{v:?}"), "Variant(#0: 42)");

    v.emplace::<String, U1>(String::from("x"));
    assert_eq!(format!("{v:?}"), "Variant(#1: \"x\")");

    let _ = v.try_emplace_with::<i32, U0, (), _>(|| Err(()));
    assert_eq!(format!("{v:?}"), "Variant(#vacant)");
}

#[test]
fn count_reflects_the_list_length() {
    assert_eq!(<Variant![i32]>::COUNT, 1);
    assert_eq!(<Variant![i32, String, f64]>::COUNT, 3);
}

#[test]
fn alternative_lists_nest_as_tuples() {
    // The macro spells the same type as the tuple nest.
    let v: Variant<Alts![i32, String]> = Variant::new(3);
    let w: Variant<(i32, (String, ()))> = v;
    assert_eq!(w.index(), Some(0));
}
