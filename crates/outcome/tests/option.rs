use std::panic::{AssertUnwindSafe, catch_unwind};

use outcome::{AccessError, None, Option, Result, Some, catch};

#[test]
fn test_some_and_none_basics() {
    let x = Some(42);
    assert!(x.is_some());
    assert!(!x.is_none());
    assert_eq!(x.unwrap(), 42);

    let n: Option<i32> = None;
    assert!(n.is_none());
    assert_eq!(Option::<String>::default(), None);
}

#[test]
fn test_unwrap_none_raises_option_error() {
    let err = catch(|| None::<i32>.unwrap()).unwrap_err();
    assert!(matches!(err, AccessError::OptionAccess(_)));
    assert_eq!(err.to_string(), "invalid option access: unwrap on an absent option");
}

#[test]
fn test_expect_carries_caller_message() {
    assert_eq!(Some('a').expect("needed a char"), 'a');

    let err = catch(|| None::<u8>.expect("needed a byte")).unwrap_err();
    assert_eq!(err.message(), "needed a byte");
}

#[test]
#[should_panic]
fn test_unwrap_none_panics() {
    let empty: Option<&str> = None;
    empty.unwrap();
}

#[test]
fn test_try_unwrap_reports_without_unwinding() {
    assert_eq!(Some(3).try_unwrap(), Ok(3));
    let err = None::<i32>.try_unwrap().unwrap_err();
    assert_eq!(err.message(), "unwrap on an absent option");
}

#[test]
fn test_map_over_some_and_none() {
    let f = |v: i32| v * 3 + 1;
    assert_eq!(Some(4).map(f).unwrap(), f(4));
    assert!(None::<i32>.map(f).is_none());

    // identity
    assert_eq!(Some(9).map(|v| v), Some(9));
    assert_eq!(None::<i32>.map(|v| v), None);
}

#[test]
fn test_map_or_and_map_or_else() {
    assert_eq!(Some("four").map_or(|s| s.len(), 0), 4);
    assert_eq!(None::<&str>.map_or(|s| s.len(), 0), 0);

    let k = 21;
    assert_eq!(Some(2).map_or_else(|| 2 * k, |v| v * k), 42);
    assert_eq!(None::<i32>.map_or_else(|| 2 * k, |v| v * k), 42);
}

#[test]
fn test_is_some_and_is_none_or() {
    assert!(Some(2).is_some_and(|v| v > 1));
    assert!(!Some(0).is_some_and(|v| v > 1));
    assert!(!None::<i32>.is_some_and(|v| v > 1));

    assert!(Some(2).is_none_or(|v| v > 1));
    assert!(!Some(0).is_none_or(|v| v > 1));
    assert!(None::<i32>.is_none_or(|v| v > 1));
}

#[test]
fn test_and_composition_mirrors_rhs() {
    let a = Some(5);
    let b: Option<i32> = None;
    assert_eq!(a | b, None);

    assert_eq!(Some(1) | Some("x"), Some("x"));
    assert_eq!(None::<i32> | Some("x"), None);

    let borrowed = Some(String::from("kept"));
    assert_eq!(&borrowed | Some(2.5), Some(2.5));
    assert_eq!(borrowed, Some(String::from("kept")));
}

#[test]
fn test_any_some_and_all_some() {
    let some = Some(1);
    let none = None::<&str>;

    assert!(some.any_some(&none));
    assert!(none.any_some(&some));
    assert!(!none.any_some(&None::<u8>));

    assert!(some.all_some(&Some("y")));
    assert!(!some.all_some(&none));
    assert!(!none.all_some(&some));
}

#[test]
fn test_eq_with_compares_across_payload_types() {
    assert!(Some(String::from("abc")).eq_with(&Some("abc")));
    assert!(!Some(String::from("abc")).eq_with(&Some("xyz")));
    assert!(None::<String>.eq_with(&None::<&str>));
    assert!(!Some(String::from("abc")).eq_with(&None::<&str>));
    assert!(!None::<String>.eq_with(&Some("abc")));
}

#[test]
fn test_insert_always_rebuilds() {
    let mut opt = None;
    *opt.insert(1) += 1;
    assert_eq!(opt, Some(2));

    *opt.insert(10) += 1;
    assert_eq!(opt, Some(11));

    let slot = opt.replace(7);
    assert_eq!(*slot, 7);
    assert_eq!(opt, Some(7));
}

#[test]
fn test_get_or_insert_keeps_existing() {
    let mut opt = Some(3);
    assert_eq!(*opt.get_or_insert(10), 3);

    let mut empty: Option<Vec<i32>> = None;
    empty.get_or_insert_with(Vec::new).push(4);
    empty.get_or_insert_with(|| vec![99]).push(5);
    assert_eq!(empty, Some(vec![4, 5]));

    let mut count: Option<u32> = None;
    *count.get_or_insert_default() += 1;
    assert_eq!(count, Some(1));
}

#[test]
fn test_failed_construction_keeps_previous_state() {
    let mut opt = Some(String::from("old"));
    let attempt = catch_unwind(AssertUnwindSafe(|| {
        opt.insert_with(|| panic!("constructor failed"));
    }));
    assert!(attempt.is_err());
    assert_eq!(opt, Some(String::from("old")));

    let mut empty: Option<String> = None;
    let attempt = catch_unwind(AssertUnwindSafe(|| {
        empty.get_or_insert_with(|| panic!("constructor failed"));
    }));
    assert!(attempt.is_err());
    assert!(empty.is_none());
}

#[test]
fn test_take_leaves_none() {
    let mut opt = Some(vec![1, 2]);
    assert_eq!(opt.take(), Some(vec![1, 2]));
    assert_eq!(opt, None);
    assert_eq!(opt.take(), None);
}

#[test]
fn test_inspect_only_runs_on_some() {
    let mut seen = Vec::new();
    let opt = Some(8).inspect(|v| seen.push(*v));
    assert_eq!(opt, Some(8));

    let empty = None::<i32>.inspect(|v| seen.push(*v));
    assert_eq!(empty, None);
    assert_eq!(seen, vec![8]);
}

#[test]
fn test_unwrap_or_family() {
    let absent: Option<i64> = None;
    assert_eq!(absent.unwrap_or(7_i32), 7_i64);
    assert_eq!(Some(1_i64).unwrap_or(7_i32), 1);

    assert_eq!(None::<String>.unwrap_or_default(), "");
    assert_eq!(Some(String::from("v")).unwrap_or_default(), "v");

    let mut calls = 0;
    assert_eq!(Some(2).unwrap_or_else(|| { calls += 1; 0 }), 2);
    assert_eq!(None.unwrap_or_else(|| { calls += 1; 5 }), 5);
    assert_eq!(calls, 1);
}

#[test]
fn test_unwrap_unchecked_on_some() {
    let value = unsafe { Some(String::from("ok")).unwrap_unchecked() };
    assert_eq!(value, "ok");
}

#[test]
fn test_as_ref_and_as_mut_are_views() {
    let owned = Some(String::from("abc"));
    assert_eq!(owned.as_ref().map(|s| s.len()), Some(3));
    assert_eq!(owned.as_ref().unwrap(), "abc");
    assert!(owned.is_some());

    let mut counter = Some(1);
    if let Some(v) = counter.as_mut() {
        *v += 1;
    }
    assert_eq!(counter, Some(2));
    assert_eq!(None::<i32>.as_ref(), None);
}

#[test]
fn test_bare_value_conversions() {
    let direct: Option<i32> = 5_i32.into();
    assert_eq!(direct, Some(5));

    assert_eq!(Option::<i64>::some_from(5_i32), Some(5_i64));
    assert_eq!(Option::<u8>::try_some_from(200_i32), Ok(Some(200_u8)));
    assert!(Option::<u8>::try_some_from(300_i32).is_err());
}

#[test]
fn test_cross_instantiation_conversions() {
    assert_eq!(Option::<i64>::convert_from(Some(5_i32)), Some(5_i64));
    assert_eq!(Option::<i64>::convert_from(None::<i32>), None);
    assert_eq!(Option::<String>::convert_from(Some("text")), Some(String::from("text")));

    assert_eq!(Option::<u8>::try_convert_from(Some(42_i32)), Ok(Some(42_u8)));
    assert!(Option::<u8>::try_convert_from(Some(300_i32)).is_err());
    assert_eq!(Option::<u8>::try_convert_from(None::<i32>), Ok(None));
}

#[test]
fn test_in_place_construction() {
    let built = Option::some_with(|| String::from("in place"));
    assert_eq!(built, Some(String::from("in place")));

    let listed = Option::<Vec<i32>>::some_from_iter([1, 2, 3]);
    assert_eq!(listed, Some(vec![1, 2, 3]));

    let text = Option::<String>::some_from_iter(['h', 'i']);
    assert_eq!(text.unwrap(), "hi");
}

#[test]
fn test_chaining_combinators() {
    let parse = |s: &str| -> Option<i32> { s.parse::<i32>().ok().into() };
    assert_eq!(Some("12").and_then(parse), Some(12));
    assert_eq!(Some("x").and_then(parse), None);

    assert_eq!(Some(4).filter(|v| v % 2 == 0), Some(4));
    assert_eq!(Some(3).filter(|v| v % 2 == 0), None);

    assert_eq!(None.or(Some(1)), Some(1));
    assert_eq!(Some(2).or(Some(1)), Some(2));
    assert_eq!(None::<i32>.or_else(|| Some(9)), Some(9));
}

#[test]
fn test_flatten_removes_one_level() {
    assert_eq!(Some(Some(3)).flatten(), Some(3));
    assert_eq!(Some(None::<i32>).flatten(), None);
    assert_eq!(None::<Option<i32>>.flatten(), None);
}

#[test]
fn test_ok_or_builds_result() {
    assert_eq!(Some(1).ok_or("missing"), Result::Ok(1));
    assert_eq!(None::<i32>.ok_or("missing"), Result::Err("missing"));

    let lazy = None::<i32>.ok_or_else(|| String::from("computed"));
    assert_eq!(lazy.unwrap_err(), "computed");
}

#[test]
fn test_std_interop() {
    let std_opt: std::option::Option<i32> = Some(3).into_std();
    assert_eq!(std_opt, std::option::Option::Some(3));

    let back: Option<i32> = std_opt.into();
    assert_eq!(back, Some(3));

    let missing: Option<i32> = std::option::Option::None.into();
    assert!(missing.is_none());
}
