//! Integration tests for the list contract
//! Checks the typed API and the sentinel facade agree on every operation

use intlist_core::{IntList, ListError, compat};
use proptest::prelude::*;

#[test]
fn test_typed_and_facade_round_trip_agree() {
    let mut typed = IntList::new();
    typed.push_back(1).unwrap();
    typed.push_back(2).unwrap();
    typed.push_front(0).unwrap();

    let mut legacy = compat::create().unwrap();
    compat::push_back(Some(&mut legacy), 1);
    compat::push_back(Some(&mut legacy), 2);
    compat::push_front(Some(&mut legacy), 0);

    assert_eq!(typed, legacy);
    assert_eq!(typed.remove_front(), Ok(0));
    assert_eq!(compat::remove_front(Some(&mut legacy)), 0);
    assert_eq!(typed.remove_back(), Ok(2));
    assert_eq!(compat::remove_back(Some(&mut legacy)), 2);
    assert_eq!(compat::to_display_string(Some(&legacy)), "[1]");
    assert_eq!(typed.to_display_string(), "[1]");
}

#[test]
fn test_insert_at_len_equals_push_back() {
    let mut by_insert = IntList::try_from_iter([4, 5, 6]).unwrap();
    let mut by_push = by_insert.clone();

    by_insert.insert_at(7, 3).unwrap();
    by_push.push_back(7).unwrap();
    assert_eq!(by_insert, by_push);
}

#[test]
fn test_errors_are_distinct_from_stored_values() {
    let mut list = IntList::try_from_iter([-1]).unwrap();
    assert_eq!(list.remove_at(0), Ok(-1));
    assert_eq!(list.remove_at(0), Err(ListError::Empty));
}

#[test]
fn test_destroy_balances_allocations() {
    let mut list = compat::create().unwrap();
    for value in 0..50 {
        compat::insert_at(Some(&mut list), value, i64::from(value) / 2);
    }
    for index in (0..50).step_by(3) {
        let _ = compat::remove_at(Some(&mut list), index);
    }

    let before = list.stats();
    assert_eq!(before.allocations, 50);
    assert_eq!(before.allocations, before.releases + before.live as u64);

    let after = list.into_stats();
    assert_eq!(after.live, 0);
    assert_eq!(after.allocations, after.releases);
}

proptest! {
    #[test]
    fn prop_insert_past_len_clamps(values in prop::collection::vec(any::<i32>(), 0..16), extra in 1..100usize, value in any::<i32>()) {
        let mut clamped = IntList::try_from_iter(values.iter().copied()).unwrap();
        let mut pushed = clamped.clone();

        let insertion = clamped.insert_at(value, values.len() + extra).unwrap();
        pushed.push_back(value).unwrap();

        prop_assert!(insertion.clamped());
        prop_assert_eq!(insertion.index, values.len());
        prop_assert_eq!(clamped, pushed);
    }

    #[test]
    fn prop_facade_sentinel_matches_typed_errors(values in prop::collection::vec(0..100i32, 0..8), index in -3i64..12) {
        let mut typed = IntList::try_from_iter(values.iter().copied()).unwrap();
        let mut legacy = typed.clone();

        let expected = usize::try_from(index)
            .ok()
            .and_then(|i| typed.remove_at(i).ok())
            .unwrap_or(compat::SENTINEL);
        prop_assert_eq!(compat::remove_at(Some(&mut legacy), index), expected);
        prop_assert_eq!(typed, legacy);
    }
}
