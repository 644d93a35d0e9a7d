//! End-to-end tests for the packing list on a live store, plus property
//! tests for the collection invariants.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use packing_list::projections::{self, SortOrder};
use packing_list::{
    PackingAction, PackingEnvironment, PackingReducer, PackingState, PackingStore, request_clear,
};
use proptest::prelude::*;
use reflow_core::environment::SystemClock;
use reflow_runtime::Store;
use reflow_testing::ObserverProbe;
use std::sync::Arc;

fn new_store() -> PackingStore {
    let env = PackingEnvironment::new(Arc::new(SystemClock));
    Store::new(PackingState::new(), PackingReducer::new(), env)
}

fn add(description: &str, quantity: u32) -> PackingAction {
    PackingAction::AddItem {
        description: description.to_string(),
        quantity,
    }
}

#[test]
fn packing_walkthrough() {
    // The worked example: two items, pack the first
    let store = new_store();

    store.dispatch(add("Passports", 2)).unwrap();
    store.dispatch(add("Socks", 12)).unwrap();

    let first_id = store.state(|s| s.items[0].id);
    store.dispatch(PackingAction::ToggleItem { id: first_id }).unwrap();

    let state = store.snapshot();
    assert_eq!(state.count(), 2);
    assert!(state.items[0].packed);
    assert!(!state.items[1].packed);
    assert_eq!(state.items[0].description, "Passports");
    assert_eq!(state.items[1].description, "Socks");

    let stats = projections::stats(&state.items);
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percentage, 50);
}

#[test]
fn observers_see_every_committed_transition() {
    let store = new_store();
    let probe = ObserverProbe::new();
    let sub = store.subscribe(probe.callback());

    store.dispatch(add("Passports", 2)).unwrap();
    store.dispatch(add("Socks", 12)).unwrap();
    // A rejected add is still a committed (identity) dispatch
    store.dispatch(add("", 1)).unwrap();
    assert_eq!(probe.notifications(), 3);

    sub.unsubscribe();
    store.dispatch(PackingAction::ClearAll).unwrap();
    assert_eq!(probe.notifications(), 3);
}

#[test]
fn clear_finality() {
    let store = new_store();
    store.dispatch(add("Passports", 2)).unwrap();
    store.dispatch(add("Socks", 12)).unwrap();

    assert!(request_clear(&store, true).unwrap());
    assert_eq!(store.state(PackingState::count), 0);

    store.dispatch(add("Charger", 1)).unwrap();
    assert_eq!(store.state(PackingState::count), 1);
}

#[test]
fn sort_selection_never_touches_store_state() {
    let store = new_store();
    store.dispatch(add("Socks", 12)).unwrap();
    store.dispatch(add("Charger", 1)).unwrap();

    let before = store.snapshot();
    let by_description = store.state(|s| projections::sorted(&s.items, SortOrder::Description));

    assert_eq!(by_description[0].description, "Charger");
    assert_eq!(store.snapshot(), before);
}

#[test]
fn ids_stay_monotonic_across_rapid_adds() {
    let store = new_store();
    for i in 0..50 {
        store.dispatch(add(&format!("Item {i}"), 1)).unwrap();
    }

    let ids = store.state(|s| s.items.iter().map(|item| item.id).collect::<Vec<_>>());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

proptest! {
    /// Input-order projection equals the add order, whatever toggling
    /// happened in between.
    #[test]
    fn append_order_survives_toggles(
        descriptions in prop::collection::vec(description_strategy(), 1..10),
        toggle_picks in prop::collection::vec(0usize..10, 0..20),
    ) {
        let store = new_store();
        for description in &descriptions {
            store.dispatch(add(description, 1)).unwrap();
        }

        let ids = store.state(|s| s.items.iter().map(|item| item.id).collect::<Vec<_>>());
        for pick in toggle_picks {
            if let Some(&id) = ids.get(pick) {
                store.dispatch(PackingAction::ToggleItem { id }).unwrap();
            }
        }

        let in_order = store.state(|s| projections::sorted(&s.items, SortOrder::Input));
        let seen: Vec<_> = in_order.iter().map(|item| item.description.clone()).collect();
        prop_assert_eq!(seen, descriptions);
    }

    /// Deleting an id that is not on the list leaves the state structurally
    /// equal to its prior value.
    #[test]
    fn deletion_of_absent_id_is_a_noop(
        descriptions in prop::collection::vec(description_strategy(), 0..6),
        absent_id in i64::MIN..0,
    ) {
        let store = new_store();
        for description in &descriptions {
            store.dispatch(add(description, 1)).unwrap();
        }

        // Real ids are positive timestamps, so a negative id is never present
        let before = store.snapshot();
        store.dispatch(PackingAction::DeleteItem { id: absent_id }).unwrap();
        prop_assert_eq!(store.snapshot(), before);
    }

    /// Toggling the same id twice returns the state to its prior value.
    #[test]
    fn toggle_twice_is_identity(
        descriptions in prop::collection::vec(description_strategy(), 1..6),
        pick in 0usize..6,
    ) {
        let store = new_store();
        for description in &descriptions {
            store.dispatch(add(description, 1)).unwrap();
        }

        let pick = pick % descriptions.len();
        let id = store.state(|s| s.items[pick].id);

        let before = store.snapshot();
        store.dispatch(PackingAction::ToggleItem { id }).unwrap();
        store.dispatch(PackingAction::ToggleItem { id }).unwrap();
        prop_assert_eq!(store.snapshot(), before);
    }

    /// Stats always agree with the raw collection.
    #[test]
    fn stats_match_collection(
        descriptions in prop::collection::vec(description_strategy(), 0..10),
        toggle_picks in prop::collection::vec(0usize..10, 0..10),
    ) {
        let store = new_store();
        for description in &descriptions {
            store.dispatch(add(description, 1)).unwrap();
        }
        let ids = store.state(|s| s.items.iter().map(|item| item.id).collect::<Vec<_>>());
        for pick in toggle_picks {
            if let Some(&id) = ids.get(pick) {
                store.dispatch(PackingAction::ToggleItem { id }).unwrap();
            }
        }

        let state = store.snapshot();
        let stats = projections::stats(&state.items);
        prop_assert_eq!(stats.total, state.count());
        prop_assert_eq!(stats.packed, state.packed_count());
        prop_assert!(stats.percentage <= 100);
    }
}
