//! Reducer logic for the packing list.
//!
//! Validate, then apply: a transition that cannot be applied (empty
//! description, zero quantity) leaves the collection unchanged and records
//! the reason in `last_error`; absent ids are silent identity transitions.

use crate::types::{Item, ItemId, PackingAction, PackingState};
use reflow_core::{environment::Clock, reducer::Reducer};
use std::sync::Arc;

/// Longest accepted item description
const MAX_DESCRIPTION_LEN: usize = 500;

/// Environment dependencies for the packing-list reducer
#[derive(Clone)]
pub struct PackingEnvironment {
    /// Clock used to derive item ids from the creation timestamp
    pub clock: Arc<dyn Clock>,
}

impl PackingEnvironment {
    /// Creates a new `PackingEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the packing list
#[derive(Clone, Debug)]
pub struct PackingReducer;

impl PackingReducer {
    /// Creates a new `PackingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddItem` command
    fn validate_add_item(description: &str, quantity: u32) -> Result<(), String> {
        if description.trim().is_empty() {
            return Err("Item description cannot be empty".to_string());
        }

        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Item description too long (max {MAX_DESCRIPTION_LEN} characters)"
            ));
        }

        if quantity == 0 {
            return Err("Item quantity must be positive".to_string());
        }

        Ok(())
    }

    /// Next item id: the creation timestamp in milliseconds, bumped past the
    /// previous id when two creations land in the same millisecond.
    ///
    /// The list is append-only, so the last item always carries the largest
    /// id and monotonicity only needs one comparison.
    fn next_id(state: &PackingState, env: &PackingEnvironment) -> ItemId {
        let stamped = env.clock.now().timestamp_millis();
        match state.items.last() {
            Some(last) if stamped <= last.id => last.id + 1,
            _ => stamped,
        }
    }
}

impl Default for PackingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for PackingReducer {
    type State = PackingState;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(&self, state: &mut PackingState, action: PackingAction, env: &PackingEnvironment) {
        match action {
            PackingAction::AddItem {
                description,
                quantity,
            } => match Self::validate_add_item(&description, quantity) {
                Ok(()) => {
                    let id = Self::next_id(state, env);
                    let item = Item::new(id, description, quantity, env.clock.now());
                    tracing::debug!(id, "item added");
                    state.items.push(item);
                    state.last_error = None;
                }
                Err(error) => {
                    tracing::debug!(%error, "add item rejected");
                    state.last_error = Some(error);
                }
            },

            PackingAction::DeleteItem { id } => {
                // Absent id: identity transition, state untouched
                if state.exists(id) {
                    state.items.retain(|item| item.id != id);
                    state.last_error = None;
                }
            }

            PackingAction::ToggleItem { id } => {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.toggle();
                    state.last_error = None;
                }
            }

            PackingAction::ClearAll => {
                state.items.clear();
                state.last_error = None;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct StoppedClock;

    impl Clock for StoppedClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap()
        }
    }

    fn test_env() -> PackingEnvironment {
        PackingEnvironment::new(Arc::new(StoppedClock))
    }

    fn add(description: &str, quantity: u32) -> PackingAction {
        PackingAction::AddItem {
            description: description.to_string(),
            quantity,
        }
    }

    fn apply(state: &mut PackingState, action: PackingAction) {
        PackingReducer::new().reduce(state, action, &test_env());
    }

    #[test]
    fn add_item_appends_unpacked() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));

        assert_eq!(state.count(), 1);
        assert_eq!(state.items[0].description, "Passports");
        assert_eq!(state.items[0].quantity, 2);
        assert!(!state.items[0].packed);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn ids_are_unique_and_monotonic_within_one_millisecond() {
        // The stopped clock returns the same instant for every call
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        apply(&mut state, add("Socks", 12));
        apply(&mut state, add("Charger", 1));

        let ids: Vec<_> = state.items.iter().map(|item| item.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn add_item_rejects_empty_description() {
        let mut state = PackingState::new();
        apply(&mut state, add("   ", 1));

        assert_eq!(state.count(), 0);
        assert!(state.last_error.as_ref().unwrap().contains("cannot be empty"));
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let mut state = PackingState::new();
        apply(&mut state, add("Socks", 0));

        assert_eq!(state.count(), 0);
        assert!(state.last_error.as_ref().unwrap().contains("must be positive"));
    }

    #[test]
    fn add_item_rejects_oversized_description() {
        let mut state = PackingState::new();
        apply(&mut state, add(&"x".repeat(501), 1));

        assert_eq!(state.count(), 0);
        assert!(state.last_error.as_ref().unwrap().contains("too long"));
    }

    #[test]
    fn successful_transition_clears_last_error() {
        let mut state = PackingState::new();
        apply(&mut state, add("", 1));
        assert!(state.last_error.is_some());

        apply(&mut state, add("Socks", 12));
        assert!(state.last_error.is_none());
    }

    #[test]
    fn delete_item_removes_matching_id() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        apply(&mut state, add("Socks", 12));
        let id = state.items[0].id;

        apply(&mut state, PackingAction::DeleteItem { id });
        assert_eq!(state.count(), 1);
        assert!(!state.exists(id));
    }

    #[test]
    fn delete_absent_id_is_identity() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        let before = state.clone();

        apply(&mut state, PackingAction::DeleteItem { id: 9999 });
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        let id = state.items[0].id;
        let before = state.clone();

        apply(&mut state, PackingAction::ToggleItem { id });
        assert!(state.items[0].packed);

        apply(&mut state, PackingAction::ToggleItem { id });
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_absent_id_is_identity() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        let before = state.clone();

        apply(&mut state, PackingAction::ToggleItem { id: 9999 });
        assert_eq!(state, before);
    }

    #[test]
    fn clear_all_empties_the_list() {
        let mut state = PackingState::new();
        apply(&mut state, add("Passports", 2));
        apply(&mut state, add("Socks", 12));

        apply(&mut state, PackingAction::ClearAll);
        assert_eq!(state.count(), 0);

        // The list keeps working after a clear
        apply(&mut state, add("Charger", 1));
        assert_eq!(state.count(), 1);
    }
}
