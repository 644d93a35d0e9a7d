//! Domain types for the packing-list demo.
//!
//! A packing list is an ordered collection of items that can be added,
//! checked off, deleted one at a time, or cleared in one go. Insertion
//! order is preserved because it doubles as the default sort key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a packing-list item
///
/// Derived from the creation timestamp in milliseconds, bumped past the
/// previous id when two creations land in the same millisecond, so ids are
/// unique and strictly increasing in creation order.
pub type ItemId = i64;

/// A single item on the packing list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, monotonically increasing identifier
    pub id: ItemId,
    /// What to pack
    pub description: String,
    /// How many to pack; always positive
    pub quantity: u32,
    /// Whether the item has been packed
    pub packed: bool,
    /// When the item was added to the list
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new unpacked item
    #[must_use]
    pub const fn new(
        id: ItemId,
        description: String,
        quantity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
            created_at,
        }
    }

    /// Flips the packed flag
    pub const fn toggle(&mut self) {
        self.packed = !self.packed;
    }
}

/// State of the packing list
///
/// Items are kept in insertion order; the list only ever grows at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingState {
    /// All items, oldest first
    pub items: Vec<Item>,
    /// Last validation error (if any)
    pub last_error: Option<String>,
}

impl PackingState {
    /// Creates a new empty packing list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            last_error: None,
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of packed items
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.packed).count()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks whether an item exists
    #[must_use]
    pub fn exists(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions over the packing list
///
/// A closed sum type: every possible transition is a variant carrying
/// exactly the fields its transition needs, so there is no malformed-payload
/// case to handle at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingAction {
    /// Append a new unpacked item to the end of the list
    AddItem {
        /// What to pack
        description: String,
        /// How many to pack; must be positive
        quantity: u32,
    },

    /// Remove the item with the given id; no-op when absent
    DeleteItem {
        /// Item to remove
        id: ItemId,
    },

    /// Flip the packed flag of the item with the given id; no-op when absent
    ToggleItem {
        /// Item to toggle
        id: ItemId,
    },

    /// Replace the collection with the empty list
    ///
    /// Destructive; the caller is expected to have obtained confirmation
    /// before dispatching (see [`crate::boundary::request_clear`]). The
    /// reducer itself has no concept of confirmation.
    ClearAll,
}
