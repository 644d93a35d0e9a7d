//! Pure projections over the packing list.
//!
//! Projections are computed on read and never stored: sort selection is a
//! transient, caller-local choice, and the stats are a direct function of
//! the current items. Nothing here mutates or captures state.

use crate::types::Item;

/// Orderings available for displaying the list
///
/// The choice lives at the call site, not in the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order (the identity projection)
    #[default]
    Input,
    /// Lexicographic by description
    Description,
    /// Unpacked items first, packed last
    Packed,
}

/// Returns the items in the requested order
///
/// Always a fresh `Vec`; the input slice is never reordered. The sort is
/// stable, so items equal under the sort key keep their insertion order.
#[must_use]
pub fn sorted(items: &[Item], order: SortOrder) -> Vec<Item> {
    let mut view: Vec<Item> = items.to_vec();
    match order {
        SortOrder::Input => {}
        SortOrder::Description => {
            view.sort_by(|a, b| a.description.cmp(&b.description));
        }
        SortOrder::Packed => {
            view.sort_by_key(|item| item.packed);
        }
    }
    view
}

/// Summary of packing progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Total number of items on the list
    pub total: usize,
    /// Number of packed items
    pub packed: usize,
    /// Packed share in whole percent, rounded half-up; 0 for an empty list
    pub percentage: u32,
}

/// Computes packing progress for the given items
#[must_use]
pub fn stats(items: &[Item]) -> Stats {
    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    let percentage = if total == 0 {
        0
    } else {
        // Round to the nearest whole percent
        u32::try_from((packed * 200 + total) / (total * 2)).unwrap_or(100)
    };

    Stats {
        total,
        packed,
        percentage,
    }
}
