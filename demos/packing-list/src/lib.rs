//! Packing-list demo: the travel checklist domain on top of Reflow.
//!
//! This crate demonstrates the full unidirectional loop:
//!
//! - An ordered item collection mutated only through dispatched actions
//! - Validation that absorbs bad input as identity transitions
//! - Monotonic item ids derived from the injected clock
//! - Pure read-side projections (sort orders, packing stats)
//! - A confirmation-gated destructive action kept out of the store
//!
//! # Quick Start
//!
//! ```
//! use packing_list::{PackingAction, PackingEnvironment, PackingReducer, PackingState};
//! use packing_list::projections::{self, SortOrder};
//! use reflow_core::environment::SystemClock;
//! use reflow_runtime::Store;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), reflow_runtime::StoreError> {
//! let env = PackingEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(PackingState::new(), PackingReducer::new(), env);
//!
//! store.dispatch(PackingAction::AddItem {
//!     description: "Passports".to_string(),
//!     quantity: 2,
//! })?;
//!
//! let stats = store.state(|s| projections::stats(&s.items));
//! assert_eq!(stats.total, 1);
//! # Ok(())
//! # }
//! ```

pub mod boundary;
pub mod projections;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use boundary::request_clear;
pub use reducer::{PackingEnvironment, PackingReducer};
pub use types::{Item, ItemId, PackingAction, PackingState};

use reflow_runtime::Store;

/// The store type the packing-list demo runs on
pub type PackingStore = Store<PackingState, PackingAction, PackingEnvironment, PackingReducer>;
