//! # Reflow Runtime
//!
//! Runtime implementation for the Reflow unidirectional state container.
//!
//! This crate provides the [`Store`]: the exclusive owner of application
//! state, mutated only by dispatching actions through a pure reducer and
//! observed through subscriptions and read-only snapshots.
//!
//! ## Core Components
//!
//! - **Store**: holds current state, applies transitions, notifies observers
//! - **Subscription**: handle returned by `subscribe`, deregisters on demand
//! - **`StoreConfig`**: construction-time configuration
//!
//! ## Execution Model
//!
//! Everything is synchronous and cooperative: `dispatch` runs the reducer
//! and every observer callback to completion before returning, and a second
//! dispatch started inside that window (from a reducer or an observer) is
//! rejected with [`StoreError::ReentrantDispatch`]. There is no queuing and
//! no background work.
//!
//! ## Example
//!
//! ```
//! use reflow_core::Reducer;
//! use reflow_runtime::Store;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), reflow_runtime::error::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer, ());
//! store.dispatch(CounterAction::Increment)?;
//! assert_eq!(store.state(|s| s.count), 1);
//! # Ok(())
//! # }
//! ```

pub mod store;

pub use store::{Store, StoreConfig, Subscription};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Unknown action kinds and absent ids are not errors: they are identity
    /// transitions absorbed by the reducer. The only failure the store itself
    /// reports is a violation of the dispatch discipline.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[non_exhaustive]
    pub enum StoreError {
        /// `dispatch` was called while another dispatch was still running
        ///
        /// This happens when a reducer or an observer callback dispatches
        /// back into the store. It is a programmer error in the calling
        /// code, not a recoverable runtime condition: the offending action
        /// is discarded and state is left as the in-flight dispatch leaves
        /// it.
        #[error("reentrant dispatch: an action was dispatched from within a running dispatch")]
        ReentrantDispatch,
    }
}

pub use error::StoreError;
