//! # Reflow Core
//!
//! Core traits and types for the Reflow unidirectional state container.
//!
//! This crate provides the fundamental abstractions for building
//! reducer-driven application state: a pure transition function applied to
//! dispatched actions, with composition utilities for splitting a root state
//! into independent domain slices.
//!
//! ## Core Concepts
//!
//! - **State**: owned domain state for a feature
//! - **Action**: a closed sum type of every possible state transition
//! - **Reducer**: pure function `(State, Action, Environment) → State`
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: state changes only through dispatched actions
//! - Identity transitions: an unrecognized action leaves state untouched
//! - Dependency injection via Environment
//! - The store (in `reflow-runtime`) owns state; callers read snapshots
//!
//! ## Example
//!
//! ```
//! use reflow_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
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
//!             CounterAction::Reset => state.count = 0,
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

pub mod composition;
pub mod environment;
pub mod reducer;

pub use composition::{combine_reducers, scope_reducer};
pub use environment::{Clock, SystemClock};
pub use reducer::Reducer;
