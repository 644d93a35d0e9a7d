//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a slice of a larger state
//!
//! Together they express the classic root-reducer construction: a root state
//! split into independent domain slices, each owned by its own reducer that
//! sees only its slice and treats every action it does not recognize as an
//! identity transition.
//!
//! # Examples
//!
//! ```
//! use reflow_core::Reducer;
//! use reflow_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     counter: CounterState,
//!     visits: u64,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//!     Visit,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: AppAction, _env: &()) {
//!         if matches!(action, AppAction::Increment) {
//!             state.count += 1;
//!         }
//!     }
//! }
//!
//! struct VisitReducer;
//!
//! impl Reducer for VisitReducer {
//!     type State = AppState;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut AppState, action: AppAction, _env: &()) {
//!         if matches!(action, AppAction::Visit) {
//!             state.visits += 1;
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |app: &AppState| &app.counter,
//!         |app: &mut AppState, counter| app.counter = counter,
//!     )),
//!     Box::new(VisitReducer),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Increment, &());
//! assert_eq!(state.counter.count, 1);
//! assert_eq!(state.visits, 0);
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence over the shared state. A reducer that does
/// not recognize the action leaves its part of the state unchanged, so the
/// combination behaves as the pointwise application of every member.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a slice of a larger state.
///
/// This allows a reducer written against a domain slice to participate in a
/// root reducer over the whole application state. The scoped reducer only
/// ever sees its own slice; the rest of the parent state is invisible to it.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The slice type owned by the inner reducer
/// - `A`: The action type
/// - `E`: The environment type
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        // Extract the slice, run the inner reducer, write the slice back
        let mut sub_state = (self.get_state)(state).clone();
        self.reducer.reduce(&mut sub_state, action, env);
        (self.set_state)(state, sub_state);
    }
}
