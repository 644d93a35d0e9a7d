//! The Reducer trait - core abstraction for state transitions
//!
//! Reducers are pure functions: `(State, Action, Environment) → State`.
//! They contain all business logic and are deterministic and testable.

/// The Reducer trait - core abstraction for state transitions
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
///
/// # Contract
///
/// `reduce` must be a pure transition: given the same state, action, and
/// environment observations it always produces the same next state, and it
/// performs no I/O. An action the reducer does not recognize is an identity
/// transition: the state must be left untouched. A reducer must never panic
/// and must never dispatch back into the store that invoked it.
///
/// State is mutated in place behind the store's exclusive lock; callers of
/// the store only ever observe cloned snapshots, so from the outside every
/// committed transition behaves as a fresh state value.
///
/// # Example
///
/// ```
/// use reflow_core::reducer::Reducer;
///
/// #[derive(Clone, Default)]
/// struct Tally {
///     score: u32,
/// }
///
/// #[derive(Clone)]
/// enum TallyAction {
///     Add(u32),
/// }
///
/// struct TallyReducer;
///
/// impl Reducer for TallyReducer {
///     type State = Tally;
///     type Action = TallyAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Tally, action: TallyAction, _env: &()) {
///         match action {
///             TallyAction::Add(n) => state.score += n,
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Apply an action to the state
    ///
    /// # Arguments
    ///
    /// - `state`: Mutable reference to current state
    /// - `action`: The action to process
    /// - `env`: Reference to injected dependencies
    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
}
