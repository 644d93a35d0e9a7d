//! The Store - owner of application state
//!
//! The Store holds the current state value, applies dispatched actions
//! through its reducer, and notifies subscribed observers after every
//! committed transition. All reads go through cloned snapshots; the only
//! legal way to change state is [`Store::dispatch`].

use crate::error::StoreError;
use reflow_core::reducer::Reducer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

type ObserverFn = Arc<dyn Fn() + Send + Sync>;

/// Registered observers, in subscription order.
struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(u64, ObserverFn)>,
}

impl ObserverRegistry {
    const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    fn register(&mut self, observer: ObserverFn) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    fn deregister(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Configuration for a [`Store`]
///
/// # Example
///
/// ```
/// use reflow_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_name("packing-list");
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Name used in tracing output to tell stores apart
    name: String,
}

impl StoreConfig {
    /// Create a configuration with the default store name
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "store".to_string(),
        }
    }

    /// Set the store name used in tracing output
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The configured store name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) deregisters the
/// observer; after it returns the observer receives zero further
/// notifications. Dropping the handle without calling `unsubscribe` leaves
/// the observer registered for the lifetime of the store.
#[must_use = "dropping a Subscription without calling unsubscribe leaves the observer registered"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ObserverRegistry>>,
}

impl Subscription {
    /// Deregister the observer this subscription was created for
    ///
    /// Safe to call after the store has been dropped; it is a no-op then.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .deregister(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Clears the in-dispatch flag when the dispatch window ends, even if an
/// observer callback unwinds.
struct DispatchGuard<'a>(&'a AtomicBool);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (exclusively owned; callers read snapshots)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Observers (notified synchronously after each committed transition)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Lifecycle
///
/// A store is an explicitly constructed value: created once at application
/// start, passed by reference to whoever dispatches or observes, and torn
/// down by dropping it. There is no hidden process-wide instance.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(PackingState::new(), PackingReducer, env);
///
/// let sub = store.subscribe(|| println!("state changed"));
/// store.dispatch(PackingAction::AddItem {
///     description: "Passports".to_string(),
///     quantity: 2,
/// })?;
/// sub.unsubscribe();
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: RwLock<S>,
    reducer: R,
    environment: E,
    observers: Arc<Mutex<ObserverRegistry>>,
    /// Set for the whole dispatch window (reducer plus observer
    /// notifications). A dispatch that finds it set is reentrant.
    dispatching: AtomicBool,
    config: StoreConfig,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = StoreConfig::default().with_name("quiz");
    /// let store = Store::with_config(QuizState::new(questions), QuizReducer, (), config);
    /// ```
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        Self {
            state: RwLock::new(initial_state),
            reducer,
            environment,
            observers: Arc::new(Mutex::new(ObserverRegistry::new())),
            dispatching: AtomicBool::new(false),
            config,
        }
    }

    /// Read a projection of the current state
    ///
    /// The closure runs under the state read lock; keep it short and do not
    /// dispatch from inside it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state(|s| s.items.len());
    /// ```
    pub fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Return a snapshot of the current state
    ///
    /// This is `getState()`: a clone of the current value with no side
    /// effects. The snapshot is independent of the store; mutating it has no
    /// effect on held state.
    #[must_use]
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.state(Clone::clone)
    }

    /// Dispatch an action to the store
    ///
    /// Synchronously:
    /// 1. Runs the reducer over the current state under the write lock
    /// 2. Commits the resulting state
    /// 3. Notifies every subscribed observer, in subscription order, with no
    ///    arguments (observers re-read state via [`Store::state`] or
    ///    [`Store::snapshot`])
    ///
    /// All three steps complete before `dispatch` returns. An action the
    /// reducer does not recognize is an identity transition and still
    /// notifies observers: the dispatch committed, the value happened to be
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReentrantDispatch`] if called while another
    /// dispatch is still running on this store - from a reducer, from an
    /// observer callback, or from a second thread. Dispatches are exclusive;
    /// the execution model is cooperative and single-threaded.
    #[tracing::instrument(skip_all, fields(store = %self.config.name))]
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self
            .dispatching
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            tracing::error!("reentrant dispatch rejected");
            return Err(StoreError::ReentrantDispatch);
        }
        let _guard = DispatchGuard(&self.dispatching);

        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            self.reducer.reduce(&mut state, action, &self.environment);
        }
        tracing::debug!("transition committed");

        self.notify_observers();
        Ok(())
    }

    /// Register an observer invoked after every committed dispatch
    ///
    /// Observers are invoked in subscription order. The returned
    /// [`Subscription`] deregisters the observer via
    /// [`unsubscribe`](Subscription::unsubscribe).
    ///
    /// Subscribing from within an observer callback is allowed; the new
    /// observer starts receiving notifications from the next dispatch.
    pub fn subscribe(&self, observer: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .register(Arc::new(observer));
        tracing::debug!(observer_id = id, "observer subscribed");
        Subscription {
            id,
            registry: Arc::downgrade(&self.observers),
        }
    }

    /// Number of currently registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// The environment this store injects into its reducer
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Notify observers in subscription order.
    ///
    /// The registry lock is released between callbacks so observers may
    /// subscribe or unsubscribe; liveness is re-checked per observer so an
    /// observer unsubscribed mid-notification is skipped.
    fn notify_observers(&self) {
        let snapshot: Vec<(u64, ObserverFn)> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clone();

        for (id, observer) in snapshot {
            let still_registered = self
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(id);
            if still_registered {
                observer();
            }
        }
    }
}

impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.config.name)
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}
