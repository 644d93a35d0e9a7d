//! Observer probe for subscription tests
//!
//! Counting notifications by hand in every test gets noisy; the probe wraps
//! the `Arc<AtomicUsize>` pattern behind a small API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how often a store notified it
///
/// # Example
///
/// ```
/// use reflow_core::Reducer;
/// use reflow_runtime::Store;
/// use reflow_testing::ObserverProbe;
///
/// struct Bump;
///
/// impl Reducer for Bump {
///     type State = u32;
///     type Action = ();
///     type Environment = ();
///
///     fn reduce(&self, state: &mut u32, _action: (), _env: &()) {
///         *state += 1;
///     }
/// }
///
/// # fn main() -> Result<(), reflow_runtime::StoreError> {
/// let store = Store::new(0, Bump, ());
/// let probe = ObserverProbe::new();
/// let sub = store.subscribe(probe.callback());
///
/// store.dispatch(())?;
/// assert_eq!(probe.notifications(), 1);
///
/// // An unsubscribed probe receives nothing further
/// sub.unsubscribe();
/// store.dispatch(())?;
/// assert_eq!(probe.notifications(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObserverProbe {
    count: Arc<AtomicUsize>,
}

impl ObserverProbe {
    /// Create a probe with zero recorded notifications
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback to pass to `Store::subscribe`
    #[must_use]
    pub fn callback(&self) -> impl Fn() + Send + Sync + 'static {
        let count = Arc::clone(&self.count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Number of notifications received so far
    #[must_use]
    pub fn notifications(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
