//! Banking demo: two independent domain slices behind one store.
//!
//! This crate demonstrates reducer composition: the root reducer is the
//! pointwise combination of an account reducer and a customer reducer, each
//! scoped onto its own slice of [`BankState`]. Every dispatched action
//! reaches both; each slice reducer applies the variants it recognizes and
//! leaves its slice untouched for the rest.
//!
//! # Example
//!
//! ```
//! use banking::{BankAction, BankEnvironment, BankState, bank_reducer};
//! use reflow_core::environment::SystemClock;
//! use reflow_runtime::Store;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), reflow_runtime::StoreError> {
//! let env = BankEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(BankState::default(), bank_reducer(), env);
//!
//! store.dispatch(BankAction::CreateCustomer {
//!     full_name: "Ada Lovelace".to_string(),
//!     national_id: "18151210".to_string(),
//! })?;
//! store.dispatch(BankAction::Deposit(300))?;
//!
//! assert_eq!(store.state(|s| s.account.balance), 300);
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod customer;
pub mod types;

// Re-export commonly used types
pub use account::{AccountReducer, AccountState};
pub use customer::{CustomerReducer, CustomerState};
pub use types::{BankAction, BankState};

use reflow_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use reflow_core::environment::Clock;
use reflow_runtime::Store;
use std::sync::Arc;

/// Environment shared by both slice reducers
#[derive(Clone)]
pub struct BankEnvironment {
    /// Clock used to stamp customer creation
    pub clock: Arc<dyn Clock>,
}

impl BankEnvironment {
    /// Creates a new `BankEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// The root reducer type for the banking demo
pub type BankReducer = CombinedReducer<BankState, BankAction, BankEnvironment>;

/// The store type the banking demo runs on
pub type BankStore = Store<BankState, BankAction, BankEnvironment, BankReducer>;

/// Builds the root reducer: account and customer reducers, each scoped onto
/// its own slice, combined pointwise
#[must_use]
pub fn bank_reducer() -> BankReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            AccountReducer,
            |bank: &BankState| &bank.account,
            |bank: &mut BankState, account| bank.account = account,
        )),
        Box::new(scope_reducer(
            CustomerReducer,
            |bank: &BankState| &bank.customer,
            |bank: &mut BankState, customer| bank.customer = customer,
        )),
    ])
}
