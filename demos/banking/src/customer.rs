//! Customer slice: who owns the account.

use crate::types::BankAction;
use chrono::{DateTime, Utc};
use reflow_core::Reducer;
use serde::{Deserialize, Serialize};

/// State of the customer slice
///
/// Empty until a `CreateCustomer` action arrives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerState {
    /// Full name of the customer
    pub full_name: Option<String>,
    /// National identification number
    pub national_id: Option<String>,
    /// When the customer record was created
    pub created_at: Option<DateTime<Utc>>,
    /// Last rejected operation (if any)
    pub last_error: Option<String>,
}

impl CustomerState {
    /// Whether a customer record exists yet
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.created_at.is_some()
    }
}

/// Reducer for the customer slice
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomerReducer;

impl Reducer for CustomerReducer {
    type State = CustomerState;
    type Action = BankAction;
    type Environment = crate::BankEnvironment;

    fn reduce(&self, state: &mut CustomerState, action: BankAction, env: &Self::Environment) {
        match action {
            BankAction::CreateCustomer {
                full_name,
                national_id,
            } => {
                if state.exists() {
                    state.last_error = Some("Customer already exists".to_string());
                } else if full_name.trim().is_empty() {
                    state.last_error = Some("Customer name cannot be empty".to_string());
                } else {
                    state.full_name = Some(full_name);
                    state.national_id = Some(national_id);
                    state.created_at = Some(env.clock.now());
                    state.last_error = None;
                }
            }

            BankAction::UpdateName(full_name) => {
                // No record yet: identity
                if state.exists() {
                    if full_name.trim().is_empty() {
                        state.last_error = Some("Customer name cannot be empty".to_string());
                    } else {
                        state.full_name = Some(full_name);
                        state.last_error = None;
                    }
                }
            }

            // Account operations: not this slice's concern
            BankAction::Deposit(_)
            | BankAction::Withdraw(_)
            | BankAction::RequestLoan { .. }
            | BankAction::PayLoan => {}
        }
    }
}
