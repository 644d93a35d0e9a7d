//! Shared action and root-state types for the banking demo.

use crate::account::AccountState;
use crate::customer::CustomerState;
use serde::{Deserialize, Serialize};

/// Root state: two independent domain slices
///
/// No invariant spans the slices; each is owned by its own reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankState {
    /// The account slice
    pub account: AccountState,
    /// The customer slice
    pub customer: CustomerState,
}

/// Every action in the banking demo
///
/// Both slice reducers receive every action; each handles its own variants
/// and treats the rest as identity transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankAction {
    /// Put money into the account
    Deposit(u64),
    /// Take money out of the account; rejected on insufficient balance
    Withdraw(u64),
    /// Take out a loan; one loan at a time
    RequestLoan {
        /// Loan amount, credited to the balance
        amount: u64,
        /// What the loan is for
        purpose: String,
    },
    /// Pay back the outstanding loan in full
    PayLoan,
    /// Create the customer record
    CreateCustomer {
        /// Full name of the customer
        full_name: String,
        /// National identification number
        national_id: String,
    },
    /// Rename the existing customer
    UpdateName(String),
}
