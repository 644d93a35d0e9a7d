//! Account slice: balance and a single outstanding loan.

use crate::types::BankAction;
use reflow_core::Reducer;
use serde::{Deserialize, Serialize};

/// State of the account slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Current balance
    pub balance: u64,
    /// Outstanding loan amount; zero when no loan is active
    pub loan: u64,
    /// What the active loan was taken for
    pub loan_purpose: Option<String>,
    /// Last rejected operation (if any)
    pub last_error: Option<String>,
}

/// Reducer for the account slice
///
/// Sees every dispatched action and ignores everything that is not an
/// account operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountReducer;

impl Reducer for AccountReducer {
    type State = AccountState;
    type Action = BankAction;
    type Environment = crate::BankEnvironment;

    fn reduce(&self, state: &mut AccountState, action: BankAction, _env: &Self::Environment) {
        match action {
            BankAction::Deposit(amount) => match state.balance.checked_add(amount) {
                Some(balance) => {
                    state.balance = balance;
                    state.last_error = None;
                }
                None => {
                    state.last_error =
                        Some(format!("Cannot deposit {amount}: balance would overflow"));
                }
            },

            BankAction::Withdraw(amount) => {
                if amount > state.balance {
                    state.last_error = Some(format!(
                        "Cannot withdraw {amount}: balance is {}",
                        state.balance
                    ));
                } else {
                    state.balance -= amount;
                    state.last_error = None;
                }
            }

            BankAction::RequestLoan { amount, purpose } => {
                if state.loan > 0 {
                    state.last_error = Some("A loan is already outstanding".to_string());
                } else {
                    match state.balance.checked_add(amount) {
                        Some(balance) => {
                            state.loan = amount;
                            state.loan_purpose = Some(purpose);
                            state.balance = balance;
                            state.last_error = None;
                        }
                        None => {
                            state.last_error = Some(format!(
                                "Cannot take a loan of {amount}: balance would overflow"
                            ));
                        }
                    }
                }
            }

            BankAction::PayLoan => {
                if state.loan == 0 {
                    // No loan to pay back: identity
                } else if state.loan > state.balance {
                    state.last_error = Some("Balance too low to pay back the loan".to_string());
                } else {
                    state.balance -= state.loan;
                    state.loan = 0;
                    state.loan_purpose = None;
                    state.last_error = None;
                }
            }

            // Customer operations: not this slice's concern
            BankAction::CreateCustomer { .. } | BankAction::UpdateName(_) => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use crate::BankEnvironment;
    use reflow_core::environment::SystemClock;
    use std::sync::Arc;

    fn apply(state: &mut AccountState, action: BankAction) {
        let env = BankEnvironment::new(Arc::new(SystemClock));
        AccountReducer.reduce(state, action, &env);
    }

    #[test]
    fn deposit_and_withdraw() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(300));
        apply(&mut state, BankAction::Withdraw(100));
        assert_eq!(state.balance, 200);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn overdraft_is_rejected() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(50));
        apply(&mut state, BankAction::Withdraw(100));

        assert_eq!(state.balance, 50);
        assert!(state.last_error.as_ref().unwrap().contains("Cannot withdraw"));
    }

    #[test]
    fn loan_lifecycle() {
        let mut state = AccountState::default();
        apply(
            &mut state,
            BankAction::RequestLoan {
                amount: 1000,
                purpose: "Buy a car".to_string(),
            },
        );
        assert_eq!(state.balance, 1000);
        assert_eq!(state.loan, 1000);
        assert_eq!(state.loan_purpose.as_deref(), Some("Buy a car"));

        apply(&mut state, BankAction::PayLoan);
        assert_eq!(state.balance, 0);
        assert_eq!(state.loan, 0);
        assert_eq!(state.loan_purpose, None);
    }

    #[test]
    fn second_loan_is_rejected_while_one_is_outstanding() {
        let mut state = AccountState::default();
        apply(
            &mut state,
            BankAction::RequestLoan {
                amount: 1000,
                purpose: "Buy a car".to_string(),
            },
        );
        apply(
            &mut state,
            BankAction::RequestLoan {
                amount: 500,
                purpose: "Holiday".to_string(),
            },
        );

        assert_eq!(state.loan, 1000);
        assert!(state.last_error.as_ref().unwrap().contains("already outstanding"));
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(u64::MAX));
        apply(&mut state, BankAction::Deposit(1));

        assert_eq!(state.balance, u64::MAX);
        assert!(state.last_error.as_ref().unwrap().contains("overflow"));
    }

    #[test]
    fn overflowing_loan_is_rejected() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(u64::MAX));
        apply(
            &mut state,
            BankAction::RequestLoan {
                amount: 1,
                purpose: "Buy a car".to_string(),
            },
        );

        assert_eq!(state.balance, u64::MAX);
        assert_eq!(state.loan, 0);
        assert_eq!(state.loan_purpose, None);
        assert!(state.last_error.as_ref().unwrap().contains("overflow"));
    }

    #[test]
    fn pay_loan_without_loan_is_identity() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(100));
        let before = state.clone();
        apply(&mut state, BankAction::PayLoan);
        assert_eq!(state, before);
    }

    #[test]
    fn customer_actions_are_ignored() {
        let mut state = AccountState::default();
        apply(&mut state, BankAction::Deposit(100));
        let before = state.clone();
        apply(&mut state, BankAction::UpdateName("Someone Else".to_string()));
        assert_eq!(state, before);
    }
}
