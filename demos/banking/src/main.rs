//! Scripted walk-through of the banking demo: customer creation, deposits,
//! a rejected overdraft, and a loan lifecycle over two composed slices.

use banking::{BankAction, BankEnvironment, BankState, BankStore, bank_reducer};
use reflow_core::environment::SystemClock;
use reflow_runtime::{Store, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn render(store: &BankStore) {
    store.state(|s| {
        let name = s.customer.full_name.as_deref().unwrap_or("<no customer>");
        println!(
            "  {name}: balance {} / loan {}{}",
            s.account.balance,
            s.account.loan,
            s.account
                .last_error
                .as_deref()
                .map(|e| format!("  (rejected: {e})"))
                .unwrap_or_default()
        );
    });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== Banking Demo ===\n");

    let env = BankEnvironment::new(Arc::new(SystemClock));
    let store = Arc::new(Store::with_config(
        BankState::default(),
        bank_reducer(),
        env,
        StoreConfig::default().with_name("banking"),
    ));

    let renderer = Arc::clone(&store);
    let subscription = store.subscribe(move || render(&renderer));

    println!("Creating customer and depositing...");
    store.dispatch(BankAction::CreateCustomer {
        full_name: "Ada Lovelace".to_string(),
        national_id: "18151210".to_string(),
    })?;
    store.dispatch(BankAction::Deposit(300))?;

    println!("Attempting an overdraft...");
    store.dispatch(BankAction::Withdraw(500))?;

    println!("Taking out a loan...");
    store.dispatch(BankAction::RequestLoan {
        amount: 1000,
        purpose: "Buy a car".to_string(),
    })?;

    println!("Paying it back...");
    store.dispatch(BankAction::PayLoan)?;

    subscription.unsubscribe();
    println!("\n=== Demo Complete ===");
    Ok(())
}
