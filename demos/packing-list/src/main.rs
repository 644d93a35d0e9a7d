//! Scripted CLI walk-through of the packing-list demo.
//!
//! Builds a store, subscribes a renderer, and drives the list through adds,
//! toggles, a delete, the three sort projections, and a confirmation-gated
//! clear.

use packing_list::projections::{self, SortOrder};
use packing_list::{
    ItemId, PackingAction, PackingEnvironment, PackingReducer, PackingState, PackingStore,
    request_clear,
};
use reflow_core::environment::SystemClock;
use reflow_runtime::{Store, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn render(store: &PackingStore, order: SortOrder) {
    let (items, error) = store.state(|s| (projections::sorted(&s.items, order), s.last_error.clone()));

    for item in &items {
        let mark = if item.packed { "✓" } else { " " };
        println!("  [{mark}] {} {}", item.quantity, item.description);
    }
    if let Some(error) = error {
        println!("  (rejected: {error})");
    }

    let stats = projections::stats(&items);
    println!(
        "  {} items on the list, {} packed ({}%)\n",
        stats.total, stats.packed, stats.percentage
    );
}

fn find_id(store: &PackingStore, description: &str) -> Option<ItemId> {
    store.state(|s| {
        s.items
            .iter()
            .find(|item| item.description == description)
            .map(|item| item.id)
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== Travel Packing List ===\n");

    let env = PackingEnvironment::new(Arc::new(SystemClock));
    let store = Arc::new(Store::with_config(
        PackingState::new(),
        PackingReducer::new(),
        env,
        StoreConfig::default().with_name("packing-list"),
    ));

    // Re-render on every committed dispatch, the way a UI layer would
    let renderer = Arc::clone(&store);
    let subscription = store.subscribe(move || render(&renderer, SortOrder::Input));

    println!("Adding items...");
    store.dispatch(PackingAction::AddItem {
        description: "Passports".to_string(),
        quantity: 2,
    })?;
    store.dispatch(PackingAction::AddItem {
        description: "Socks".to_string(),
        quantity: 12,
    })?;
    store.dispatch(PackingAction::AddItem {
        description: "Charger".to_string(),
        quantity: 1,
    })?;

    // Bad input is absorbed, not thrown
    println!("Trying to add an unnamed item...");
    store.dispatch(PackingAction::AddItem {
        description: String::new(),
        quantity: 1,
    })?;

    println!("Packing the passports...");
    if let Some(id) = find_id(&store, "Passports") {
        store.dispatch(PackingAction::ToggleItem { id })?;
    }

    println!("Dropping the charger...");
    if let Some(id) = find_id(&store, "Charger") {
        store.dispatch(PackingAction::DeleteItem { id })?;
    }

    println!("Sorted by description:");
    render(&store, SortOrder::Description);
    println!("Sorted by packed status:");
    render(&store, SortOrder::Packed);

    // The destructive action only flows after confirmation
    println!("Clear without confirmation:");
    let cleared = request_clear(&store, false)?;
    println!("  cleared: {cleared}\n");

    println!("Clear with confirmation:");
    let cleared = request_clear(&store, true)?;
    println!("  cleared: {cleared}");

    subscription.unsubscribe();
    println!("=== Demo Complete ===");
    Ok(())
}
