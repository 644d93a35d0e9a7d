//! Presentation-layer boundary helpers.
//!
//! Clearing the whole list is destructive, so the action only flows after
//! an out-of-band confirmation. The store has no concept of confirmation
//! and never blocks waiting for one; the gate lives here, on the calling
//! side.

use crate::PackingStore;
use crate::types::PackingAction;
use reflow_runtime::StoreError;

/// Dispatches `ClearAll` only when confirmation was already obtained
///
/// Returns whether the clear was dispatched.
///
/// # Errors
///
/// Returns [`StoreError::ReentrantDispatch`] when called from within a
/// running dispatch.
pub fn request_clear(store: &PackingStore, confirmed: bool) -> Result<bool, StoreError> {
    if !confirmed {
        tracing::debug!("clear request declined");
        return Ok(false);
    }

    store.dispatch(PackingAction::ClearAll)?;
    Ok(true)
}
