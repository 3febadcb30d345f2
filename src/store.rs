//! Global Shell State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: panes that only
//! read the viewport class do not re-run when the selection changes.

use leptos::prelude::*;
use pane_core::{ShellAction, UiState, ViewportClass};
use reactive_stores::Store;

/// Root-owned state
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Selection and detail visibility, written only through `store_dispatch`
    pub ui: UiState,
    /// Current viewport bucket, fed by the resize listener
    pub viewport: ViewportClass,
}

impl ShellState {
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            ui: UiState::new(),
            viewport,
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

// ========================
// Store Helper Functions
// ========================

/// Reduce an action into the store; no-op transitions leave subscribers untouched
pub fn store_dispatch(store: &ShellStore, action: ShellAction) {
    let mut next = store.ui().get_untracked();
    if next.apply(action) {
        store.ui().set(next);
    }
}

/// Publish a viewport class, skipping repeats
pub fn store_set_viewport(store: &ShellStore, viewport: ViewportClass) {
    if store.viewport().get_untracked() != viewport {
        log::info!("viewport class -> {:?}", viewport);
        store.viewport().set(viewport);
    }
}
