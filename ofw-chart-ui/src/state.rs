//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the shared [`ViewState`] signal with loading/error
//! signals into a single struct provided via `use_context_provider`. Child
//! components retrieve it with `use_context::<AppState>()`. All filter and
//! timeline mutation goes through [`AppState::apply`], which merges a patch
//! in one step; subscribers re-run with the fully merged state.

use dioxus::prelude::*;
use ofw_core::state::{ViewState, ViewStatePatch};

/// Shared application state for the ocean flow apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current filter/time selections driving every visualization.
    pub view: Signal<ViewState>,
    /// Whether the app is still loading its embedded data
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Species options for the dropdown, derived from the loaded data
    pub species_options: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewState::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            species_options: Signal::new(Vec::new()),
        }
    }

    /// Merge a partial update into the view state. The signal write happens
    /// once, after the merge, so effects never observe a half-applied patch.
    pub fn apply(mut self, patch: ViewStatePatch) {
        self.view.with_mut(|view| view.apply(patch));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
