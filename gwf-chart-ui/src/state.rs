//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The current page lives in `view` and only changes through [`AppState::navigate`].

use gwf_core::model::Trace;
use gwf_core::navigation::{NavEvent, View};
use gwf_core::well::Well;
use gwf_db::Database;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Page on screen
    pub view: Signal<View>,
    /// Series requested for the forecast chart
    pub selected_traces: Signal<Vec<Trace>>,
    /// Model chosen for residual analysis; None until the user picks one
    pub residual_model: Signal<Option<String>>,
    /// Well registry
    pub wells: Signal<Vec<Well>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view: Signal::new(View::default()),
            selected_traces: Signal::new(Trace::default_selection()),
            residual_model: Signal::new(None),
            wells: Signal::new(Vec::new()),
        }
    }

    /// Apply a navigation event. The newest event always wins.
    pub fn navigate(&mut self, event: NavEvent) {
        let current = *self.view.peek();
        let next = current.apply(&event);
        log::info!("navigation: {:?} --{:?}--> {:?}", current, event, next);
        if next != current {
            self.view.set(next);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
