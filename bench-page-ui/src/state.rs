//! Chart panel state managed via Dioxus context.
//!
//! `PageState` bundles the panel's reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<PageState>()`.

use crate::error::BindStep;
use dioxus::prelude::*;

/// Shared state of a task page's chart panel.
#[derive(Clone, Copy)]
pub struct PageState {
    /// Whether the page is still being bound
    pub loading: Signal<bool>,
    /// Step and message of the failure if binding failed
    pub error: Signal<Option<(BindStep, String)>>,
    /// Libraries of the task's dataset, in first-seen order
    pub libraries: Signal<Vec<String>>,
    /// Libraries currently selected in the chart
    pub selected: Signal<Vec<String>>,
}

impl PageState {
    /// Create a new PageState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error: Signal::new(None),
            libraries: Signal::new(Vec::new()),
            selected: Signal::new(Vec::new()),
        }
    }
}
