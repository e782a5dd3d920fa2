//! One-line summary of which libraries' code is shown.

use crate::state::PageState;
use dioxus::prelude::*;

/// Text for the summary line given the current selection.
pub(crate) fn summary_text(selected: &[String]) -> String {
    if selected.is_empty() {
        "Select a library in the chart to show its code.".to_string()
    } else {
        format!("Showing code for: {}", selected.join(", "))
    }
}

/// Summary of the chart selection, read from `PageState`.
#[component]
pub fn SelectionSummary() -> Element {
    let state = use_context::<PageState>();
    let selected = (state.selected)();
    let known = state.libraries.read().len();
    let summary = summary_text(&selected);
    let count = selected.len();

    rsx! {
        p {
            style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
            "{summary}"
            if known > 0 {
                span {
                    style: "color: #999;",
                    " ({count} of {known} libraries)"
                }
            }
        }
    }
}
