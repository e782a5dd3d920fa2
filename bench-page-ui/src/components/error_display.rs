//! Notice shown in the chart panel when the page could not be bound.

use crate::error::BindStep;
use dioxus::prelude::*;

/// Heading naming the load step that failed.
pub(crate) fn heading(step: BindStep) -> String {
    format!("Run time chart unavailable: failed while {}", step)
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub step: BindStep,
    pub message: String,
}

/// The failed step, the error, and what the page author should check.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let heading = heading(props.step);
    let hint = props.step.hint();

    rsx! {
        aside {
            class: "task-page-error",
            role: "alert",
            style: "border-left: 4px solid #E65100; background: #FFF3E0; padding: 8px 12px; margin: 8px 0;",
            p { style: "margin: 0; font-weight: 600;", "{heading}" }
            code { style: "display: block; margin: 4px 0; font-size: 12px;", "{props.message}" }
            p { style: "margin: 0; font-size: 12px; color: #6D4C41;", "{hint}" }
        }
    }
}
