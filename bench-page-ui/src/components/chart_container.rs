//! The task's chart section: a host the binder appends the chart to.

use crate::js_bridge::ChartOptions;
use dioxus::prelude::*;

/// Placeholder text while the task's records are charted.
pub(crate) fn placeholder_text(task: &str) -> String {
    if task.is_empty() {
        "Charting run times…".to_string()
    } else {
        format!("Charting run times for {}…", task)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the host element
    pub host_id: String,
    /// Task name, for the section label
    pub task: String,
    pub loading: bool,
}

/// Section holding the chart host; it reserves the chart's height until bound.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let label = format!("Run times of {}", props.task);
    let placeholder = placeholder_text(&props.task);
    let height = ChartOptions::default().height;

    rsx! {
        section {
            class: "task-chart",
            "aria-label": "{label}",
            "data-task": "{props.task}",
            if props.loading {
                p {
                    class: "task-chart-placeholder",
                    style: "height: {height}px; margin: 0; display: flex; align-items: center; justify-content: center; color: #757575;",
                    "{placeholder}"
                }
            }
            div { id: "{props.host_id}", class: "task-chart-host" }
        }
    }
}
