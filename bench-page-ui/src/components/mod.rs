//! Dioxus RSX components rendered in a task page's chart panel.

mod chart_container;
mod error_display;
mod selection_summary;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use selection_summary::SelectionSummary;
