//! Page binder, chart factory bridge and Dioxus components for benchmark task pages.
//!
//! This crate provides:
//! - `dom`: the resolved `PageContext` (task name, container, mount point)
//! - `global_dataset`: a `DatasetSource` reading the page's preloaded dataset
//! - `js_bridge`: typed wrapper around the page's `GroupedBarChart` factory
//! - `visibility`: per-library code block toggling
//! - `navigation`: marking the task's sidebar entry active
//! - `binder`: the one-shot page load sequence tying the above together
//! - `state`: reactive PageState with Dioxus Signals
//! - `components`: RSX components rendered in the task's chart panel

pub mod binder;
pub mod components;
pub mod dom;
pub mod error;
pub mod global_dataset;
pub mod js_bridge;
pub mod navigation;
pub mod state;
pub mod visibility;

pub use binder::{BrowserPage, PageBinder, PreparedPage, TaskPage};
pub use error::{BindError, BindStep, PageError};
