//! Errors raised while binding a task page.

use bench_data::DatasetError;
use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum PageError {
    /// No `window` or `document` (not running in a browser page).
    NoDocument,
    /// An element the page contract requires is not in the document.
    MissingElement { id: String, role: &'static str },
    /// The page title element holds no task name.
    EmptyTitle(String),
    /// The navigation entry lacks the ancestor structure it is activated through.
    MissingAncestor { id: String, what: &'static str },
    /// The chart factory global is not loaded.
    ChartFactoryMissing(&'static str),
    /// A JavaScript call threw or returned something unexpected.
    Js(String),
    Dataset(DatasetError),
    Serialize(serde_json::Error),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NoDocument => write!(f, "no browser document available"),
            PageError::MissingElement { id, role } => {
                write!(f, "missing {} element with id `{}`", role, id)
            }
            PageError::EmptyTitle(id) => write!(f, "title element `{}` has no task name", id),
            PageError::MissingAncestor { id, what } => {
                write!(f, "navigation entry `{}` has no {}", id, what)
            }
            PageError::ChartFactoryMissing(name) => {
                write!(f, "chart factory `{}` is not loaded on this page", name)
            }
            PageError::Js(message) => write!(f, "JavaScript error: {}", message),
            PageError::Dataset(e) => write!(f, "{}", e),
            PageError::Serialize(e) => write!(f, "could not serialize chart input: {}", e),
        }
    }
}

/// The load step a page binding stopped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStep {
    /// Finding the title, task container and chart host.
    Resolve,
    Dataset,
    Chart,
    /// Appending the chart to its host.
    Mount,
    Navigation,
}

impl BindStep {
    /// What a page author should check when this step fails.
    pub fn hint(&self) -> &'static str {
        match self {
            BindStep::Resolve => "Check that #entry-title names the task and an element with that id exists.",
            BindStep::Dataset => "Check that the page preloads the task's records as `importedData`.",
            BindStep::Chart => "Check that the GroupedBarChart script loads before this bundle.",
            BindStep::Mount => "Check that the chart panel is still attached to the task container.",
            BindStep::Navigation => "Check the sidebar entry `<task>-nav` and its theme list.",
        }
    }
}

impl fmt::Display for BindStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BindStep::Resolve => "resolving the page",
            BindStep::Dataset => "loading the dataset",
            BindStep::Chart => "building the chart",
            BindStep::Mount => "mounting the chart",
            BindStep::Navigation => "activating navigation",
        })
    }
}

/// A `PageError` tagged with the step it stopped.
#[derive(Debug)]
pub struct BindError {
    pub step: BindStep,
    pub error: PageError,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.error)
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl PageError {
    pub fn during(self, step: BindStep) -> BindError {
        BindError { step, error: self }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::Dataset(e) => Some(e),
            PageError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatasetError> for PageError {
    fn from(e: DatasetError) -> Self {
        PageError::Dataset(e)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(e: serde_json::Error) -> Self {
        PageError::Serialize(e)
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        let err = PageError::MissingElement {
            id: "inference".to_string(),
            role: "task container",
        };
        assert_eq!(err.to_string(), "missing task container element with id `inference`");

        let err = PageError::MissingAncestor {
            id: "inference-nav".to_string(),
            what: "grandparent",
        };
        assert_eq!(err.to_string(), "navigation entry `inference-nav` has no grandparent");
    }

    #[test]
    fn bind_errors_name_their_step() {
        let err = PageError::ChartFactoryMissing("GroupedBarChart").during(BindStep::Chart);
        assert_eq!(
            err.to_string(),
            "building the chart: chart factory `GroupedBarChart` is not loaded on this page"
        );
        assert!(err.step.hint().contains("GroupedBarChart"));
    }

    #[test]
    fn no_document_message() {
        assert_eq!(PageError::NoDocument.to_string(), "no browser document available");
    }

    #[test]
    fn dataset_errors_pass_through() {
        let err = PageError::from(DatasetError::Empty);
        assert_eq!(err.to_string(), "Dataset error: dataset has no records");
    }
}
