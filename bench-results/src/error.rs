//! Errors raised while reading a runner results document.

use std::fmt;

#[derive(Debug)]
pub enum ResultsError {
    /// The document is not JSON.
    Json(serde_json::Error),
    /// A value sits where the runner writes something else.
    Shape {
        path: String,
        expected: &'static str,
    },
}

impl ResultsError {
    pub(crate) fn shape(path: &str, expected: &'static str) -> Self {
        ResultsError::Shape {
            path: path.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ResultsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsError::Json(e) => write!(f, "Results error: {}", e),
            ResultsError::Shape { path, expected } => {
                write!(f, "Results error: expected {} at {}", expected, path)
            }
        }
    }
}

impl std::error::Error for ResultsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResultsError::Json(e) => Some(e),
            ResultsError::Shape { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ResultsError {
    fn from(e: serde_json::Error) -> Self {
        ResultsError::Json(e)
    }
}
