//! Dataset loading errors.

use std::fmt;

#[derive(Debug)]
pub enum DatasetError {
    /// The dataset is not valid record JSON.
    Parse(serde_json::Error),
    /// The dataset parsed but holds no records.
    Empty,
    /// The source could not produce any data (e.g. a missing page global).
    Unavailable(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Parse(e) => write!(f, "Dataset error: invalid record JSON: {}", e),
            DatasetError::Empty => write!(f, "Dataset error: dataset has no records"),
            DatasetError::Unavailable(what) => write!(f, "Dataset error: {}", what),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse(e)
    }
}
