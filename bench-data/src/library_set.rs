//! Distinct library names of a dataset.

use crate::record::DataRecord;

/// Library names in the order they first appear in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySet {
    names: Vec<String>,
}

impl LibrarySet {
    /// Collect each distinct `library_name` once, keeping first-seen order.
    pub fn from_records(records: &[DataRecord]) -> Self {
        Self::from_names(records.iter().map(|r| r.library_name.as_str()))
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for name in names {
            if !set.contains(name) {
                set.names.push(name.to_string());
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<'a> IntoIterator for &'a LibrarySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
