//! Benchmark record types and dataset preparation for task pages.
//!
//! This crate provides:
//! - `record`: `DataRecord` and the numeric-or-text `ArgumentValue`
//! - `dataset`: ordering policy applied before a dataset is charted
//! - `library_set`: the distinct libraries of a dataset, in first-seen order
//! - `source`: the `DatasetSource` seam the page binder loads records through
//!
//! # Usage
//!
//! ```rust
//! use bench_data::{dataset, DataRecord, LibrarySet, SortPolicy};
//!
//! let mut records = vec![
//!     DataRecord::new("x", 5.0, "A"),
//!     DataRecord::new("y", 2.0, "B"),
//! ];
//! dataset::prepare_dataset(&mut records, SortPolicy::default());
//! assert_eq!(records[0].library_name, "B");
//!
//! let libraries = LibrarySet::from_records(&records);
//! assert_eq!(libraries.as_slice(), ["B", "A"]);
//! ```

pub mod dataset;
pub mod error;
pub mod library_set;
pub mod record;
pub mod source;

pub use dataset::SortPolicy;
pub use error::DatasetError;
pub use library_set::LibrarySet;
pub use record::{ArgumentValue, DataRecord};
pub use source::{DatasetSource, JsonDataset};
