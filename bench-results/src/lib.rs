//! Benchmark runner `results.json` ingestion.
//!
//! The runner times every library on every argument of every task and writes
//! one nested JSON document. This crate reads that document, computes the
//! per-argument runtime statistics, and derives the per-task datasets that
//! the task pages chart.

mod dataset;
pub mod document;
pub mod error;
pub mod samples;

pub use document::{
    ArgumentResult, BenchmarkResults, EvaluationSeries, LibraryResults, TaskResult, TaskStatus,
};
pub use error::ResultsError;
pub use samples::RunSamples;
