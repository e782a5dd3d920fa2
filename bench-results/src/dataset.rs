//! Turning runner results into the records a task page charts.

use crate::document::BenchmarkResults;
use bench_data::{ArgumentValue, DataRecord};
use log::debug;

const MILLIS_PER_SECOND: f64 = 1000.0;

impl BenchmarkResults {
    /// Records for every library and argument of `task` that has a measured runtime.
    ///
    /// Records are grouped by argument (first-seen order), then by library.
    /// Run times are mean net runtimes converted to milliseconds. Arguments
    /// whose label is a plain decimal number become numeric categories; every
    /// other label is kept verbatim.
    pub fn task_dataset(&self, task: &str) -> Vec<DataRecord> {
        let tasks: Vec<_> = self
            .libraries()
            .iter()
            .filter_map(|l| l.task(task).map(|t| (l.name.as_str(), t)))
            .collect();

        let mut labels: Vec<&str> = Vec::new();
        for (_, result) in &tasks {
            for argument in &result.arguments {
                if !labels.contains(&argument.label.as_str()) {
                    labels.push(&argument.label);
                }
            }
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for label in labels {
            for (library, result) in &tasks {
                let Some(argument) = result.argument(label) else {
                    continue;
                };
                let mean = argument.runtime.mean_runtime();
                if !mean.is_finite() {
                    skipped += 1;
                    continue;
                }
                records.push(DataRecord {
                    arguments: ArgumentValue::from_label(label),
                    run_time: mean * MILLIS_PER_SECOND,
                    library_name: library.to_string(),
                });
            }
        }
        debug!(
            "task_dataset: {} -> {} records, {} unmeasured skipped",
            task,
            records.len(),
            skipped
        );
        records
    }
}
