//! Export per-task chart datasets from a runner results file.
//!
//! Each task gets `<out_dir>/<task>.json` (the array the page preloads as
//! `importedData`) or `<out_dir>/<task>.csv` with the same three columns.

use anyhow::bail;
use bench_data::DataRecord;
use clap::ValueEnum;
use log::{info, warn};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

/// Serialize one task's records in `format`.
pub fn render_dataset(records: &[DataRecord], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(records)?),
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for record in records {
                wtr.serialize(record)?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
    }
}

/// File name of `task`'s dataset.
///
/// Task names come from the results file, so names that could leave the
/// output directory are rejected.
pub fn dataset_file_name(task: &str, format: Format) -> anyhow::Result<String> {
    if task.is_empty() || task == "." || task.contains("..") || task.contains(['/', '\\']) {
        bail!("task name {:?} cannot be used as a file name", task);
    }
    Ok(format!("{}.{}", task, format.extension()))
}

/// Write a dataset file per task of `results_path` into `out_dir`.
///
/// Tasks where no library has a measured runtime are skipped with a warning.
pub fn run_export(results_path: &str, out_dir: &str, format: Format) -> anyhow::Result<()> {
    let results = crate::load_results(results_path)?;
    std::fs::create_dir_all(out_dir)?;

    let mut written = 0;
    for task in results.task_names() {
        let records = results.task_dataset(&task);
        if records.is_empty() {
            warn!("Task {} has no measured runtimes, skipping", task);
            continue;
        }

        let path = Path::new(out_dir).join(dataset_file_name(&task, format)?);
        std::fs::write(&path, render_dataset(&records, format)?)?;
        info!("Wrote {} records for {} to {}", records.len(), task, path.display());
        written += 1;
    }

    info!("Export complete: {} datasets in {}", written, out_dir);
    Ok(())
}
