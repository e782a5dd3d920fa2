//! The runner's `results.json` document.
//!
//! # Layout
//!
//! ```text
//! { "<library>": { "<task>": { "theme": "<theme>",
//!     "results": { "<argument>": { "runtime": [[before, run], ...] | "NotRun",
//!                                  "evaluation": { "<function>": [value, ...] } } } } } }
//! ```
//!
//! Object key order is kept, so every listing below is in first-seen order.

use crate::error::ResultsError;
use crate::samples::{nan_mean, RunSamples};
use log::info;
use serde_json::{Map, Value};
use std::fmt;

/// Status reported for a library on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// At least one argument has a measured runtime.
    Run,
    /// Nothing was measured; carries the first status string the runner wrote.
    Failed(String),
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Run => f.write_str("Run"),
            TaskStatus::Failed(reason) => f.write_str(reason),
        }
    }
}

/// Values returned by one evaluation function over the runs of an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSeries {
    pub function: String,
    /// NaN marks a run whose evaluation failed.
    pub values: Vec<f64>,
}

impl EvaluationSeries {
    /// Mean evaluation skipping failures; infinity when every run failed.
    pub fn mean(&self) -> f64 {
        match nan_mean(self.values.iter().copied().filter(|v| !v.is_nan())) {
            Some(mean) if !mean.is_nan() => mean,
            _ => f64::INFINITY,
        }
    }
}

/// Results of one library on one argument of a task.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentResult {
    /// Argument label exactly as configured for the task.
    pub label: String,
    pub runtime: RunSamples,
    pub evaluations: Vec<EvaluationSeries>,
}

/// Results of one library on one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    pub name: String,
    pub theme: String,
    pub arguments: Vec<ArgumentResult>,
}

impl TaskResult {
    pub fn status(&self) -> TaskStatus {
        if self
            .arguments
            .iter()
            .any(|a| a.runtime.mean_runtime().is_finite())
        {
            return TaskStatus::Run;
        }
        let reason = self
            .arguments
            .iter()
            .find_map(|a| a.runtime.first_status())
            .unwrap_or("NotRun");
        TaskStatus::Failed(reason.to_string())
    }

    pub fn argument(&self, label: &str) -> Option<&ArgumentResult> {
        self.arguments.iter().find(|a| a.label == label)
    }
}

/// Every task a library was benchmarked on.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryResults {
    pub name: String,
    pub tasks: Vec<TaskResult>,
}

impl LibraryResults {
    pub fn task(&self, name: &str) -> Option<&TaskResult> {
        self.tasks.iter().find(|t| t.name == name)
    }
}

/// A parsed runner results document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkResults {
    libraries: Vec<LibraryResults>,
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ResultsError> {
    value
        .as_object()
        .ok_or_else(|| ResultsError::shape(path, "an object"))
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
}

impl BenchmarkResults {
    /// Parse a results document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bench_results::BenchmarkResults;
    ///
    /// let results = BenchmarkResults::from_json(
    ///     r#"{"pgmpy": {"inference": {"theme": "bayesian",
    ///         "results": {"asia": {"runtime": [[0, 0.25]]}}}}}"#,
    /// ).unwrap();
    /// assert_eq!(results.task_names(), ["inference"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ResultsError> {
        let value: Value = serde_json::from_str(json)?;
        let root = as_object(&value, "$")?;

        let mut libraries = Vec::with_capacity(root.len());
        for (library, tasks) in root {
            let library_path = format!("$.{}", library);
            let tasks = as_object(tasks, &library_path)?
                .iter()
                .map(|(task, entry)| {
                    parse_task(task, entry, &format!("{}.{}", library_path, task))
                })
                .collect::<Result<Vec<_>, _>>()?;
            libraries.push(LibraryResults {
                name: library.clone(),
                tasks,
            });
        }

        let results = Self { libraries };
        info!(
            "results: loaded {} libraries, {} tasks",
            results.libraries.len(),
            results.task_names().len()
        );
        Ok(results)
    }

    pub fn libraries(&self) -> &[LibraryResults] {
        &self.libraries
    }

    pub fn library(&self, name: &str) -> Option<&LibraryResults> {
        self.libraries.iter().find(|l| l.name == name)
    }

    /// Distinct task names across all libraries.
    pub fn task_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for task in self.libraries.iter().flat_map(|l| &l.tasks) {
            push_unique(&mut names, &task.name);
        }
        names
    }

    /// Distinct theme names across all libraries.
    pub fn theme_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for task in self.libraries.iter().flat_map(|l| &l.tasks) {
            push_unique(&mut names, &task.theme);
        }
        names
    }

    /// Distinct task names filed under `theme`.
    pub fn tasks_in_theme(&self, theme: &str) -> Vec<String> {
        let mut names = Vec::new();
        for task in self
            .libraries
            .iter()
            .flat_map(|l| &l.tasks)
            .filter(|t| t.theme == theme)
        {
            push_unique(&mut names, &task.name);
        }
        names
    }

    /// Status of `library` on `task`, if the library was benchmarked on it.
    pub fn status(&self, library: &str, task: &str) -> Option<TaskStatus> {
        self.library(library)?.task(task).map(TaskResult::status)
    }
}

fn parse_task(name: &str, entry: &Value, path: &str) -> Result<TaskResult, ResultsError> {
    let entry = as_object(entry, path)?;
    let theme = entry
        .get("theme")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut arguments = Vec::new();
    if let Some(results) = entry.get("results") {
        let results_path = format!("{}.results", path);
        for (label, argument) in as_object(results, &results_path)? {
            arguments.push(parse_argument(
                label,
                argument,
                &format!("{}.{}", results_path, label),
            )?);
        }
    }

    Ok(TaskResult {
        name: name.to_string(),
        theme,
        arguments,
    })
}

fn parse_argument(label: &str, entry: &Value, path: &str) -> Result<ArgumentResult, ResultsError> {
    let entry = as_object(entry, path)?;
    let runtime = match entry.get("runtime") {
        Some(runtime) => RunSamples::from_value(runtime, &format!("{}.runtime", path))?,
        None => RunSamples::default(),
    };

    let mut evaluations = Vec::new();
    if let Some(evaluation) = entry.get("evaluation").filter(|v| !v.is_null()) {
        let evaluation_path = format!("{}.evaluation", path);
        for (function, values) in as_object(evaluation, &evaluation_path)? {
            let values = match values {
                Value::Array(items) => items.iter().map(evaluation_value).collect(),
                single => vec![evaluation_value(single)],
            };
            evaluations.push(EvaluationSeries {
                function: function.clone(),
                values,
            });
        }
    }

    Ok(ArgumentResult {
        label: label.to_string(),
        runtime,
        evaluations,
    })
}

/// Evaluation functions return numbers, numeric strings, or an error marker.
fn evaluation_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
