//! Per-argument runtime samples and their statistics.
//!
//! The runner records each run as a `[before, run]` pair of seconds, where
//! `before` is the timing of the library's optional before-run script. A value
//! may instead be a status string (`"NotRun"`, `"Error"`, `"Timeout"`) when the
//! command could not complete. The net runtime of a run is `run - before`;
//! runs with a status string count as gaps (NaN) and are skipped by the
//! statistics below.

use crate::error::ResultsError;
use serde_json::Value;

/// All runs of one library on one argument of one task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSamples {
    /// Net runtime per run in seconds; NaN marks a gap.
    net: Vec<f64>,
    /// Status strings in the order they were recorded.
    statuses: Vec<String>,
}

/// A single recorded value: seconds, or a status string.
enum Measurement {
    Seconds(f64),
    Status(String),
    Missing,
}

impl Measurement {
    fn from_value(value: &Value, path: &str) -> Result<Self, ResultsError> {
        match value {
            Value::Number(n) => Ok(n
                .as_f64()
                .map(Measurement::Seconds)
                .unwrap_or(Measurement::Missing)),
            // "Infinity" and other float spellings are stored as strings too
            Value::String(s) => Ok(match s.trim().parse::<f64>() {
                Ok(v) => Measurement::Seconds(v),
                Err(_) => Measurement::Status(s.clone()),
            }),
            Value::Null => Ok(Measurement::Missing),
            _ => Err(ResultsError::shape(path, "a number, a status string or null")),
        }
    }
}

impl RunSamples {
    /// Samples from net runtimes in seconds; NaN marks a gap.
    pub fn from_net(net: Vec<f64>) -> Self {
        Self {
            net,
            statuses: Vec::new(),
        }
    }

    /// Parse the `runtime` field of one argument entry.
    pub fn from_value(value: &Value, path: &str) -> Result<Self, ResultsError> {
        let mut samples = Self::default();
        match value {
            Value::Null => {}
            Value::String(status) => samples.statuses.push(status.clone()),
            Value::Array(runs) => {
                for (i, run) in runs.iter().enumerate() {
                    samples.push_run(run, &format!("{}[{}]", path, i))?;
                }
            }
            _ => return Err(ResultsError::shape(path, "a run list or a status string")),
        }
        Ok(samples)
    }

    fn push_run(&mut self, run: &Value, path: &str) -> Result<(), ResultsError> {
        let (before, timed) = match run {
            Value::Array(pair) if pair.len() == 2 => (
                Measurement::from_value(&pair[0], &format!("{}[0]", path))?,
                Measurement::from_value(&pair[1], &format!("{}[1]", path))?,
            ),
            Value::Array(_) => return Err(ResultsError::shape(path, "a [before, run] pair")),
            single => (
                Measurement::Seconds(0.0),
                Measurement::from_value(single, path)?,
            ),
        };

        let net = match (before, timed) {
            (Measurement::Seconds(b), Measurement::Seconds(t)) => t - b,
            (Measurement::Status(s), _) | (_, Measurement::Status(s)) => {
                self.statuses.push(s);
                f64::NAN
            }
            _ => f64::NAN,
        };
        self.net.push(net);
        Ok(())
    }

    /// Number of recorded runs, gaps included.
    pub fn runs(&self) -> usize {
        self.net.len()
    }

    /// The first status string recorded, if any run failed.
    pub fn first_status(&self) -> Option<&str> {
        self.statuses.first().map(String::as_str)
    }

    fn measured(&self) -> impl Iterator<Item = f64> + '_ {
        self.net.iter().copied().filter(|v| !v.is_nan())
    }

    /// Mean net runtime in seconds, skipping gaps.
    ///
    /// Infinity when there is no measured run, so failed arguments sort last.
    pub fn mean_runtime(&self) -> f64 {
        match nan_mean(self.measured()) {
            Some(mean) if !mean.is_nan() => mean,
            _ => f64::INFINITY,
        }
    }

    /// Population variance of the net runtimes, skipping gaps. NaN without runs.
    pub fn variance(&self) -> f64 {
        let Some(mean) = nan_mean(self.measured()) else {
            return f64::NAN;
        };
        nan_mean(self.measured().map(|v| (v - mean) * (v - mean))).unwrap_or(f64::NAN)
    }

    /// Population standard deviation of the net runtimes, skipping gaps.
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Mean of the values; `None` when there are none.
pub(crate) fn nan_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
