//! A single measured benchmark record.
//!
//! Field names serialize in camelCase (`arguments`, `runTime`, `libraryName`)
//! so the JSON matches what the chart factory reads through its accessors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The independent variable of a measurement.
///
/// Benchmark argument lists mix sizes (`10`, `"1000"`) and labels
/// (`"alarm"`, `"asia"`), so both shapes are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Number(f64),
    Text(String),
}

impl ArgumentValue {
    /// Build a value from an argument label, keeping numeric labels as numbers.
    ///
    /// A label becomes a `Number` only when the number is finite and prints
    /// back as the label itself, so `"10"` is numeric while `"007"`, `"0x10"`
    /// and `"Infinity"` stay text and export unchanged.
    pub fn from_label(label: &str) -> Self {
        match parse_numeric(label) {
            Some(value) if value.is_finite() && value.to_string() == label => {
                ArgumentValue::Number(value)
            }
            _ => ArgumentValue::Text(label.to_string()),
        }
    }

    /// Whether a browser's `isNaN` would call this value a number.
    ///
    /// Text that is blank or reads as a number literal counts as numeric.
    pub fn is_numeric(&self) -> bool {
        match self {
            ArgumentValue::Number(value) => !value.is_nan(),
            ArgumentValue::Text(text) => {
                let trimmed = text.trim();
                trimmed.is_empty() || parse_numeric(trimmed).is_some()
            }
        }
    }
}

/// Parse a trimmed number literal with browser `Number()` rules.
///
/// Rust also accepts spellings like `inf` and `NaN` that browsers reject,
/// so those are filtered before handing off to `str::parse`.
fn parse_numeric(trimmed: &str) -> Option<f64> {
    if let Some(value) = parse_prefixed(trimmed) {
        return value;
    }

    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `0x`, `0o` and `0b` integer literals, of any width.
///
/// `None` when `trimmed` has no radix prefix; `Some(None)` when it has one but
/// the digits are invalid. Browsers accept no sign on these.
fn parse_prefixed(trimmed: &str) -> Option<Option<f64>> {
    let mut chars = trimmed.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    let digits = &trimmed[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    }))
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Number(value) => write!(f, "{}", value),
            ArgumentValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        ArgumentValue::Number(value)
    }
}

impl From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        ArgumentValue::Number(value as f64)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::Text(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::Text(value)
    }
}

/// One measurement: a library's run time for one argument of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRecord {
    /// Category key on the chart's x-axis.
    pub arguments: ArgumentValue,
    /// Run time in milliseconds.
    pub run_time: f64,
    /// Library the measurement belongs to; also the id of its code block.
    pub library_name: String,
}

impl DataRecord {
    pub fn new(
        arguments: impl Into<ArgumentValue>,
        run_time: f64,
        library_name: impl Into<String>,
    ) -> Self {
        Self {
            arguments: arguments.into(),
            run_time,
            library_name: library_name.into(),
        }
    }
}
