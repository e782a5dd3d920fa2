//! Ordering applied to a dataset before it is charted.

use crate::record::DataRecord;
use log::debug;

/// When to reorder records by run time before charting.
///
/// Textual categories have no natural order, so by default they are laid out
/// fastest first. Numeric categories keep the order the producer wrote them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortPolicy {
    /// Sort ascending by run time only when the first record's argument is not numeric.
    #[default]
    RunTimeWhenCategorical,
    /// Always sort ascending by run time.
    Always,
    /// Never reorder.
    Never,
}

impl SortPolicy {
    /// Whether this policy reorders the given records.
    pub fn should_sort(&self, records: &[DataRecord]) -> bool {
        match self {
            SortPolicy::RunTimeWhenCategorical => records
                .first()
                .map(|first| !first.arguments.is_numeric())
                .unwrap_or(false),
            SortPolicy::Always => true,
            SortPolicy::Never => false,
        }
    }
}

/// Stable ascending sort by run time.
pub fn sort_by_run_time(records: &mut [DataRecord]) {
    records.sort_by(|a, b| a.run_time.total_cmp(&b.run_time));
}

/// Apply `policy` to `records` in place. Returns whether the records were sorted.
pub fn prepare_dataset(records: &mut [DataRecord], policy: SortPolicy) -> bool {
    let sorted = policy.should_sort(records);
    if sorted {
        sort_by_run_time(records);
    }
    debug!(
        "prepare_dataset: {} records, policy {:?}, sorted: {}",
        records.len(),
        policy,
        sorted
    );
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn libraries(records: &[DataRecord]) -> Vec<&str> {
        records.iter().map(|r| r.library_name.as_str()).collect()
    }

    #[test]
    fn textual_arguments_sort_by_run_time() {
        let mut records = vec![
            DataRecord::new("x", 5.0, "A"),
            DataRecord::new("y", 2.0, "B"),
        ];
        assert!(prepare_dataset(&mut records, SortPolicy::default()));
        assert_eq!(libraries(&records), ["B", "A"]);
    }

    #[test]
    fn numeric_arguments_keep_order() {
        let mut records = vec![
            DataRecord::new(1, 5.0, "A"),
            DataRecord::new(2, 2.0, "B"),
        ];
        assert!(!prepare_dataset(&mut records, SortPolicy::default()));
        assert_eq!(libraries(&records), ["A", "B"]);
    }

    #[test]
    fn numeric_text_arguments_keep_order() {
        let mut records = vec![
            DataRecord::new("100", 9.0, "A"),
            DataRecord::new("10", 1.0, "B"),
        ];
        prepare_dataset(&mut records, SortPolicy::default());
        assert_eq!(libraries(&records), ["A", "B"]);
    }

    #[test]
    fn sorted_output_is_non_decreasing() {
        let mut records: Vec<DataRecord> = [7.5, 0.1, 3.0, 3.0, 12.0, 0.0, 4.2]
            .iter()
            .enumerate()
            .map(|(i, t)| DataRecord::new(format!("net{}", i), *t, "lib"))
            .collect();
        prepare_dataset(&mut records, SortPolicy::default());
        assert!(records.windows(2).all(|w| w[0].run_time <= w[1].run_time));
    }

    #[test]
    fn sort_is_stable_for_equal_run_times() {
        let mut records = vec![
            DataRecord::new("a", 3.0, "first"),
            DataRecord::new("b", 1.0, "fast"),
            DataRecord::new("c", 3.0, "second"),
        ];
        prepare_dataset(&mut records, SortPolicy::default());
        assert_eq!(libraries(&records), ["fast", "first", "second"]);
    }

    #[test]
    fn only_first_record_decides() {
        let mut records = vec![
            DataRecord::new(1, 5.0, "A"),
            DataRecord::new("y", 2.0, "B"),
        ];
        assert!(!prepare_dataset(&mut records, SortPolicy::default()));
        assert_eq!(libraries(&records), ["A", "B"]);
    }

    #[test]
    fn explicit_policies_override_heuristic() {
        let mut numeric = vec![DataRecord::new(1, 5.0, "A"), DataRecord::new(2, 2.0, "B")];
        assert!(prepare_dataset(&mut numeric, SortPolicy::Always));
        assert_eq!(libraries(&numeric), ["B", "A"]);

        let mut textual = vec![DataRecord::new("x", 5.0, "A"), DataRecord::new("y", 2.0, "B")];
        assert!(!prepare_dataset(&mut textual, SortPolicy::Never));
        assert_eq!(libraries(&textual), ["A", "B"]);
    }

    #[test]
    fn empty_dataset_is_untouched() {
        let mut records: Vec<DataRecord> = Vec::new();
        assert!(!prepare_dataset(&mut records, SortPolicy::default()));
        assert!(records.is_empty());
    }
}
