use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Largest accepted data sum. Leaves headroom so that sweeps in degrees and
/// the cumulative start angles of every segment stay finite.
pub const MAX_DATA_SUM: f64 = f64::MAX / 720.0;

/// Ordered chart values, each the share of a whole (`0.25` is a quarter ring).
///
/// Values are finite and non-negative. Their sum is nominally `<= 1` but this
/// is not enforced: totals above one scale the label down instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    values: Vec<f64>,
}

impl DataSet {
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(ChartError::InvalidData(format!(
                "data value at index {index} must be finite and >= 0, got {value}"
            )));
        }
        let sum: f64 = values.iter().sum();
        if sum > MAX_DATA_SUM {
            return Err(ChartError::InvalidData(format!(
                "data sum {sum} exceeds the drawable maximum {MAX_DATA_SUM}"
            )));
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Denominator for the center label, never below one.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sum().max(1.0)
    }

    #[must_use]
    pub fn share_percent(&self) -> f64 {
        self.sum() / self.total() * 100.0
    }

    /// Center label text, e.g. `"75.00%"`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.share_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, MAX_DATA_SUM};
    use crate::error::ChartError;

    #[test]
    fn quarters_sum_to_full_label() {
        let data = DataSet::new(vec![0.25, 0.25, 0.25, 0.25]).expect("valid data");
        assert_eq!(data.total(), 1.0);
        assert_eq!(data.percentage_label(), "100.00%");
    }

    #[test]
    fn partial_sum_keeps_total_at_one() {
        let data = DataSet::new(vec![0.5]).expect("valid data");
        assert_eq!(data.total(), 1.0);
        assert_eq!(data.percentage_label(), "50.00%");
    }

    #[test]
    fn zero_sum_reports_zero_percent() {
        let data = DataSet::new(vec![0.0, 0.0]).expect("valid data");
        assert_eq!(data.percentage_label(), "0.00%");
    }

    #[test]
    fn oversubscribed_sum_is_normalized_to_full() {
        let data = DataSet::new(vec![0.75, 0.75]).expect("valid data");
        assert_eq!(data.total(), 1.5);
        assert_eq!(data.percentage_label(), "100.00%");
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let err = DataSet::new(vec![0.2, -0.1]).expect_err("negative must fail");
        assert!(matches!(err, ChartError::InvalidData(message) if message.contains("index 1")));

        let err = DataSet::new(vec![f64::NAN]).expect_err("nan must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));

        let err = DataSet::new(vec![f64::INFINITY]).expect_err("inf must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn sums_beyond_the_drawable_maximum_are_rejected() {
        let data = DataSet::new(vec![MAX_DATA_SUM]).expect("boundary sum is accepted");
        assert_eq!(data.percentage_label(), "100.00%");
        assert!((data.sum() * 360.0).is_finite());

        let err = DataSet::new(vec![1e307]).expect_err("sum above maximum must fail");
        assert!(matches!(err, ChartError::InvalidData(message) if message.contains("sum")));

        let err = DataSet::new(vec![1e308, 1e308]).expect_err("overflowing sum must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn large_accepted_sums_keep_a_finite_label() {
        let data = DataSet::new(vec![1e300, 2e300]).expect("valid data");
        assert_eq!(data.percentage_label(), "100.00%");
    }
}
