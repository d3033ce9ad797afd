use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::series::SeriesSet;
use crate::core::types::ValueRange;

/// Headroom added above the largest sample when the range is derived from data.
pub const DEFAULT_VALUE_PADDING: f64 = 41.0;

/// Derives the vertical value window and the x-axis sample count from a `SeriesSet`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeAggregator {
    padding: f64,
}

impl Default for RangeAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_PADDING)
    }
}

impl RangeAggregator {
    /// `padding` must be finite and non-negative so the padded max never
    /// drops below the data max.
    #[must_use]
    pub fn new(padding: f64) -> Self {
        debug_assert!(
            padding.is_finite() && padding >= 0.0,
            "value padding must be finite and >= 0"
        );
        Self { padding }
    }

    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    /// Largest value across every series plus padding.
    ///
    /// Empty series are ignored; when no series has a value the max is taken
    /// as 0 before padding.
    #[must_use]
    pub fn aggregate_max(self, series: &SeriesSet) -> f64 {
        let data_max = series
            .iter()
            .flat_map(|series| series.values().iter().copied())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0);
        data_max + self.padding
    }

    /// Length of the longest series, 0 for an empty set.
    #[must_use]
    pub fn aggregate_count(self, series: &SeriesSet) -> usize {
        series.iter().map(|series| series.len()).max().unwrap_or(0)
    }

    /// Uses `manual` verbatim when supplied, otherwise `[0, aggregate_max]`.
    #[must_use]
    pub fn resolve(self, series: &SeriesSet, manual: Option<ValueRange>) -> ValueRange {
        match manual {
            Some(range) => range,
            None => ValueRange::new(0.0, self.aggregate_max(series)),
        }
    }
}
