use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, Frame, GridSpec, LegendLayout, Offset, SeriesSet, ValueRange};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Geometry shared by every renderer of one pass.
///
/// Resolved exactly once per pass so axis, series, legend and highlight
/// output are built from the same offset and value range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassLayout {
    pub frame: Frame,
    pub offset: Offset,
    pub range: ValueRange,
    /// Length of the longest series; sizes the x axis.
    pub point_count: usize,
    pub grid: GridSpec,
    pub legend: LegendLayout,
}

impl PassLayout {
    pub fn resolve(config: &ChartConfig, series: &SeriesSet, frame: Frame) -> ChartResult<Self> {
        if !frame.is_valid() {
            return Err(ChartError::InvalidFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        let planner = config.layout_planner();
        let offset = planner.offset();
        let aggregator = config.range_aggregator();

        Ok(Self {
            frame,
            offset,
            range: aggregator.resolve(series, config.value_range),
            point_count: aggregator.aggregate_count(series),
            grid: config.grid,
            legend: planner.legend_layout(frame, offset),
        })
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.frame, self.offset, self.range)
    }
}
