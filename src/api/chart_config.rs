use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_VALUE_PADDING, GridSpec, LayoutPlanner, LegendPlacement, Orientation, PixelPoint,
    RangeAggregator, TickAnchor, ValueRange,
};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;
use super::animation::progress_at;
use super::validation::validate_chart_config;

/// Chart repertoire supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    VerticalBar,
}

impl ChartKind {
    /// Bars are centred in slots, so vertical ticks follow slot centres.
    #[must_use]
    pub fn tick_anchor(self) -> TickAnchor {
        match self {
            Self::Line => TickAnchor::Point,
            Self::VerticalBar => TickAnchor::SlotCenter,
        }
    }
}

/// Immutable configuration for render passes.
///
/// Every toggle is independent; a changed value takes effect on the next
/// pass. The type is serializable so hosts can persist chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Manual value window; `None` derives `[0, max + padding]` from data.
    pub value_range: Option<ValueRange>,
    pub value_padding: f64,
    pub grid: GridSpec,
    pub legend_placement: LegendPlacement,
    /// Legend anchor used with `LegendPlacement::Custom`.
    pub custom_legend: Option<PixelPoint>,
    pub orientation: Orientation,
    pub legend_visible: bool,
    pub x_axis_visible: bool,
    pub y_axis_visible: bool,
    /// Lists y labels top-down from the smallest tick.
    pub y_axis_inverse: bool,
    pub x_gridlines: bool,
    pub y_gridlines: bool,
    pub line_visible: bool,
    pub bezier_curve: bool,
    pub circle_points: bool,
    pub gradient_fill: bool,
    pub highlight_enabled: bool,
    /// When off, every pass draws the fully revealed chart whatever the progress.
    pub animation_enabled: bool,
    pub animation_duration_ms: u64,
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            value_range: None,
            value_padding: DEFAULT_VALUE_PADDING,
            grid: GridSpec::default(),
            legend_placement: LegendPlacement::Bottom,
            custom_legend: None,
            orientation: Orientation::Portrait,
            legend_visible: true,
            x_axis_visible: true,
            y_axis_visible: true,
            y_axis_inverse: false,
            x_gridlines: true,
            y_gridlines: true,
            line_visible: true,
            bezier_curve: true,
            circle_points: true,
            gradient_fill: true,
            highlight_enabled: true,
            animation_enabled: true,
            animation_duration_ms: 1_000,
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn line() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn vertical_bar() -> Self {
        Self {
            kind: ChartKind::VerticalBar,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.value_range = Some(ValueRange::new(min, max));
        self
    }

    #[must_use]
    pub fn with_value_padding(mut self, padding: f64) -> Self {
        self.value_padding = padding;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, x_gridline_count: u32, y_gridline_count: u32) -> Self {
        self.grid = GridSpec::new(x_gridline_count, y_gridline_count);
        self
    }

    #[must_use]
    pub fn with_legend_placement(mut self, placement: LegendPlacement) -> Self {
        self.legend_placement = placement;
        self
    }

    /// Switches to `LegendPlacement::Custom` anchored at `(x, y)`.
    #[must_use]
    pub fn with_custom_legend(mut self, x: f64, y: f64) -> Self {
        self.legend_placement = LegendPlacement::Custom;
        self.custom_legend = Some(PixelPoint::new(x, y));
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_bezier_curve(mut self, enabled: bool) -> Self {
        self.bezier_curve = enabled;
        self
    }

    #[must_use]
    pub fn with_circle_points(mut self, enabled: bool) -> Self {
        self.circle_points = enabled;
        self
    }

    #[must_use]
    pub fn with_gradient_fill(mut self, enabled: bool) -> Self {
        self.gradient_fill = enabled;
        self
    }

    #[must_use]
    pub fn with_legend_visible(mut self, visible: bool) -> Self {
        self.legend_visible = visible;
        self
    }

    #[must_use]
    pub fn with_axis_visibility(mut self, x_axis_visible: bool, y_axis_visible: bool) -> Self {
        self.x_axis_visible = x_axis_visible;
        self.y_axis_visible = y_axis_visible;
        self
    }

    #[must_use]
    pub fn with_gridlines(mut self, x_gridlines: bool, y_gridlines: bool) -> Self {
        self.x_gridlines = x_gridlines;
        self.y_gridlines = y_gridlines;
        self
    }

    #[must_use]
    pub fn with_y_axis_inverse(mut self, inverse: bool) -> Self {
        self.y_axis_inverse = inverse;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, enabled: bool, duration_ms: u64) -> Self {
        self.animation_enabled = enabled;
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Reveal progress `elapsed_ms` into the configured animation.
    ///
    /// Always 1.0 when animation is disabled.
    #[must_use]
    pub fn animation_progress(&self, elapsed_ms: u64) -> f64 {
        if !self.animation_enabled {
            return 1.0;
        }
        progress_at(elapsed_ms, self.animation_duration_ms)
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn range_aggregator(&self) -> RangeAggregator {
        RangeAggregator::new(self.value_padding)
    }

    #[must_use]
    pub fn layout_planner(&self) -> LayoutPlanner {
        LayoutPlanner::new(
            self.legend_placement,
            self.custom_legend,
            self.orientation.landscape_scale(),
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}
