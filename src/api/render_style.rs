use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::render::{Color, StrokeStyle};

/// Visual vocabulary of one render pass.
///
/// Series colors come from each `Series`; everything else is here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub y_axis_base_color: Color,
    pub x_axis_base_color: Color,
    pub y_axis_base_width: f64,
    pub x_axis_base_width: f64,
    pub gridline_color: Color,
    pub gridline_width: f64,
    /// Empty means solid gridlines.
    pub gridline_dash: SmallVec<[f64; 4]>,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub line_width: f64,
    /// `None` paints markers in the series color.
    pub circle_point_color: Option<Color>,
    pub circle_point_radius: f64,
    /// Alpha applied to the series color for the area under a line.
    pub gradient_fill_alpha: f64,
    pub bar_fill_color: Option<Color>,
    pub bar_stroke_color: Color,
    pub bar_line_width: f64,
    /// Horizontal space left empty in every bar slot.
    pub bar_gap: f64,
    pub legend_text_color: Color,
    pub legend_font_size_px: f64,
    pub legend_swatch_size: f64,
    pub highlight_line_color: Color,
    pub highlight_line_width: f64,
    pub highlight_marker_radius: f64,
    pub highlight_label_color: Color,
    pub highlight_label_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            y_axis_base_color: Color::BLACK,
            x_axis_base_color: Color::BLACK,
            y_axis_base_width: 3.0,
            x_axis_base_width: 2.0,
            gridline_color: Color::BLACK,
            gridline_width: 0.5,
            gridline_dash: smallvec![1.0],
            axis_label_color: Color::BLACK,
            axis_label_font_size_px: 8.0,
            line_width: 1.0,
            circle_point_color: None,
            circle_point_radius: 3.0,
            gradient_fill_alpha: 0.2,
            bar_fill_color: None,
            bar_stroke_color: Color::BLACK,
            bar_line_width: 1.0,
            bar_gap: 5.0,
            legend_text_color: Color::BLACK,
            legend_font_size_px: 8.0,
            legend_swatch_size: 10.0,
            highlight_line_color: Color::rgba(0.4, 0.4, 0.4, 0.8),
            highlight_line_width: 1.0,
            highlight_marker_radius: 5.0,
            highlight_label_color: Color::BLACK,
            highlight_label_font_size_px: 8.0,
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn gridline_stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.gridline_color,
            width: self.gridline_width,
            dash: self.gridline_dash.clone(),
        }
    }

    #[must_use]
    pub fn with_solid_gridlines(mut self) -> Self {
        self.gridline_dash.clear();
        self
    }
}
