use crate::error::{ChartError, ChartResult};
use crate::render::RectStyle;

use super::{ChartConfig, RenderStyle};

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    if config.grid.x_gridline_count == 0 || config.grid.y_gridline_count == 0 {
        return Err(ChartError::InvalidConfig(
            "gridline counts must be > 0".to_owned(),
        ));
    }

    if !config.value_padding.is_finite() || config.value_padding < 0.0 {
        return Err(ChartError::InvalidConfig(
            "value padding must be finite and >= 0".to_owned(),
        ));
    }

    if let Some(range) = config.value_range {
        if !range.min.is_finite() || !range.max.is_finite() || range.max < range.min {
            return Err(ChartError::InvalidConfig(
                "value range must be finite with max >= min".to_owned(),
            ));
        }
    }

    if let Some(anchor) = config.custom_legend {
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "custom legend position must be finite".to_owned(),
            ));
        }
    }

    validate_render_style(&config.style)
}

pub(super) fn validate_render_style(style: &RenderStyle) -> ChartResult<()> {
    for (name, value) in [
        ("y_axis_base_width", style.y_axis_base_width),
        ("x_axis_base_width", style.x_axis_base_width),
        ("gridline_width", style.gridline_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("line_width", style.line_width),
        ("circle_point_radius", style.circle_point_radius),
        ("legend_font_size_px", style.legend_font_size_px),
        ("legend_swatch_size", style.legend_swatch_size),
        ("highlight_line_width", style.highlight_line_width),
        ("highlight_marker_radius", style.highlight_marker_radius),
        ("highlight_label_font_size_px", style.highlight_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.bar_gap.is_finite() || style.bar_gap < 0.0 {
        return Err(ChartError::InvalidData(
            "style `bar_gap` must be finite and >= 0".to_owned(),
        ));
    }
    if !(0.0..=1.0).contains(&style.gradient_fill_alpha) {
        return Err(ChartError::InvalidData(
            "style `gradient_fill_alpha` must be in [0, 1]".to_owned(),
        ));
    }

    style.gridline_stroke().validate()?;
    RectStyle {
        fill_color: style.bar_fill_color.unwrap_or(style.bar_stroke_color),
        border_color: style.bar_stroke_color,
        border_width: style.bar_line_width,
    }
    .validate()?;

    for color in [
        style.y_axis_base_color,
        style.x_axis_base_color,
        style.axis_label_color,
        style.legend_text_color,
        style.highlight_line_color,
        style.highlight_label_color,
    ] {
        color.validate()?;
    }
    if let Some(color) = style.circle_point_color {
        color.validate()?;
    }

    Ok(())
}
