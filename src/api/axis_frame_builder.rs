use tracing::debug;

use crate::core::PixelPoint;
use crate::render::{Path, Rect, RenderFrame, StrokeStyle, TextHAlign, TextPrimitive};

use super::{ChartConfig, PassLayout};

const LABEL_WIDTH: f64 = 20.0;
const LABEL_HEIGHT: f64 = 10.0;
const Y_LABEL_GAP: f64 = 5.0;
const X_LABEL_GAP: f64 = 10.0;

/// Plot-rectangle borders plus horizontal and vertical gridlines.
pub(super) fn build_axis_grid(frame: &mut RenderFrame, config: &ChartConfig, layout: &PassLayout) {
    let style = &config.style;
    let mapper = layout.mapper();
    let (left, right) = (mapper.left_x(), mapper.right_x());
    let (top, bottom) = (mapper.top_y(), mapper.baseline_y());

    let y_base = StrokeStyle::solid(style.y_axis_base_color, style.y_axis_base_width);
    frame.stroke(
        Path::line(PixelPoint::new(left, top), PixelPoint::new(left, bottom)),
        y_base.clone(),
    );
    frame.stroke(
        Path::line(PixelPoint::new(right, top), PixelPoint::new(right, bottom)),
        y_base,
    );
    let x_base = StrokeStyle::solid(style.x_axis_base_color, style.x_axis_base_width);
    frame.stroke(
        Path::line(PixelPoint::new(left, bottom), PixelPoint::new(right, bottom)),
        x_base.clone(),
    );
    frame.stroke(
        Path::line(PixelPoint::new(left, top), PixelPoint::new(right, top)),
        x_base,
    );

    let gridline = style.gridline_stroke();
    if config.y_gridlines {
        for (_, y) in mapper.y_ticks(layout.grid) {
            frame.stroke(
                Path::line(PixelPoint::new(left, y), PixelPoint::new(right, y)),
                gridline.clone(),
            );
        }
    }

    if layout.point_count == 0 {
        debug!("no samples, skipping x gridlines");
        return;
    }
    if config.x_gridlines {
        let ticks = mapper.x_ticks(layout.point_count, layout.grid, config.kind.tick_anchor());
        for (_, x) in ticks {
            frame.stroke(
                Path::line(PixelPoint::new(x, top), PixelPoint::new(x, bottom)),
                gridline.clone(),
            );
        }
    }
}

/// Tick labels for both axes.
pub(super) fn build_axis_labels(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
) {
    let style = &config.style;
    let mapper = layout.mapper();

    if config.y_axis_visible {
        let ticks = mapper.y_ticks(layout.grid);
        let values: Vec<f64> = if config.y_axis_inverse {
            ticks.iter().rev().map(|(value, _)| *value).collect()
        } else {
            ticks.iter().map(|(value, _)| *value).collect()
        };
        for ((_, y), value) in ticks.iter().zip(values) {
            frame.text(TextPrimitive::new(
                format_tick_label(value),
                Rect::new(
                    mapper.left_x() - LABEL_WIDTH - Y_LABEL_GAP,
                    y - LABEL_HEIGHT / 2.0,
                    LABEL_WIDTH,
                    LABEL_HEIGHT,
                ),
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }
    }

    if config.x_axis_visible && layout.point_count > 0 {
        let ticks = mapper.x_ticks(layout.point_count, layout.grid, config.kind.tick_anchor());
        for (label, x) in ticks {
            let Some(label) = label else {
                continue;
            };
            frame.text(TextPrimitive::new(
                label.to_string(),
                Rect::new(
                    x - LABEL_WIDTH / 2.0,
                    mapper.baseline_y() + X_LABEL_GAP,
                    LABEL_WIDTH,
                    LABEL_HEIGHT,
                ),
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }
    }
}

/// Y tick labels are integers; the fraction is truncated.
pub(super) fn format_tick_label(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Whole numbers print without decimals, others with two.
pub(super) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
