use tracing::trace;

use crate::core::{CoordinateMapper, PixelPoint, SeriesSet};
use crate::render::{Path, Rect, RectStyle, RenderFrame, StrokeStyle};

use super::animation::reveal_count;
use super::{ChartConfig, ChartKind, PassLayout};

/// Series geometry revealed up to `progress` (1.0 draws everything).
pub(super) fn build_series(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
    series: &SeriesSet,
    progress: f64,
) {
    match config.kind {
        ChartKind::Line => build_lines(frame, config, layout, series, progress),
        ChartKind::VerticalBar => build_bars(frame, config, layout, series, progress),
    }
}

/// Pixel positions of the first `visible` samples of `values`.
///
/// Spacing always follows the full length of `values`.
pub(super) fn project_points(
    mapper: CoordinateMapper,
    values: &[f64],
    visible: usize,
) -> Vec<PixelPoint> {
    let count = values.len();
    values
        .iter()
        .take(visible)
        .enumerate()
        .map(|(index, value)| mapper.point(index, count, *value))
        .collect()
}

fn build_lines(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
    series: &SeriesSet,
    progress: f64,
) {
    let style = &config.style;
    let mapper = layout.mapper();

    for (series_index, item) in series.iter().enumerate() {
        let visible = reveal_count(item.len(), progress);
        let points = project_points(mapper, item.values(), visible);
        trace!(series_index, visible, "project line series");
        if points.is_empty() {
            continue;
        }

        if points.len() >= 2 {
            let outline = if config.bezier_curve {
                curve_path(&points)
            } else {
                polyline_path(&points)
            };

            if config.gradient_fill {
                let baseline = mapper.baseline_y();
                let first_x = points[0].x;
                let last_x = points[points.len() - 1].x;
                let area = outline
                    .clone()
                    .line_to(PixelPoint::new(last_x, baseline))
                    .line_to(PixelPoint::new(first_x, baseline))
                    .close();
                frame.fill(area, item.color.with_alpha(style.gradient_fill_alpha));
            }

            if config.line_visible {
                frame.stroke(outline, StrokeStyle::solid(item.color, style.line_width));
            }
        }

        if config.circle_points {
            let marker_color = style.circle_point_color.unwrap_or(item.color);
            for point in &points {
                frame.fill(Path::circle(*point, style.circle_point_radius), marker_color);
            }
        }
    }
}

fn build_bars(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
    series: &SeriesSet,
    progress: f64,
) {
    let style = &config.style;
    let mapper = layout.mapper();
    let groups = series.len();
    let base = mapper.y(layout.range.min);

    // every series shares the slots of the longest one
    let count = layout.point_count;

    for (series_index, item) in series.iter().enumerate() {
        let visible = reveal_count(item.len(), progress);
        trace!(series_index, visible, "project bar series");
        let rect_style = RectStyle {
            fill_color: style.bar_fill_color.unwrap_or(item.color),
            border_color: style.bar_stroke_color,
            border_width: style.bar_line_width,
        };

        for (index, value) in item.values().iter().take(visible).enumerate() {
            let (x, bar_width) =
                bar_span(mapper, style.bar_gap, index, count, series_index, groups);
            let top = mapper.y(*value);
            frame.fill_rect(
                Rect::new(x, top.min(base), bar_width, (base - top).abs()),
                rect_style,
            );
        }
    }
}

/// `(left x, width)` of the bar for `series_index` out of `groups` series
/// sharing slot `index`.
pub(super) fn bar_span(
    mapper: CoordinateMapper,
    bar_gap: f64,
    index: usize,
    count: usize,
    series_index: usize,
    groups: usize,
) -> (f64, f64) {
    let (slot_x, slot_width) = mapper.slot(index, count);
    let bar_width = ((slot_width - bar_gap) / groups.max(1) as f64).max(0.0);
    (slot_x + bar_gap / 2.0 + bar_width * series_index as f64, bar_width)
}

pub(super) fn polyline_path(points: &[PixelPoint]) -> Path {
    let mut path = Path::new();
    for (index, point) in points.iter().enumerate() {
        path = if index == 0 {
            path.move_to(*point)
        } else {
            path.line_to(*point)
        };
    }
    path
}

/// Cubic segments with both control points on the horizontal midpoint.
pub(super) fn curve_path(points: &[PixelPoint]) -> Path {
    let Some(first) = points.first() else {
        return Path::new();
    };
    let mut path = Path::new().move_to(*first);
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mid_x = (from.x + to.x) / 2.0;
        path = path.cubic_to(
            PixelPoint::new(mid_x, from.y),
            PixelPoint::new(mid_x, to.y),
            to,
        );
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PathCommand;

    #[test]
    fn curve_passes_through_every_point() {
        let points = [
            PixelPoint::new(0.0, 10.0),
            PixelPoint::new(10.0, 0.0),
            PixelPoint::new(20.0, 5.0),
        ];
        let path = curve_path(&points);
        assert_eq!(path.commands.len(), 3);
        assert_eq!(
            path.commands[2],
            PathCommand::CubicTo {
                control1: PixelPoint::new(15.0, 0.0),
                control2: PixelPoint::new(15.0, 5.0),
                to: PixelPoint::new(20.0, 5.0),
            }
        );
    }
}
