use ordered_float::OrderedFloat;

use crate::core::{CoordinateMapper, PixelPoint, SeriesSet};
use crate::interaction::HighlightTarget;
use crate::render::{Path, Rect, RenderFrame, StrokeStyle, TextHAlign, TextPrimitive};

use super::animation::reveal_count;
use super::axis_frame_builder::format_value;
use super::series_frame_builder::bar_span;
use super::{ChartConfig, ChartKind, PassLayout};

const LABEL_WIDTH: f64 = 40.0;
const LABEL_HEIGHT: f64 = 10.0;

type SnapKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Nearest visible sample to `touch`, by pixel x then pixel y distance.
///
/// Touches outside the plot rectangle select nothing.
#[must_use]
pub fn resolve_highlight(
    config: &ChartConfig,
    layout: &PassLayout,
    series: &SeriesSet,
    touch: PixelPoint,
    progress: f64,
) -> Option<HighlightTarget> {
    if !layout.offset.contains(layout.frame, touch) {
        return None;
    }
    let mapper = layout.mapper();

    let mut best: Option<(SnapKey, HighlightTarget)> = None;
    for (series_index, item) in series.iter().enumerate() {
        let visible = reveal_count(item.len(), progress);
        let count = match config.kind {
            ChartKind::Line => item.len(),
            ChartKind::VerticalBar => layout.point_count,
        };
        for (point_index, value) in item.values().iter().take(visible).enumerate() {
            let bar = BarSlot {
                gap: config.style.bar_gap,
                series_index,
                groups: series.len(),
            };
            let position = anchor(config.kind, mapper, bar, point_index, count, *value);
            let key = (
                OrderedFloat((position.x - touch.x).abs()),
                OrderedFloat((position.y - touch.y).abs()),
            );
            if best.as_ref().is_some_and(|(best_key, _)| *best_key <= key) {
                continue;
            }
            best = Some((
                key,
                HighlightTarget {
                    series_index,
                    point_index,
                    value: *value,
                    position,
                },
            ));
        }
    }
    best.map(|(_, target)| target)
}

/// Guide line, marker ring and value label for the highlighted sample.
pub(super) fn build_highlight(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
    target: HighlightTarget,
) {
    let style = &config.style;
    let mapper = layout.mapper();
    let position = target.position;

    frame.stroke(
        Path::line(
            PixelPoint::new(position.x, mapper.top_y()),
            PixelPoint::new(position.x, mapper.baseline_y()),
        ),
        StrokeStyle::solid(style.highlight_line_color, style.highlight_line_width),
    );
    frame.stroke(
        Path::circle(position, style.highlight_marker_radius),
        StrokeStyle::solid(style.highlight_line_color, style.highlight_line_width),
    );
    frame.text(TextPrimitive::new(
        format_value(target.value),
        Rect::new(
            position.x - LABEL_WIDTH / 2.0,
            position.y - style.highlight_marker_radius - LABEL_HEIGHT - 2.0,
            LABEL_WIDTH,
            LABEL_HEIGHT,
        ),
        style.highlight_label_font_size_px,
        style.highlight_label_color,
        TextHAlign::Center,
    ));
}

#[derive(Clone, Copy)]
struct BarSlot {
    gap: f64,
    series_index: usize,
    groups: usize,
}

fn anchor(
    kind: ChartKind,
    mapper: CoordinateMapper,
    bar: BarSlot,
    index: usize,
    count: usize,
    value: f64,
) -> PixelPoint {
    match kind {
        ChartKind::Line => mapper.point(index, count, value),
        ChartKind::VerticalBar => {
            let (x, width) =
                bar_span(mapper, bar.gap, index, count, bar.series_index, bar.groups);
            PixelPoint::new(x + width / 2.0, mapper.y(value))
        }
    }
}
