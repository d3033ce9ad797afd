//! Index/value to pixel mapping shared by every renderer.
//!
//! Axis, series, legend, highlight and animation output must line up, so
//! none of them does its own pixel arithmetic: they all go through the
//! functions below (or `CoordinateMapper`, which binds the per-pass inputs).
//!
//! Preconditions (finite inputs, `index < count`) are caller obligations and
//! are only checked in debug builds.

use serde::{Deserialize, Serialize};

use crate::core::types::{Frame, GridSpec, Offset, PixelPoint, ValueRange};

/// Pixel x of sample `index` out of `count` evenly spaced samples.
///
/// A single sample sits on the left plot edge.
#[must_use]
pub fn x_for_index(index: usize, count: usize, frame_width: f64, offset: Offset) -> f64 {
    debug_assert!(index < count, "index {index} out of range for count {count}");
    debug_assert!(frame_width.is_finite(), "frame width must be finite");
    if count <= 1 {
        return offset.left;
    }
    let step = offset.plot_width(frame_width) / (count - 1) as f64;
    offset.left + index as f64 * step
}

/// Pixel y of `value` inside `[min_value, max_value]`, larger values higher.
///
/// A flat range maps every value to the plot baseline.
#[must_use]
pub fn y_for_value(
    value: f64,
    max_value: f64,
    min_value: f64,
    frame_height: f64,
    offset: Offset,
) -> f64 {
    debug_assert!(
        value.is_finite() && max_value.is_finite() && min_value.is_finite(),
        "y mapping inputs must be finite"
    );
    let bottom = offset.bottom_edge(frame_height);
    let span = max_value - min_value;
    if span == 0.0 {
        return bottom;
    }
    let normalized = (value - min_value) / span;
    bottom - normalized * (bottom - offset.top)
}

/// Value shown on y tick `tick_index`; ticks run from 0 to `max_value`.
#[must_use]
pub fn y_axis_tick_value(tick_index: u32, max_value: f64, gridline_count: u32) -> f64 {
    debug_assert!(gridline_count > 0, "y gridline count must be > 0");
    max_value * f64::from(tick_index) / f64::from(gridline_count)
}

/// Integer label for x tick `tick_index`.
///
/// Keeps the truncating scale of the legacy widget: `point_count /
/// (point_count - 1)` for short series, `point_count / gridline_count`
/// otherwise. Returns `None` where that formula divides by zero
/// (`point_count == 1`, or `gridline_count == 0`).
#[must_use]
pub fn x_axis_tick_label(tick_index: u32, point_count: usize, gridline_count: u32) -> Option<i64> {
    let points = i64::try_from(point_count).ok()?;
    let gridlines = i64::from(gridline_count);
    let scale = if points < gridlines + 1 {
        points.checked_div(points - 1)?
    } else {
        points.checked_div(gridlines)?
    };
    Some(scale * i64::from(tick_index))
}

/// Number of vertical x gridlines/ticks for `point_count` samples.
#[must_use]
pub fn x_tick_count(point_count: usize, gridline_count: u32) -> usize {
    let full = gridline_count as usize + 1;
    point_count.min(full)
}

/// `(left x, width)` of slot `index` when the plot width is split into `count`
/// equal bar slots.
#[must_use]
pub fn slot_for_index(index: usize, count: usize, frame_width: f64, offset: Offset) -> (f64, f64) {
    debug_assert!(index < count, "index {index} out of range for count {count}");
    let width = offset.plot_width(frame_width) / count.max(1) as f64;
    (offset.left + index as f64 * width, width)
}

/// Pixel x of the centre of bar slot `index` out of `count`.
#[must_use]
pub fn slot_center(index: usize, count: usize, frame_width: f64, offset: Offset) -> f64 {
    let (left, width) = slot_for_index(index, count, frame_width, offset);
    left + width / 2.0
}

/// What vertical ticks line up with: sample positions or bar-slot centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickAnchor {
    #[default]
    Point,
    SlotCenter,
}

/// Per-pass binding of frame, offset and value range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    pub frame: Frame,
    pub offset: Offset,
    pub range: ValueRange,
}

impl CoordinateMapper {
    #[must_use]
    pub const fn new(frame: Frame, offset: Offset, range: ValueRange) -> Self {
        Self {
            frame,
            offset,
            range,
        }
    }

    #[must_use]
    pub fn x(self, index: usize, count: usize) -> f64 {
        x_for_index(index, count, self.frame.width, self.offset)
    }

    #[must_use]
    pub fn y(self, value: f64) -> f64 {
        y_for_value(
            value,
            self.range.max,
            self.range.min,
            self.frame.height,
            self.offset,
        )
    }

    #[must_use]
    pub fn point(self, index: usize, count: usize, value: f64) -> PixelPoint {
        PixelPoint::new(self.x(index, count), self.y(value))
    }

    #[must_use]
    pub fn slot(self, index: usize, count: usize) -> (f64, f64) {
        slot_for_index(index, count, self.frame.width, self.offset)
    }

    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.offset.bottom_edge(self.frame.height)
    }

    #[must_use]
    pub fn left_x(self) -> f64 {
        self.offset.left
    }

    #[must_use]
    pub fn right_x(self) -> f64 {
        self.offset.right_edge(self.frame.width)
    }

    #[must_use]
    pub fn top_y(self) -> f64 {
        self.offset.top
    }

    /// `(tick value, pixel y)` for every horizontal gridline, bottom to top.
    #[must_use]
    pub fn y_ticks(self, grid: GridSpec) -> Vec<(f64, f64)> {
        if grid.y_gridline_count == 0 {
            return Vec::new();
        }
        (0..=grid.y_gridline_count)
            .map(|tick| {
                let value = y_axis_tick_value(tick, self.range.max, grid.y_gridline_count);
                (value, self.y(value))
            })
            .collect()
    }

    #[must_use]
    pub fn slot_center(self, index: usize, count: usize) -> f64 {
        slot_center(index, count, self.frame.width, self.offset)
    }

    /// `(label, pixel x)` for every vertical gridline, left to right.
    ///
    /// With `TickAnchor::SlotCenter` the ticks span the first to the last slot
    /// centre instead of the plot edges, so they fall on the bars when there
    /// is one tick per sample. The label is `None` where the legacy label
    /// formula is undefined.
    #[must_use]
    pub fn x_ticks(
        self,
        point_count: usize,
        grid: GridSpec,
        anchor: TickAnchor,
    ) -> Vec<(Option<i64>, f64)> {
        let ticks = x_tick_count(point_count, grid.x_gridline_count);
        (0..ticks)
            .map(|tick| {
                let tick_index = u32::try_from(tick).unwrap_or(u32::MAX);
                (
                    x_axis_tick_label(tick_index, point_count, grid.x_gridline_count),
                    self.tick_x(tick, ticks, point_count, anchor),
                )
            })
            .collect()
    }

    fn tick_x(self, tick: usize, ticks: usize, point_count: usize, anchor: TickAnchor) -> f64 {
        match anchor {
            TickAnchor::Point => self.x(tick, ticks),
            TickAnchor::SlotCenter => {
                let first = self.slot_center(0, point_count);
                if ticks <= 1 {
                    return first;
                }
                let last = self.slot_center(point_count - 1, point_count);
                first + tick as f64 * (last - first) / (ticks - 1) as f64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_labels_follow_sample_index() {
        assert_eq!(x_axis_tick_label(2, 3, 6), Some(2));
    }

    #[test]
    fn single_point_label_is_undefined() {
        assert_eq!(x_axis_tick_label(0, 1, 6), None);
    }

    #[test]
    fn slot_ticks_sit_on_slot_centres() {
        let mapper = CoordinateMapper::new(
            Frame::new(300.0, 200.0),
            Offset::new(31.0, 31.0, 31.0, 62.0),
            ValueRange::new(0.0, 10.0),
        );
        let xs: Vec<f64> = mapper
            .x_ticks(4, GridSpec::default(), TickAnchor::SlotCenter)
            .into_iter()
            .map(|(_, x)| x)
            .collect();
        assert_eq!(xs, [60.75, 120.25, 179.75, 239.25]);
    }

    #[test]
    fn long_series_labels_truncate_scale() {
        // 13 / 6 truncates to 2
        assert_eq!(x_axis_tick_label(6, 13, 6), Some(12));
    }
}
