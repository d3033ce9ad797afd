use serde::{Deserialize, Serialize};

/// Drawing-surface size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Point in pixel space: origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Four-sided margin between the frame edge and the plotting rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Offset {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Horizontal extent of the plotting rectangle.
    #[must_use]
    pub fn plot_width(self, frame_width: f64) -> f64 {
        frame_width - self.left - self.right
    }

    /// Pixel y of the plot baseline.
    #[must_use]
    pub fn bottom_edge(self, frame_height: f64) -> f64 {
        frame_height - self.bottom
    }

    /// Pixel x of the right plot edge.
    #[must_use]
    pub fn right_edge(self, frame_width: f64) -> f64 {
        frame_width - self.right
    }

    #[must_use]
    pub fn contains(self, frame: Frame, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right_edge(frame.width)
            && point.y >= self.top
            && point.y <= self.bottom_edge(frame.height)
    }
}

/// Value window mapped onto the vertical plot extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.max == self.min
    }
}

/// Gridline count per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x_gridline_count: u32,
    pub y_gridline_count: u32,
}

impl GridSpec {
    #[must_use]
    pub const fn new(x_gridline_count: u32, y_gridline_count: u32) -> Self {
        Self {
            x_gridline_count,
            y_gridline_count,
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(6, 6)
    }
}
