use serde::{Deserialize, Serialize};

use crate::core::types::{Frame, Offset, PixelPoint};

/// Left/right multiplier used in landscape orientation.
pub const LANDSCAPE_SCALE: f64 = 70.0 / 31.0;
pub const PORTRAIT_SCALE: f64 = 1.0;

/// Horizontal distance between consecutive legend entries.
pub const LEGEND_ENTRY_SPACING: f64 = 45.0;
/// Vertical distance between legend entries stacked in a column.
pub const LEGEND_ROW_SPACING: f64 = 16.0;
/// Distance of a bottom legend row from the frame bottom.
pub const LEGEND_BOTTOM_INSET: f64 = 30.0;
/// Gap between the right plot edge and a right-hand legend column.
pub const LEGEND_SIDE_GAP: f64 = 10.0;
/// Distance of a left-hand legend column from the frame's left edge.
pub const LEGEND_LEFT_INSET: f64 = 5.0;

const EDGE: f64 = 31.0;
const LEGEND_EDGE: f64 = 70.0;

/// Where the legend sits; each placement reserves its own plot margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendPlacement {
    #[default]
    Bottom,
    Top,
    Right,
    Left,
    /// Caller positions the legend; plot margins follow `Bottom`.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn landscape_scale(self) -> f64 {
        match self {
            Self::Portrait => PORTRAIT_SCALE,
            Self::Landscape => LANDSCAPE_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendDirection {
    Row,
    Column,
}

/// Anchor and flow of legend entries for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub origin: PixelPoint,
    pub direction: LegendDirection,
    pub spacing: f64,
}

impl LegendLayout {
    /// Top-left corner of the swatch for entry `index`.
    #[must_use]
    pub fn entry_origin(self, index: usize) -> PixelPoint {
        let step = self.spacing * index as f64;
        match self.direction {
            LegendDirection::Row => PixelPoint::new(self.origin.x + step, self.origin.y),
            LegendDirection::Column => PixelPoint::new(self.origin.x, self.origin.y + step),
        }
    }
}

/// Resolves plot margins and legend anchoring from the legend policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlanner {
    pub placement: LegendPlacement,
    pub custom_legend: Option<PixelPoint>,
    pub landscape_scale: f64,
}

impl LayoutPlanner {
    #[must_use]
    pub fn new(
        placement: LegendPlacement,
        custom_legend: Option<PixelPoint>,
        landscape_scale: f64,
    ) -> Self {
        Self {
            placement,
            custom_legend,
            landscape_scale,
        }
    }

    #[must_use]
    pub fn offset(self) -> Offset {
        compute_offset(self.placement, self.landscape_scale)
    }

    /// Legend anchor for `frame`, given the offset already computed for this pass.
    #[must_use]
    pub fn legend_layout(self, frame: Frame, offset: Offset) -> LegendLayout {
        let row_spacing = LEGEND_ENTRY_SPACING * self.landscape_scale;
        match self.placement {
            LegendPlacement::Bottom => LegendLayout {
                origin: PixelPoint::new(offset.left, frame.height - LEGEND_BOTTOM_INSET),
                direction: LegendDirection::Row,
                spacing: row_spacing,
            },
            LegendPlacement::Top => LegendLayout {
                origin: PixelPoint::new(offset.left, offset.top - LEGEND_BOTTOM_INSET),
                direction: LegendDirection::Row,
                spacing: row_spacing,
            },
            LegendPlacement::Right => LegendLayout {
                origin: PixelPoint::new(
                    offset.right_edge(frame.width) + LEGEND_SIDE_GAP,
                    offset.top,
                ),
                direction: LegendDirection::Column,
                spacing: LEGEND_ROW_SPACING,
            },
            LegendPlacement::Left => LegendLayout {
                origin: PixelPoint::new(LEGEND_LEFT_INSET, offset.top),
                direction: LegendDirection::Column,
                spacing: LEGEND_ROW_SPACING,
            },
            LegendPlacement::Custom => LegendLayout {
                origin: self.custom_legend.unwrap_or(PixelPoint::new(0.0, 0.0)),
                direction: LegendDirection::Row,
                spacing: row_spacing,
            },
        }
    }
}

/// Plot margins for `placement`; `landscape_scale` stretches left and right only.
#[must_use]
pub fn compute_offset(placement: LegendPlacement, landscape_scale: f64) -> Offset {
    debug_assert!(
        landscape_scale.is_finite() && landscape_scale > 0.0,
        "landscape scale must be finite and > 0"
    );
    let (left, right, bottom, top) = match placement {
        LegendPlacement::Bottom | LegendPlacement::Custom => (EDGE, EDGE, 62.0, 20.0),
        LegendPlacement::Top => (EDGE, EDGE, EDGE, 50.0),
        LegendPlacement::Right => (EDGE, LEGEND_EDGE, EDGE, 20.0),
        LegendPlacement::Left => (LEGEND_EDGE, EDGE, EDGE, 20.0),
    };
    Offset::new(left * landscape_scale, right * landscape_scale, top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_placement_keeps_bottom_margins() {
        let custom = compute_offset(LegendPlacement::Custom, PORTRAIT_SCALE);
        assert_eq!(custom, compute_offset(LegendPlacement::Bottom, PORTRAIT_SCALE));
    }

    #[test]
    fn row_legend_steps_horizontally() {
        let layout = LegendLayout {
            origin: PixelPoint::new(10.0, 5.0),
            direction: LegendDirection::Row,
            spacing: 45.0,
        };
        assert_eq!(layout.entry_origin(2), PixelPoint::new(100.0, 5.0));
    }
}
