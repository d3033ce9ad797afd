//! Host-side inputs read once at the start of every render pass.
//!
//! The host view captures raw touch/resize events, stores them in a snapshot
//! and requests a redraw; the core never holds on to them between passes.

use serde::{Deserialize, Serialize};

use crate::core::{Frame, PixelPoint};

/// Current drawing-surface size.
pub trait FrameSize {
    fn frame_size(&self) -> Frame;
}

/// Last known pointer/touch position, in the same pixel space as `Canvas`.
pub trait TouchInput {
    fn touch_position(&self) -> Option<PixelPoint>;
}

impl FrameSize for Frame {
    fn frame_size(&self) -> Frame {
        *self
    }
}

/// Immutable touch snapshot handed to one pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchSnapshot {
    pub position: Option<PixelPoint>,
}

impl TouchSnapshot {
    #[must_use]
    pub const fn none() -> Self {
        Self { position: None }
    }

    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            position: Some(PixelPoint::new(x, y)),
        }
    }
}

impl TouchInput for TouchSnapshot {
    fn touch_position(&self) -> Option<PixelPoint> {
        self.position
    }
}

/// Sample picked by the highlight renderer for a touch position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightTarget {
    pub series_index: usize,
    pub point_index: usize,
    pub value: f64,
    pub position: PixelPoint,
}
