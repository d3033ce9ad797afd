mod frame;
mod primitives;
mod recording_canvas;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{
    Color, Path, PathCommand, Rect, RectStyle, StrokeStyle, TextHAlign, TextPrimitive,
};
pub use recording_canvas::RecordingCanvas;

use crate::error::ChartResult;

/// Drawing capability a render pass issues its commands to.
///
/// Coordinates are pixels, origin top-left. Implementations own every raw
/// drawing primitive; the chart core only computes geometry.
pub trait Canvas {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> ChartResult<()>;
    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()>;
    fn fill_rect(&mut self, rect: Rect, style: &RectStyle) -> ChartResult<()>;
    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, CairoRenderStats};
