use crate::error::ChartResult;
use crate::render::{Canvas, Color, DrawCommand, Path, Rect, RectStyle, StrokeStyle, TextPrimitive};

/// Headless canvas that keeps every command it receives.
///
/// Used by tests and by hosts that want to inspect a pass without a real
/// drawing surface.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> ChartResult<()> {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            style: style.clone(),
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()> {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, style: &RectStyle) -> ChartResult<()> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            style: *style,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.commands.push(DrawCommand::DrawText(text.clone()));
        Ok(())
    }
}
