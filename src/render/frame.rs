use serde::{Deserialize, Serialize};

use crate::core::Frame;
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color, Path, Rect, RectStyle, StrokeStyle, TextPrimitive};

/// One call into the `Canvas` capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    StrokePath { path: Path, style: StrokeStyle },
    FillPath { path: Path, color: Color },
    FillRect { rect: Rect, style: RectStyle },
    DrawText(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::StrokePath { path, style } => {
                path.validate()?;
                style.validate()
            }
            Self::FillPath { path, color } => {
                path.validate()?;
                color.validate()
            }
            Self::FillRect { rect, style } => {
                rect.validate()?;
                style.validate()
            }
            Self::DrawText(text) => text.validate(),
        }
    }

    pub fn issue(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
        match self {
            Self::StrokePath { path, style } => canvas.stroke_path(path, style),
            Self::FillPath { path, color } => canvas.fill_path(path, *color),
            Self::FillRect { rect, style } => canvas.fill_rect(*rect, style),
            Self::DrawText(text) => canvas.draw_text(text),
        }
    }
}

/// Ordered draw commands produced by one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub frame: Frame,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            commands: Vec::new(),
        }
    }

    pub fn stroke(&mut self, path: Path, style: StrokeStyle) {
        if !path.is_empty() {
            self.commands.push(DrawCommand::StrokePath { path, style });
        }
    }

    pub fn fill(&mut self, path: Path, color: Color) {
        if !path.is_empty() {
            self.commands.push(DrawCommand::FillPath { path, color });
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, style: RectStyle) {
        self.commands.push(DrawCommand::FillRect { rect, style });
    }

    pub fn text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::DrawText(text));
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.frame.is_valid() {
            return Err(ChartError::InvalidFrame {
                width: self.frame.width,
                height: self.frame.height,
            });
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    /// Issues every command to `canvas` in order, stopping at the first failure.
    pub fn replay(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
        for command in &self.commands {
            command.issue(canvas)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::DrawText(_)))
            .count()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::DrawText(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}
