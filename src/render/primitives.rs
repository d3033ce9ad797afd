use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One step of a pixel-space path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
    /// Full circle around `center`.
    Arc { center: PixelPoint, radius: f64 },
    Close,
}

impl PathCommand {
    fn points(&self) -> SmallVec<[PixelPoint; 3]> {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => SmallVec::from_slice(&[point]),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => SmallVec::from_slice(&[control1, control2, to]),
            Self::Arc { center, .. } => SmallVec::from_slice(&[center]),
            Self::Close => SmallVec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn line(from: PixelPoint, to: PixelPoint) -> Self {
        Self::new().move_to(from).line_to(to)
    }

    #[must_use]
    pub fn circle(center: PixelPoint, radius: f64) -> Self {
        Self {
            commands: vec![PathCommand::Arc { center, radius }],
        }
    }

    #[must_use]
    pub fn move_to(mut self, point: PixelPoint) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    #[must_use]
    pub fn line_to(mut self, point: PixelPoint) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    #[must_use]
    pub fn cubic_to(mut self, control1: PixelPoint, control2: PixelPoint, to: PixelPoint) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            if let PathCommand::Arc { radius, .. } = command {
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "arc radius must be finite and > 0".to_owned(),
                    ));
                }
            }
            if command
                .points()
                .iter()
                .any(|point| !point.x.is_finite() || !point.y.is_finite())
            {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Stroke parameters for `Canvas::stroke_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Alternating on/off lengths; empty means a solid line.
    pub dash: SmallVec<[f64; 4]>,
}

impl StrokeStyle {
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::from_slice(dash),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self
            .dash
            .iter()
            .any(|length| !length.is_finite() || *length <= 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill and optional border for `Canvas::fill_rect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    pub fill_color: Color,
    pub border_color: Color,
    /// `0.0` disables the border.
    pub border_width: f64,
}

impl RectStyle {
    #[must_use]
    pub const fn filled(fill_color: Color) -> Self {
        Self {
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment inside `TextPrimitive::bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label laid out in a rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub bounds: Rect,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        bounds: Rect,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            bounds,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        self.bounds.validate()?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
