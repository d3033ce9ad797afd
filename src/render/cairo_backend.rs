use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Canvas, Color, Path, PathCommand, Rect, RectStyle, StrokeStyle, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_stroked: usize,
    pub paths_filled: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango implementation of `Canvas`.
///
/// Either draws into an owned offscreen image surface (`CairoCanvas::new`)
/// or into a context supplied by the host view (`CairoCanvas::from_context`).
#[derive(Debug)]
pub struct CairoCanvas {
    context: Context,
    surface: Option<ImageSurface>,
    stats: CairoRenderStats,
}

impl CairoCanvas {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Canvas(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, Color::WHITE);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        Ok(Self {
            context,
            surface: Some(surface),
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            surface: None,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    fn append_path(&self, path: &Path) {
        self.context.new_path();
        for command in &path.commands {
            match *command {
                PathCommand::MoveTo(point) => self.context.move_to(point.x, point.y),
                PathCommand::LineTo(point) => self.context.line_to(point.x, point.y),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => self
                    .context
                    .curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y),
                PathCommand::Arc { center, radius } => {
                    self.context.new_sub_path();
                    self.context.arc(center.x, center.y, radius, 0.0, TAU);
                }
                PathCommand::Close => self.context.close_path(),
            }
        }
    }
}

impl Canvas for CairoCanvas {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> ChartResult<()> {
        self.append_path(path);
        apply_color(&self.context, style.color);
        self.context.set_line_width(style.width);
        self.context.set_dash(&style.dash, 0.0);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.context.set_dash(&[], 0.0);
        self.stats.paths_stroked += 1;
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()> {
        self.append_path(path);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.paths_filled += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, style: &RectStyle) -> ChartResult<()> {
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(&self.context, style.fill_color);
        if style.border_width > 0.0 {
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(&self.context, style.border_color);
            self.context.set_line_width(style.border_width);
            self.context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            self.context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_width((text.bounds.width * f64::from(pango::SCALE)) as i32);
        layout.set_alignment(match text.h_align {
            TextHAlign::Left => pango::Alignment::Left,
            TextHAlign::Center => pango::Alignment::Center,
            TextHAlign::Right => pango::Alignment::Right,
        });
        layout.set_text(&text.text);

        apply_color(&self.context, text.color);
        self.context.move_to(text.bounds.x, text.bounds.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Canvas(format!("{prefix}: {err}"))
}
