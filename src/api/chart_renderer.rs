use tracing::{debug, warn};

use crate::core::{PixelPoint, SeriesSet};
use crate::error::ChartResult;
use crate::interaction::{FrameSize, HighlightTarget, TouchInput};
use crate::render::{Canvas, RenderFrame};

use super::axis_frame_builder::{build_axis_grid, build_axis_labels};
use super::highlight_frame_builder::{build_highlight, resolve_highlight};
use super::legend_frame_builder::build_legend;
use super::series_frame_builder::build_series;
use super::{ChartConfig, PassLayout};

/// Render-pass entry point consumed by host views.
///
/// Holds nothing but the validated configuration: every pass recomputes
/// layout from its inputs, so two passes over the same inputs emit the same
/// command sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the configuration; applies from the next pass on.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn build_render_frame(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
    ) -> ChartResult<RenderFrame> {
        self.build_render_frame_at(series, frame_size, touch, 1.0)
    }

    /// Builds the frame with each series revealed up to `progress` in `[0, 1]`.
    ///
    /// With animation disabled in the config, `progress` is ignored and the
    /// chart is drawn fully revealed.
    pub fn build_render_frame_at(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
        progress: f64,
    ) -> ChartResult<RenderFrame> {
        series.validate()?;
        let progress = if self.config.animation_enabled {
            progress
        } else {
            1.0
        };
        let frame = frame_size.frame_size();
        let touch = touch.touch_position();
        let layout = PassLayout::resolve(&self.config, series, frame)?;
        debug!(
            series = series.len(),
            points = layout.point_count,
            width = frame.width,
            height = frame.height,
            max = layout.range.max,
            progress,
            "resolve render pass"
        );
        if layout.range.is_flat() {
            debug!(value = layout.range.max, "flat value range, samples sit on baseline");
        }

        let mut output = RenderFrame::new(frame);
        build_axis_grid(&mut output, &self.config, &layout);
        build_series(&mut output, &self.config, &layout, series, progress);
        if let Some(target) = self.highlight_for(&layout, series, touch, progress) {
            build_highlight(&mut output, &self.config, &layout, target);
        }
        build_axis_labels(&mut output, &self.config, &layout);
        if self.config.legend_visible {
            build_legend(&mut output, &self.config, &layout, series);
        }

        output.validate()?;
        Ok(output)
    }

    /// Runs one full pass and issues the resulting commands to `canvas`.
    pub fn render_pass(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
        canvas: &mut dyn Canvas,
    ) -> ChartResult<()> {
        self.render_pass_at(series, frame_size, touch, canvas, 1.0)
    }

    /// One animation tick; identical to `render_pass` at `progress == 1.0`
    /// or when animation is disabled.
    pub fn render_pass_at(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
        canvas: &mut dyn Canvas,
        progress: f64,
    ) -> ChartResult<()> {
        let frame = self.build_render_frame_at(series, frame_size, touch, progress)?;
        frame.replay(canvas).inspect_err(|err| {
            warn!(error = %err, commands = frame.len(), "canvas rejected render pass");
        })
    }

    /// Animation tick `elapsed_ms` after the animation started.
    pub fn render_pass_after(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
        canvas: &mut dyn Canvas,
        elapsed_ms: u64,
    ) -> ChartResult<()> {
        let progress = self.config.animation_progress(elapsed_ms);
        self.render_pass_at(series, frame_size, touch, canvas, progress)
    }

    /// Sample the highlight renderer would mark for `touch` on this frame.
    pub fn highlight_target(
        &self,
        series: &SeriesSet,
        frame_size: &dyn FrameSize,
        touch: &dyn TouchInput,
    ) -> ChartResult<Option<HighlightTarget>> {
        series.validate()?;
        let layout = PassLayout::resolve(&self.config, series, frame_size.frame_size())?;
        Ok(self.highlight_for(&layout, series, touch.touch_position(), 1.0))
    }

    fn highlight_for(
        &self,
        layout: &PassLayout,
        series: &SeriesSet,
        touch: Option<PixelPoint>,
        progress: f64,
    ) -> Option<HighlightTarget> {
        if !self.config.highlight_enabled {
            return None;
        }
        resolve_highlight(&self.config, layout, series, touch?, progress)
    }
}
