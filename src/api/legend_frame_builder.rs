use crate::core::{LegendDirection, SeriesSet};
use crate::render::{Rect, RectStyle, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartConfig, PassLayout};

const LABEL_GAP: f64 = 2.0;
const COLUMN_LABEL_WIDTH: f64 = 40.0;

/// Swatch + name per series, in insertion order.
pub(super) fn build_legend(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    layout: &PassLayout,
    series: &SeriesSet,
) {
    let style = &config.style;
    let swatch = style.legend_swatch_size;
    let label_width = match layout.legend.direction {
        LegendDirection::Row => (layout.legend.spacing - swatch - LABEL_GAP).max(swatch),
        LegendDirection::Column => COLUMN_LABEL_WIDTH,
    };

    for (index, item) in series.iter().enumerate() {
        let origin = layout.legend.entry_origin(index);
        frame.fill_rect(
            Rect::new(origin.x, origin.y, swatch, swatch),
            RectStyle::filled(item.color),
        );
        if item.name.is_empty() {
            continue;
        }
        frame.text(TextPrimitive::new(
            item.name.clone(),
            Rect::new(origin.x + swatch + LABEL_GAP, origin.y, label_width, swatch),
            style.legend_font_size_px,
            style.legend_text_color,
            TextHAlign::Left,
        ));
    }
}
