pub mod layout;
pub mod mapper;
pub mod range;
pub mod series;
pub mod types;

pub use layout::{
    LANDSCAPE_SCALE, LEGEND_LEFT_INSET, LEGEND_SIDE_GAP, LayoutPlanner, LegendDirection,
    LegendLayout, LegendPlacement, Orientation, PORTRAIT_SCALE, compute_offset,
};
pub use mapper::{
    CoordinateMapper, TickAnchor, slot_center, slot_for_index, x_axis_tick_label, x_for_index,
    x_tick_count, y_axis_tick_value, y_for_value,
};
pub use range::{DEFAULT_VALUE_PADDING, RangeAggregator};
pub use series::{Series, SeriesSet};
pub use types::{Frame, GridSpec, Offset, PixelPoint, ValueRange};
