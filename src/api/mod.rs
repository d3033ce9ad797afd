pub mod animation;
mod axis_frame_builder;
mod chart_config;
mod chart_renderer;
mod highlight_frame_builder;
mod legend_frame_builder;
mod pass_layout;
mod render_style;
mod series_frame_builder;
mod validation;

pub use animation::{progress_at, reveal_count};
pub use chart_config::{ChartConfig, ChartKind};
pub use chart_renderer::ChartRenderer;
pub use highlight_frame_builder::resolve_highlight;
pub use pass_layout::PassLayout;
pub use render_style::RenderStyle;
