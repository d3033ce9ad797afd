//! simple-charts: layout and coordinate-mapping core for line and bar charts.
//!
//! A render pass maps series onto pixel space (`core`), turns the result into
//! an ordered list of draw commands (`api`), and hands those to a host
//! supplied `render::Canvas`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartRenderer};
pub use error::{ChartError, ChartResult};
