//! chart-box: coordinate, axis and pointer-interaction core for rectangular
//! x/y charts.
//!
//! The crate maps a data series onto pixel space, produces axis ticks and
//! labels, and turns raw pointer input into data-relative events
//! (hover, leave, click, span selection).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BoxChart, BoxChartConfig};
pub use error::{ChartError, ChartResult};
