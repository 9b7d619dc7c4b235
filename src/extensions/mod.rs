//! Extension seams: event observers and graph layers.

pub mod graph;
pub mod observers;

pub use graph::{GraphInput, GraphLayer, LineGraph};
pub use observers::{ChartContext, ChartEvent, ChartEventKind, ChartObserver, SpanEdge};
