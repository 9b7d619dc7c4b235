mod axis_scene_builder;
mod engine;
mod engine_config;
mod observer_dispatch;
mod observer_registry;
mod pointer_controller;
mod scale_coordinator;
mod validation;

pub use engine::BoxChart;
pub use engine_config::{AxisLabels, BoxChartConfig, YValueType};
