pub mod label_format;
pub mod primitives;
pub mod scale;
pub mod scale_model;
pub mod series;
pub mod ticks;
pub mod types;

pub use label_format::{
    DEFAULT_DATE_FORMAT, TickLabelFormat, format_file_size, format_number, format_tick_label,
};
pub use scale::{Axis, DEGENERATE_DOMAIN_SPAN, LinearScale};
pub use scale_model::{ScaleModel, Y_HEADROOM_FACTOR};
pub use series::{FieldValue, Record, SECONDS_FROM_FIRST, Series};
pub use ticks::{
    DateSpan, MIN_TICK_COUNT, Tick, date_ticks, nice_tick_values, numeric_ticks, y_tick_count,
};
pub use types::{Padding, PlotGeometry};
