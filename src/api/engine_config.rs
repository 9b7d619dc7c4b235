use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_DATE_FORMAT, DateSpan, PlotGeometry, TickLabelFormat};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// How y tick values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YValueType {
    #[default]
    Raw,
    /// Values are byte counts shown with file-size units.
    Bytes,
}

impl YValueType {
    #[must_use]
    pub fn label_format(self) -> TickLabelFormat {
        match self {
            Self::Raw => TickLabelFormat::Raw,
            Self::Bytes => TickLabelFormat::Bytes,
        }
    }
}

/// Axis title text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "X".to_owned(),
            y: "Y".to_owned(),
        }
    }
}

/// Static chart configuration, read once at construction.
///
/// Serializable so hosts can keep chart setups in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxChartConfig {
    pub geometry: PlotGeometry,
    #[serde(default = "default_x_field")]
    pub x_field: String,
    #[serde(default = "default_y_fields")]
    pub y_fields: Vec<String>,
    #[serde(default)]
    pub x_is_date: bool,
    #[serde(default)]
    pub x_date_span: DateSpan,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default)]
    pub show_ticks: bool,
    #[serde(default)]
    pub show_labels: bool,
    #[serde(default = "default_tick_color")]
    pub tick_color: Color,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_vertical_tick_spacing")]
    pub vertical_tick_spacing: f64,
    #[serde(default = "default_x_tick_height")]
    pub x_tick_height: f64,
    #[serde(default)]
    pub labels: AxisLabels,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_select_color")]
    pub select_color: Color,
    #[serde(default)]
    pub position_indicator: bool,
    #[serde(default = "default_position_indicator_color")]
    pub position_indicator_color: Color,
    #[serde(default)]
    pub y_type: YValueType,
}

impl BoxChartConfig {
    /// Creates a config plotting field `y` against field `x`.
    #[must_use]
    pub fn new(geometry: PlotGeometry) -> Self {
        Self {
            geometry,
            x_field: default_x_field(),
            y_fields: default_y_fields(),
            x_is_date: false,
            x_date_span: DateSpan::default(),
            x_tick_count: default_x_tick_count(),
            show_ticks: false,
            show_labels: false,
            tick_color: default_tick_color(),
            tick_font_size_px: default_tick_font_size_px(),
            date_format: default_date_format(),
            vertical_tick_spacing: default_vertical_tick_spacing(),
            x_tick_height: default_x_tick_height(),
            labels: AxisLabels::default(),
            label_font_size_px: default_label_font_size_px(),
            select_color: default_select_color(),
            position_indicator: false,
            position_indicator_color: default_position_indicator_color(),
            y_type: YValueType::default(),
        }
    }

    #[must_use]
    pub fn with_x_field(mut self, field: impl Into<String>) -> Self {
        self.x_field = field.into();
        self
    }

    #[must_use]
    pub fn with_y_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.y_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Treats the x field as a date, bucketing ticks by `span`.
    #[must_use]
    pub fn with_date_x(mut self, span: DateSpan) -> Self {
        self.x_is_date = true;
        self.x_date_span = span;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.show_labels = true;
        self.labels = AxisLabels {
            x: x.into(),
            y: y.into(),
        };
        self
    }

    #[must_use]
    pub fn with_position_indicator(mut self, show: bool) -> Self {
        self.position_indicator = show;
        self
    }

    #[must_use]
    pub fn with_y_type(mut self, y_type: YValueType) -> Self {
        self.y_type = y_type;
        self
    }

    #[must_use]
    pub fn with_vertical_tick_spacing(mut self, spacing: f64) -> Self {
        self.vertical_tick_spacing = spacing;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_x_field() -> String {
    "x".to_owned()
}

fn default_y_fields() -> Vec<String> {
    vec!["y".to_owned()]
}

fn default_x_tick_count() -> usize {
    7
}

fn default_tick_color() -> Color {
    Color::from_rgba8(0x55, 0x55, 0x55, 1.0)
}

fn default_tick_font_size_px() -> f64 {
    10.0
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_vertical_tick_spacing() -> f64 {
    35.0
}

fn default_x_tick_height() -> f64 {
    10.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_select_color() -> Color {
    Color::from_rgba8(255, 128, 128, 0.4)
}

fn default_position_indicator_color() -> Color {
    Color::BLACK
}
