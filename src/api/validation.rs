use crate::core::PlotGeometry;
use crate::core::label_format::is_valid_date_pattern;
use crate::error::{ChartError, ChartResult};

use super::BoxChartConfig;

pub(super) fn validate_geometry(geometry: PlotGeometry) -> ChartResult<PlotGeometry> {
    if !geometry.is_valid() {
        return Err(ChartError::InvalidGeometry {
            width: geometry.width,
            height: geometry.height,
        });
    }

    let padding = geometry.padding;
    for (side, value) in [
        ("left", padding.left),
        ("right", padding.right),
        ("top", padding.top),
        ("bottom", padding.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{side} padding must be finite and >= 0"
            )));
        }
    }

    if geometry.plot_width() <= 0.0 || geometry.plot_height() <= 0.0 {
        return Err(ChartError::InvalidData(
            "paddings leave no room for the plot area".to_owned(),
        ));
    }

    Ok(geometry)
}

pub(super) fn validate_config(config: &BoxChartConfig) -> ChartResult<()> {
    validate_geometry(config.geometry)?;

    if config.x_field.is_empty() {
        return Err(ChartError::InvalidData(
            "x field name must not be empty".to_owned(),
        ));
    }
    if config.y_fields.is_empty() || config.y_fields.iter().any(String::is_empty) {
        return Err(ChartError::InvalidData(
            "at least one non-empty y field is required".to_owned(),
        ));
    }
    if config.x_tick_count == 0 {
        return Err(ChartError::InvalidData(
            "x tick count must be > 0".to_owned(),
        ));
    }

    for (name, value) in [
        ("vertical tick spacing", config.vertical_tick_spacing),
        ("tick font size", config.tick_font_size_px),
        ("label font size", config.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if !config.x_tick_height.is_finite() || config.x_tick_height < 0.0 {
        return Err(ChartError::InvalidData(
            "x tick height must be finite and >= 0".to_owned(),
        ));
    }

    if config.x_is_date && !is_valid_date_pattern(&config.date_format) {
        return Err(ChartError::InvalidData(format!(
            "date format `{}` is not a valid strftime pattern",
            config.date_format
        )));
    }

    config.tick_color.validate()?;
    config.select_color.validate()?;
    config.position_indicator_color.validate()?;
    Ok(())
}
