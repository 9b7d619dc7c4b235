use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, LinearScale, PlotGeometry, Series};
use crate::error::{ChartError, ChartResult};

/// Multiplier applied to the largest y value so the highest point never
/// touches the top edge of the plot.
pub const Y_HEADROOM_FACTOR: f64 = 1.2;

/// Data-to-pixel mappings for one setup pass.
///
/// Pixel space is bottom-up: the y range runs from the bottom padding to the
/// top of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleModel {
    x: LinearScale,
    y: LinearScale,
    y_display: Option<LinearScale>,
}

impl ScaleModel {
    #[must_use]
    pub fn new(x: LinearScale, y: LinearScale) -> Self {
        Self {
            x,
            y,
            y_display: None,
        }
    }

    /// Fits both scales from series extrema and plot geometry.
    pub fn build<S: AsRef<str>>(
        series: &Series,
        x_field: &str,
        y_fields: &[S],
        geometry: PlotGeometry,
    ) -> ChartResult<Self> {
        if !geometry.is_valid() {
            return Err(ChartError::InvalidGeometry {
                width: geometry.width,
                height: geometry.height,
            });
        }
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "scales cannot be built from an empty series".to_owned(),
            ));
        }

        let x_min = series
            .min_value(x_field)
            .ok_or_else(|| ChartError::MissingField(x_field.to_owned()))?;
        let x_max = series
            .max_value(x_field)
            .ok_or_else(|| ChartError::MissingField(x_field.to_owned()))?;
        let y_max = series.max_value_across(y_fields).ok_or_else(|| {
            let names: Vec<&str> = y_fields.iter().map(AsRef::as_ref).collect();
            ChartError::MissingField(names.join(", "))
        })?;

        let (x_lo, x_hi) = geometry.x_range();
        let (y_lo, y_hi) = geometry.y_range();
        let x = LinearScale::with_range(x_min, x_max, x_lo, x_hi)?;
        let y = LinearScale::with_range(0.0, y_max * Y_HEADROOM_FACTOR, y_lo, y_hi)?;

        debug!(
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            points = series.len(),
            "built chart scales"
        );
        Ok(Self::new(x, y))
    }

    /// Attaches a scale used only for y tick labels.
    ///
    /// The override is re-ranged onto the primary y pixel range so ticks line
    /// up with the plot area.
    pub fn with_y_display(mut self, display: LinearScale) -> ChartResult<Self> {
        let (lo, hi) = self.y.range();
        self.y_display = Some(display.with_pixel_range(lo, hi)?);
        Ok(self)
    }

    #[must_use]
    pub fn x(self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y(self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn y_display(self) -> Option<LinearScale> {
        self.y_display
    }

    /// Scale used to place y tick labels.
    #[must_use]
    pub fn y_tick_scale(self) -> LinearScale {
        self.y_display.unwrap_or(self.y)
    }

    #[must_use]
    pub fn scale(self, axis: Axis) -> LinearScale {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns `pixel` if it lies in the axis' pixel range, otherwise the
    /// nearest range boundary.
    #[must_use]
    pub fn clamp(self, axis: Axis, pixel: f64) -> f64 {
        self.scale(axis).clamp_pixel(pixel)
    }

    /// String-keyed variant of [`Self::clamp`]; unknown axes yield `None`.
    #[must_use]
    pub fn clamp_named(self, axis: &str, pixel: f64) -> Option<f64> {
        let axis = axis.parse::<Axis>().ok()?;
        Some(self.clamp(axis, pixel))
    }
}
