use crate::core::{Axis, LinearScale, ScaleModel};
use crate::error::ChartResult;
use crate::interaction::IndexLocator;
use crate::render::Renderer;

use super::BoxChart;

impl<R: Renderer> BoxChart<R> {
    #[must_use]
    pub fn scales(&self) -> ScaleModel {
        self.scales
    }

    /// Installs a y scale used only for tick labels, e.g. a byte-size or
    /// logarithmic display. Data keeps projecting through the primary y scale.
    pub fn set_y_display_scale(&mut self, display: Option<LinearScale>) -> ChartResult<()> {
        self.y_display_override = display;
        self.rebuild_scales()
    }

    #[must_use]
    pub fn map_x_to_pixel(&self, x: f64) -> f64 {
        self.scales.x().project(x)
    }

    #[must_use]
    pub fn map_pixel_to_x(&self, pixel: f64) -> f64 {
        self.scales.x().invert(pixel)
    }

    #[must_use]
    pub fn map_y_to_pixel(&self, y: f64) -> f64 {
        self.scales.y().project(y)
    }

    #[must_use]
    pub fn map_pixel_to_y(&self, pixel: f64) -> f64 {
        self.scales.y().invert(pixel)
    }

    /// Clamps a pixel coordinate into the plot range of `axis`.
    #[must_use]
    pub fn clamp_to_plot(&self, axis: Axis, pixel: f64) -> f64 {
        self.scales.clamp(axis, pixel)
    }

    /// String-keyed clamp; identifiers other than `x` and `y` yield `None`.
    #[must_use]
    pub fn clamp_to_plot_named(&self, axis: &str, pixel: f64) -> Option<f64> {
        self.scales.clamp_named(axis, pixel)
    }

    /// Record index nearest to a pointer x coordinate.
    #[must_use]
    pub fn locate_index(&self, pixel_x: f64) -> Option<usize> {
        IndexLocator::new(self.scales.x(), &self.series, &self.x_field).locate(pixel_x)
    }

    pub(super) fn rebuild_scales(&mut self) -> ChartResult<()> {
        let scales = ScaleModel::build(
            &self.series,
            &self.x_field,
            &self.config.y_fields,
            self.geometry,
        )?;
        self.apply_scales(scales)
    }

    pub(super) fn apply_scales(&mut self, scales: ScaleModel) -> ChartResult<()> {
        self.scales = match self.y_display_override {
            Some(display) => scales.with_y_display(display)?,
            None => scales,
        };
        Ok(())
    }
}
