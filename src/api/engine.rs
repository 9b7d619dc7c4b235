use tracing::debug;

use crate::core::{LinearScale, PlotGeometry, Record, SECONDS_FROM_FIRST, ScaleModel, Series};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartObserver, GraphLayer};
use crate::interaction::SelectionController;
use crate::render::Renderer;

use super::BoxChartConfig;
use super::validation::{validate_config, validate_geometry};

/// Rectangular x/y chart: scales, axis decorations and pointer interaction
/// over one data series.
///
/// Scales are rebuilt from the series on every setup and render pass.
pub struct BoxChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BoxChartConfig,
    pub(super) series: Series,
    /// Field used for positional math; `seconds_from_first` on date axes.
    pub(super) x_field: String,
    /// Original date field retained for labels on date axes.
    pub(super) date_field: Option<String>,
    pub(super) geometry: PlotGeometry,
    pub(super) scales: ScaleModel,
    pub(super) y_display_override: Option<LinearScale>,
    pub(super) selection: SelectionController,
    pub(super) selected_index: Option<usize>,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
    pub(super) graph: Option<Box<dyn GraphLayer>>,
}

impl<R: Renderer> BoxChart<R> {
    /// Prepares the series (date normalization or x sort) and runs the first
    /// setup pass with the configured geometry.
    pub fn new(renderer: R, config: BoxChartConfig, series: Series) -> ChartResult<Self> {
        validate_config(&config)?;

        let (series, x_field, date_field) = prepare_series(series, &config)?;
        let scales = ScaleModel::build(&series, &x_field, &config.y_fields, config.geometry)?;

        Ok(Self {
            renderer,
            geometry: config.geometry,
            config,
            series,
            x_field,
            date_field,
            scales,
            y_display_override: None,
            selection: SelectionController::default(),
            selected_index: None,
            observers: Vec::new(),
            graph: None,
        })
    }

    /// Setup hook: adopts new surface geometry and rebuilds the scales.
    pub fn setup_chart(&mut self, geometry: PlotGeometry) -> ChartResult<()> {
        self.geometry = validate_geometry(geometry)?;
        self.rebuild_scales()
    }

    /// Replaces the plotted series and rebuilds the scales.
    ///
    /// The selected index is cleared because it referred to the old data.
    pub fn set_series(&mut self, series: Series) -> ChartResult<()> {
        let (series, x_field, date_field) = prepare_series(series, &self.config)?;
        let scales = ScaleModel::build(&series, &x_field, &self.config.y_fields, self.geometry)?;
        self.series = series;
        self.x_field = x_field;
        self.date_field = date_field;
        self.selected_index = None;
        self.apply_scales(scales)
    }

    #[must_use]
    pub fn config(&self) -> &BoxChartConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Record> {
        self.series.get(index)
    }

    /// Field used for positional math along x.
    #[must_use]
    pub fn x_field(&self) -> &str {
        &self.x_field
    }

    #[must_use]
    pub fn date_field(&self) -> Option<&str> {
        self.date_field.as_deref()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Sets the externally highlighted index shown by the position indicator.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> ChartResult<()> {
        if let Some(index) = index {
            if index >= self.series.len() {
                return Err(ChartError::InvalidData(format!(
                    "selected index {index} is out of bounds for {} points",
                    self.series.len()
                )));
            }
        }
        self.selected_index = index;
        Ok(())
    }

    /// Attaches the layer drawing the data itself.
    pub fn set_graph_layer(&mut self, graph: Box<dyn GraphLayer>) {
        self.graph = Some(graph);
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.rebuild_scales()?;
        let frame = self.build_render_frame()?;
        debug!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "rendering chart frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn prepare_series(
    mut series: Series,
    config: &BoxChartConfig,
) -> ChartResult<(Series, String, Option<String>)> {
    if config.x_is_date {
        series.prepare_dates(&config.x_field)?;
        Ok((
            series,
            SECONDS_FROM_FIRST.to_owned(),
            Some(config.x_field.clone()),
        ))
    } else {
        series.sort_by_field(&config.x_field);
        Ok((series, config.x_field.clone(), None))
    }
}
