use std::f64::consts::FRAC_PI_2;

use tracing::warn;

use crate::core::{Tick, TickLabelFormat, date_ticks, numeric_ticks, y_tick_count};
use crate::error::ChartResult;
use crate::extensions::{ChartEventKind, GraphInput};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::BoxChart;

const TICK_STROKE_WIDTH: f64 = 1.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const POSITION_INDICATOR_WIDTH_PX: f64 = 2.0;
const Y_LABEL_LEFT_PX: f64 = 12.0;

impl<R: Renderer> BoxChart<R> {
    /// Ticks for the x axis: calendar-aligned on date axes, round numbers
    /// otherwise.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<Tick> {
        if let Some(date_field) = &self.date_field {
            let format = TickLabelFormat::date(self.config.date_format.clone());
            if let Some((first, last)) = self.series.date_extent(date_field) {
                return date_ticks(
                    first,
                    last,
                    self.config.x_date_span,
                    self.config.x_tick_count,
                    &format,
                );
            }
            warn!(field = %date_field, "date axis has no dates; falling back to numeric ticks");
        }
        numeric_ticks(
            self.scales.x(),
            self.config.x_tick_count,
            &TickLabelFormat::Raw,
        )
    }

    /// Ticks for the y axis, taken from the display override when present.
    #[must_use]
    pub fn y_ticks(&self) -> Vec<Tick> {
        let count = y_tick_count(
            self.geometry.plot_height(),
            self.config.vertical_tick_spacing,
        );
        numeric_ticks(
            self.scales.y_tick_scale(),
            count,
            &self.config.y_type.label_format(),
        )
    }

    /// Materializes the full scene for the current state.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.geometry);

        if let Some(graph) = &self.graph {
            graph.build(
                GraphInput {
                    series: &self.series,
                    scales: self.scales,
                    x_field: &self.x_field,
                    y_fields: &self.config.y_fields,
                },
                &mut frame,
            )?;
        }
        if self.config.show_ticks {
            self.push_x_ticks(&mut frame);
            self.push_y_ticks(&mut frame);
        }
        if self.config.show_labels {
            self.push_axis_labels(&mut frame);
        }
        if self.config.position_indicator {
            self.push_position_indicator(&mut frame);
        }
        if self.has_observer(ChartEventKind::SpanSelect) {
            self.push_selection_overlay(&mut frame);
        }

        Ok(frame)
    }

    fn push_x_ticks(&self, frame: &mut RenderFrame) {
        let padding = self.geometry.padding;
        let rule_top = frame.screen_y(padding.bottom);
        let rule_bottom = frame.screen_y(padding.bottom - self.config.x_tick_height);
        let x_scale = self.scales.x();

        for tick in self.x_ticks() {
            let x = x_scale.project(tick.value);
            frame.lines.push(LinePrimitive::new(
                x,
                rule_top,
                x,
                rule_bottom,
                TICK_STROKE_WIDTH,
                self.config.tick_color,
            ));
            if !tick.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    x,
                    rule_bottom + TICK_LABEL_GAP_PX + self.config.tick_font_size_px,
                    self.config.tick_font_size_px,
                    self.config.tick_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn push_y_ticks(&self, frame: &mut RenderFrame) {
        let left = self.geometry.padding.left;
        let right = left + self.geometry.plot_width() + 1.0;
        let tick_scale = self.scales.y_tick_scale();

        for tick in self.y_ticks() {
            let y = frame.screen_y(tick_scale.project(tick.value));
            frame.lines.push(LinePrimitive::new(
                left,
                y,
                right,
                y,
                TICK_STROKE_WIDTH,
                self.config.tick_color,
            ));
            if !tick.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    left - TICK_LABEL_GAP_PX,
                    y,
                    self.config.tick_font_size_px,
                    self.config.tick_color,
                    TextHAlign::Right,
                ));
            }
        }
    }

    fn push_axis_labels(&self, frame: &mut RenderFrame) {
        let labels = &self.config.labels;
        let size = self.config.label_font_size_px;
        if !labels.y.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    labels.y.clone(),
                    Y_LABEL_LEFT_PX,
                    self.geometry.height / 2.0,
                    size,
                    self.config.tick_color,
                    TextHAlign::Center,
                )
                .rotated(-FRAC_PI_2),
            );
        }
        if !labels.x.is_empty() {
            frame.texts.push(TextPrimitive::new(
                labels.x.clone(),
                self.geometry.width / 2.0,
                self.geometry.height,
                size,
                self.config.tick_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_position_indicator(&self, frame: &mut RenderFrame) {
        let Some(index) = self.selected_index else {
            return;
        };
        let Some(x) = self.series.value_at(index, &self.x_field) else {
            warn!(index, "selected point has no x value; skipping position indicator");
            return;
        };
        frame.rects.push(RectPrimitive::new(
            self.scales.x().project(x),
            self.geometry.padding.top,
            POSITION_INDICATOR_WIDTH_PX,
            self.geometry.plot_height(),
            self.config.position_indicator_color,
        ));
    }

    fn push_selection_overlay(&self, frame: &mut RenderFrame) {
        let overlay = self.selection_overlay();
        frame.rects.push(RectPrimitive::new(
            overlay.left_px,
            self.geometry.padding.top,
            overlay.width_px,
            self.geometry.plot_height(),
            self.config.select_color,
        ));
    }
}
