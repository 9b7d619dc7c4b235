use crate::core::{ScaleModel, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RenderFrame};

/// Inputs handed to a graph layer during a render pass.
#[derive(Debug, Clone, Copy)]
pub struct GraphInput<'a> {
    pub series: &'a Series,
    pub scales: ScaleModel,
    pub x_field: &'a str,
    pub y_fields: &'a [String],
}

/// Draws the data representation (lines, areas, bars) of a box chart.
///
/// Axis decorations are added by the chart after the layer ran.
pub trait GraphLayer {
    fn build(&self, input: GraphInput<'_>, frame: &mut RenderFrame) -> ChartResult<()>;
}

/// Polyline per y field.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGraph {
    pub colors: Vec<Color>,
    pub stroke_width: f64,
}

impl Default for LineGraph {
    fn default() -> Self {
        Self {
            colors: vec![Color::from_rgba8(0x1f, 0x77, 0xb4, 1.0)],
            stroke_width: 1.5,
        }
    }
}

impl GraphLayer for LineGraph {
    fn build(&self, input: GraphInput<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidData(
                "line graph needs at least one color".to_owned(),
            ));
        }

        let x_scale = input.scales.x();
        let y_scale = input.scales.y();
        for (field_index, field) in input.y_fields.iter().enumerate() {
            let color = self.colors[field_index % self.colors.len()];
            let mut previous: Option<(f64, f64)> = None;
            for record in input.series.records() {
                let (Some(x), Some(y)) = (record.number(input.x_field), record.number(field))
                else {
                    previous = None;
                    continue;
                };
                let point = (x_scale.project(x), frame.screen_y(y_scale.project(y)));
                if let Some((x1, y1)) = previous {
                    frame.lines.push(LinePrimitive::new(
                        x1,
                        y1,
                        point.0,
                        point.1,
                        self.stroke_width,
                        color,
                    ));
                }
                previous = Some(point);
            }
        }
        Ok(())
    }
}
