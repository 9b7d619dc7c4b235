use tracing::trace;

use crate::extensions::{ChartContext, ChartEvent};
use crate::render::Renderer;

use super::BoxChart;

impl<R: Renderer> BoxChart<R> {
    pub(super) fn chart_context(&self) -> ChartContext {
        ChartContext {
            geometry: self.geometry,
            x_domain: self.scales.x().domain(),
            y_domain: self.scales.y().domain(),
            points_len: self.series.len(),
            selected_index: self.selected_index,
            selection_phase: self.selection.phase(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.chart_context();
        let kind = event.kind();
        for observer in &mut self.observers {
            if observer.observes(kind) {
                trace!(observer = observer.id(), ?kind, "dispatching chart event");
                observer.on_event(&event, context);
            }
        }
    }
}
