use tracing::{debug, trace};

use crate::core::Record;
use crate::extensions::{ChartEvent, ChartEventKind, SpanEdge};
use crate::interaction::{SelectionOverlay, SelectionPhase, SelectionState};
use crate::render::Renderer;

use super::BoxChart;

impl<R: Renderer> BoxChart<R> {
    pub fn pointer_leave(&mut self) {
        self.emit_event(ChartEvent::Leave);
    }

    /// Updates an active drag and emits `Hover` for the nearest record.
    ///
    /// No lookup happens unless an observer wants hover events.
    pub fn pointer_move(&mut self, pixel_x: f64) {
        if self.selection.pointer_move(pixel_x) {
            trace!(delta_px = self.selection.state().delta_px, "selection drag updated");
        }
        if !self.has_observer(ChartEventKind::Hover) {
            return;
        }
        if let Some((index, point)) = self.resolve_point(pixel_x) {
            self.emit_event(ChartEvent::Hover { index, point });
        }
    }

    /// Emits `Click` for the nearest record unless the click closes a span drag.
    pub fn pointer_click(&mut self, pixel_x: f64) {
        if self.selection.suppresses_click() {
            trace!("click suppressed after span selection");
            return;
        }
        if !self.has_observer(ChartEventKind::Click) {
            return;
        }
        if let Some((index, point)) = self.resolve_point(pixel_x) {
            self.emit_event(ChartEvent::Click { index, point });
        }
    }

    /// Starts a drag selection when span selection is observed.
    pub fn pointer_down(&mut self, pixel_x: f64) {
        if !self.has_observer(ChartEventKind::SpanSelect) {
            return;
        }
        self.selection.pointer_down(pixel_x);
    }

    /// Completes a drag; drags beyond the click threshold emit `SpanSelect`.
    pub fn pointer_up(&mut self, pixel_x: f64) {
        let Some(phase) = self.selection.pointer_up(pixel_x) else {
            return;
        };
        if phase != SelectionPhase::CompletedSpan {
            return;
        }

        let selection = self.selection;
        let Some(span) = selection.resolve_span(self.scales.x(), |px| self.locate_index(px)) else {
            return;
        };
        debug!(
            left_px = span.left_px,
            right_px = span.right_px,
            left_index = ?span.left_index,
            right_index = ?span.right_index,
            "span selected"
        );

        let edge = |index: Option<usize>| SpanEdge {
            index,
            point: index.and_then(|i| self.series.get(i).cloned()),
        };
        let event = ChartEvent::SpanSelect {
            left: edge(span.left_index),
            right: edge(span.right_index),
        };
        self.emit_event(event);
    }

    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    #[must_use]
    pub fn selection_overlay(&self) -> SelectionOverlay {
        self.selection.overlay(self.scales.x())
    }

    fn resolve_point(&self, pixel_x: f64) -> Option<(usize, Record)> {
        let index = self.locate_index(pixel_x)?;
        let point = self.series.get(index)?.clone();
        Some((index, point))
    }
}
