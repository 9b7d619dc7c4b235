use serde::{Deserialize, Serialize};

use crate::core::LinearScale;

/// Drags whose absolute horizontal distance is at most this many pixels
/// complete as clicks rather than span selections.
pub const SELECTION_CLICK_THRESHOLD_PX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Dragging,
    /// Drag ended within the click threshold.
    CompletedSmall,
    /// Drag ended beyond the click threshold and produced a span.
    CompletedSpan,
}

/// In-progress or last completed horizontal drag, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub origin_px: f64,
    pub delta_px: f64,
}

impl SelectionState {
    /// Drag edges ordered left to right, unclamped.
    #[must_use]
    pub fn edges(self) -> (f64, f64) {
        let end = self.origin_px + self.delta_px;
        (self.origin_px.min(end), self.origin_px.max(end))
    }
}

/// Geometry of the selection overlay bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionOverlay {
    pub left_px: f64,
    pub width_px: f64,
}

/// Pixel edges and located indices of a completed span, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanResolution {
    pub left_px: f64,
    pub right_px: f64,
    pub left_index: Option<usize>,
    pub right_index: Option<usize>,
}

/// Drag-selection state machine.
///
/// Owns the only mutable selection state of a chart. Rendering reads it
/// through [`Self::overlay`] and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionController {
    phase: SelectionPhase,
    state: SelectionState,
}

impl SelectionController {
    #[must_use]
    pub fn phase(self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn state(self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.phase == SelectionPhase::Dragging
    }

    /// Whether a click arriving now is the tail end of a span drag.
    #[must_use]
    pub fn suppresses_click(self) -> bool {
        self.phase == SelectionPhase::CompletedSpan
    }

    /// Starts a new drag from any phase, discarding the previous selection.
    pub fn pointer_down(&mut self, pixel_x: f64) {
        self.phase = SelectionPhase::Dragging;
        self.state = SelectionState {
            origin_px: pixel_x,
            delta_px: 0.0,
        };
    }

    /// Updates the drag delta. Returns `false` when no drag is active.
    pub fn pointer_move(&mut self, pixel_x: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state.delta_px = pixel_x - self.state.origin_px;
        true
    }

    /// Ends the drag and returns the completed phase, or `None` when no drag
    /// was active.
    pub fn pointer_up(&mut self, pixel_x: f64) -> Option<SelectionPhase> {
        if !self.pointer_move(pixel_x) {
            return None;
        }
        self.phase = if self.state.delta_px.abs() <= SELECTION_CLICK_THRESHOLD_PX {
            SelectionPhase::CompletedSmall
        } else {
            SelectionPhase::CompletedSpan
        };
        Some(self.phase)
    }

    /// Overlay bar for the current state, clamped to the x pixel range.
    #[must_use]
    pub fn overlay(self, x_scale: LinearScale) -> SelectionOverlay {
        let (left, right) = self.state.edges();
        let left_px = x_scale.clamp_pixel(left);
        let right_px = x_scale.clamp_pixel(right);
        SelectionOverlay {
            left_px,
            width_px: right_px - left_px,
        }
    }

    /// Clamps both drag edges, locates them and orders the result so the
    /// left index never exceeds the right one.
    ///
    /// Returns `None` unless the last drag completed as a span.
    pub fn resolve_span<F>(self, x_scale: LinearScale, locate: F) -> Option<SpanResolution>
    where
        F: Fn(f64) -> Option<usize>,
    {
        if self.phase != SelectionPhase::CompletedSpan {
            return None;
        }

        let (left, right) = self.state.edges();
        let left_px = x_scale.clamp_pixel(left);
        let right_px = x_scale.clamp_pixel(right);
        let mut left_index = locate(left_px);
        let mut right_index = locate(right_px);
        if let (Some(l), Some(r)) = (left_index, right_index) {
            if l > r {
                std::mem::swap(&mut left_index, &mut right_index);
            }
        }

        Some(SpanResolution {
            left_px,
            right_px,
            left_index,
            right_index,
        })
    }
}
