use serde::{Deserialize, Serialize};

use crate::core::{PlotGeometry, Record};
use crate::interaction::SelectionPhase;

/// Semantic event kinds an observer can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartEventKind {
    Hover,
    Leave,
    Click,
    SpanSelect,
}

/// One side of a span selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanEdge {
    pub index: Option<usize>,
    pub point: Option<Record>,
}

/// Data-relative events produced from pointer input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    Hover { index: usize, point: Record },
    Leave,
    Click { index: usize, point: Record },
    SpanSelect { left: SpanEdge, right: SpanEdge },
}

impl ChartEvent {
    #[must_use]
    pub fn kind(&self) -> ChartEventKind {
        match self {
            Self::Hover { .. } => ChartEventKind::Hover,
            Self::Leave => ChartEventKind::Leave,
            Self::Click { .. } => ChartEventKind::Click,
            Self::SpanSelect { .. } => ChartEventKind::SpanSelect,
        }
    }
}

/// Read-only chart snapshot passed along with every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub geometry: PlotGeometry,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub points_len: usize,
    pub selected_index: Option<usize>,
    pub selection_phase: SelectionPhase,
}

/// Subscriber to chart events.
///
/// The chart asks [`Self::observes`] before doing any index lookup, so an
/// observer only pays for the kinds it declares.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn observes(&self, kind: ChartEventKind) -> bool;
    fn on_event(&mut self, event: &ChartEvent, context: ChartContext);
}
