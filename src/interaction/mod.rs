mod locator;
mod selection;

pub use locator::{IndexLocator, LOCATE_EDGE_TOLERANCE_PX, nearest_index};
pub use selection::{
    SELECTION_CLICK_THRESHOLD_PX, SelectionController, SelectionOverlay, SelectionPhase,
    SelectionState, SpanResolution,
};
