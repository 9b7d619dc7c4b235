use crate::core::PlotGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Everything one chart draw pass emits, in top-down screen pixels.
///
/// Primitives are stored in paint order: graph layer first, then axis
/// decorations, then the position indicator and selection overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub geometry: PlotGeometry,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: PlotGeometry) -> Self {
        Self {
            geometry,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Flips a bottom-up scale pixel into screen space.
    #[must_use]
    pub fn screen_y(&self, plot_y: f64) -> f64 {
        self.geometry.height - plot_y
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// Checks the surface and every primitive; the first failure names the
    /// offending primitive.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.geometry.is_valid() {
            return Err(ChartError::InvalidGeometry {
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }

        let tag = |kind: &str, index: usize, err: ChartError| match err {
            ChartError::InvalidData(message) => {
                ChartError::InvalidData(format!("{kind} #{index}: {message}"))
            }
            other => other,
        };
        for (index, line) in self.lines.iter().enumerate() {
            line.validate().map_err(|e| tag("line", index, e))?;
        }
        for (index, rect) in self.rects.iter().enumerate() {
            rect.validate().map_err(|e| tag("rect", index, e))?;
        }
        for (index, text) in self.texts.iter().enumerate() {
            text.validate().map_err(|e| tag("text", index, e))?;
        }
        Ok(())
    }
}
