use serde::{Deserialize, Serialize};

/// Space reserved between the drawing surface edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

/// Surface size and paddings handed to the chart on every setup pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
}

impl PlotGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Horizontal pixel interval available to data, `[left, width - right]`.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.padding.left, self.width - self.padding.right)
    }

    /// Vertical pixel interval available to data, measured bottom-up.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.padding.bottom, self.height - self.padding.top)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.padding.bottom - self.padding.top
    }
}
