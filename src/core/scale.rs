use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Width given to a degenerate (`min == max`) domain, centered on the value.
pub const DEGENERATE_DOMAIN_SPAN: f64 = 1.0;

/// Plot axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl FromStr for Axis {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(ChartError::InvalidAxis(other.to_owned())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Affine mapping between a data-space domain and a pixel-space range.
///
/// Domain and range keep the order they were given in, so reversed axes map
/// monotonically in the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::with_range(domain_start, domain_end, 0.0, 1.0)
    }

    /// Creates a scale mapping `[domain_start, domain_end]` onto
    /// `[range_start, range_end]`.
    ///
    /// A zero-width domain is widened by [`DEGENERATE_DOMAIN_SPAN`].
    pub fn with_range(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let (domain_start, domain_end) = if domain_start == domain_end {
            let half = DEGENERATE_DOMAIN_SPAN / 2.0;
            (domain_start - half, domain_end + half)
        } else {
            (domain_start, domain_end)
        };

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy mapping onto a different pixel range.
    pub fn with_pixel_range(self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        Self::with_range(self.domain_start, self.domain_end, range_start, range_end)
    }

    /// Maps a data value to its pixel coordinate.
    #[must_use]
    pub fn project(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to data space.
    ///
    /// A zero-width range cannot be inverted; the domain midpoint is returned.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return (self.domain_start + self.domain_end) / 2.0;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Clamps a pixel coordinate into the scale's range.
    #[must_use]
    pub fn clamp_pixel(self, pixel: f64) -> f64 {
        let low = self.range_start.min(self.range_end);
        let high = self.range_start.max(self.range_end);
        if pixel < low {
            return low;
        }
        if pixel > high {
            return high;
        }
        pixel
    }
}
