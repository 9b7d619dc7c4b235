use ordered_float::OrderedFloat;
use smallvec::{SmallVec, smallvec};

use crate::core::{LinearScale, Series};

/// Resolves pointer x coordinates to record indices of a sorted series.
#[derive(Debug, Clone, Copy)]
pub struct IndexLocator<'a> {
    scale: LinearScale,
    series: &'a Series,
    field: &'a str,
}

impl<'a> IndexLocator<'a> {
    #[must_use]
    pub fn new(scale: LinearScale, series: &'a Series, field: &'a str) -> Self {
        Self {
            scale,
            series,
            field,
        }
    }

    /// Index of the record nearest to `pixel_x`, or `None` when the pointer
    /// lies left of the first or right of the last record's pixel.
    #[must_use]
    pub fn locate(&self, pixel_x: f64) -> Option<usize> {
        nearest_index(self.scale, self.series.len(), pixel_x, |index| {
            self.series.value_at(index, self.field).unwrap_or(f64::NAN)
        })
    }
}

/// Pixels a pointer may sit outside the first or last record's projected
/// position and still resolve to that record.
pub const LOCATE_EDGE_TOLERANCE_PX: f64 = 1e-6;

/// Nearest-index search over `len` ascending values read through `value_at`.
///
/// Pointers outside the projected span of the data resolve to `None`. Inside
/// it, the pixel is inverted through `scale` and the nearest value wins.
/// Duplicate values resolve to their lowest index and a target exactly
/// halfway between two values resolves to the lower one.
#[must_use]
pub fn nearest_index<F>(scale: LinearScale, len: usize, pixel_x: f64, value_at: F) -> Option<usize>
where
    F: Fn(usize) -> f64,
{
    if len == 0 || !pixel_x.is_finite() {
        return None;
    }

    let first_px = scale.project(value_at(0));
    let last_px = scale.project(value_at(len - 1));
    let (low_px, high_px) = if first_px <= last_px {
        (first_px, last_px)
    } else {
        (last_px, first_px)
    };
    if pixel_x < low_px - LOCATE_EDGE_TOLERANCE_PX || pixel_x > high_px + LOCATE_EDGE_TOLERANCE_PX
    {
        return None;
    }

    let target = scale.invert(pixel_x);
    if !target.is_finite() {
        return None;
    }

    let insertion = lower_bound(len, target, &value_at);
    if insertion == 0 {
        return Some(0);
    }
    if insertion == len {
        return Some(lower_bound(len, value_at(len - 1), &value_at));
    }
    if value_at(insertion) == target {
        return Some(insertion);
    }

    // Lower neighbour first so ties keep the lower index.
    let below = value_at(insertion - 1);
    let candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = smallvec![
        (
            OrderedFloat(target - below),
            lower_bound(insertion, below, &value_at)
        ),
        (OrderedFloat(value_at(insertion) - target), insertion),
    ];
    candidates
        .into_iter()
        .min_by_key(|&(distance, index)| (distance, index))
        .map(|(_, index)| index)
}

/// First index in `0..len` whose value is not less than `target`.
fn lower_bound<F>(len: usize, target: f64, value_at: &F) -> usize
where
    F: Fn(usize) -> f64,
{
    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if value_at(mid) < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::{lower_bound, nearest_index};
    use crate::core::LinearScale;

    fn identity_scale(max: f64) -> LinearScale {
        LinearScale::with_range(0.0, max, 0.0, max).expect("scale")
    }

    #[test]
    fn lower_bound_finds_first_duplicate() {
        let values = [1.0, 3.0, 3.0, 3.0, 7.0];
        assert_eq!(lower_bound(values.len(), 3.0, &|i| values[i]), 1);
        assert_eq!(lower_bound(values.len(), 0.0, &|i| values[i]), 0);
        assert_eq!(lower_bound(values.len(), 9.0, &|i| values[i]), 5);
    }

    #[test]
    fn exact_match_returns_that_index() {
        let values = [0.0, 10.0, 20.0];
        let scale = identity_scale(20.0);
        assert_eq!(nearest_index(scale, 3, 10.0, |i| values[i]), Some(1));
    }

    #[test]
    fn insertion_between_picks_nearest_neighbor() {
        let values = [0.0, 10.0, 20.0];
        let scale = identity_scale(20.0);
        assert_eq!(nearest_index(scale, 3, 3.0, |i| values[i]), Some(0));
        assert_eq!(nearest_index(scale, 3, 7.0, |i| values[i]), Some(1));
    }

    #[test]
    fn insertion_outside_bounds_is_none() {
        let values = [5.0, 10.0];
        let scale = LinearScale::with_range(0.0, 20.0, 0.0, 20.0).expect("scale");
        assert_eq!(nearest_index(scale, 2, 2.0, |i| values[i]), None);
        assert_eq!(nearest_index(scale, 2, 15.0, |i| values[i]), None);
    }

    #[test]
    fn fractional_values_resolve_on_their_own_pixels() {
        let values = [0.1, 0.2, 0.3];
        let scale = LinearScale::with_range(0.1, 0.3, 0.0, 100.0).expect("scale");
        for (index, value) in values.iter().enumerate() {
            let pixel = scale.project(*value);
            assert_eq!(nearest_index(scale, 3, pixel, |i| values[i]), Some(index));
        }
    }

    #[test]
    fn right_edge_resolves_to_first_of_trailing_duplicates() {
        let values = [0.5, 2.5, 2.5];
        let scale = LinearScale::with_range(0.5, 2.5, 0.0, 40.0).expect("scale");
        assert_eq!(nearest_index(scale, 3, 40.0, |i| values[i]), Some(1));
        assert_eq!(nearest_index(scale, 3, 40.5, |i| values[i]), None);
    }

    #[test]
    fn empty_series_is_none() {
        let scale = identity_scale(1.0);
        assert_eq!(nearest_index(scale, 0, 0.5, |_| 0.0), None);
    }
}
