//! Display bounds and estimating them from data

use crate::error::NormalizeError;
use crate::sample::Sample;
use log::{debug, warn};
use ndarray::{ArrayBase, Data, Dimension};
use std::fmt;

/// Input value range mapped onto the display range
///
/// `vmin > vmax` is allowed and requests an inverted output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub vmin: f64,
    pub vmax: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// True when `vmax <= vmin`, including equal bounds
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.vmax <= self.vmin
    }

    /// `(lo, hi)` regardless of the order the bounds were given in
    #[inline]
    #[must_use]
    pub fn ordered(&self) -> (f64, f64) {
        (self.vmin.min(self.vmax), self.vmin.max(self.vmax))
    }

    /// Same range with the ends swapped
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self {
            vmin: self.vmax,
            vmax: self.vmin,
        }
    }

    /// Smallest and largest finite values, skipping NaN and infinities
    ///
    /// Returns `None` when no finite value exists.
    #[must_use]
    pub fn from_min_max<S, D>(values: &ArrayBase<S, D>) -> Option<Self>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        let (min, max) = values
            .iter()
            .map(|&v| v.to_f64())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            warn!("No finite values among {} to compute bounds from", values.len());
            return None;
        }

        let bounds = Self::new(min, max);
        debug!("Min/max bounds: {bounds}");
        Some(bounds)
    }

    /// Percentile cut-offs over the finite values
    ///
    /// Interpolates linearly between the closest ranks, so `(0, 100)` gives
    /// the same result as [`Bounds::from_min_max`].
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidPercentile`] unless
    /// `0 <= lower < upper <= 100`.
    pub fn from_percentiles<S, D>(
        values: &ArrayBase<S, D>,
        lower: f64,
        upper: f64,
    ) -> Result<Option<Self>, NormalizeError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        // Written so that NaN percentiles also fail
        if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper {
            return Err(NormalizeError::InvalidPercentile { lower, upper });
        }

        let mut sorted: Vec<f64> = values
            .iter()
            .map(|&v| v.to_f64())
            .filter(|v| v.is_finite())
            .collect();

        if sorted.is_empty() {
            warn!("No finite values among {} to compute bounds from", values.len());
            return Ok(None);
        }

        sorted.sort_unstable_by(f64::total_cmp);

        let bounds = Self::new(
            percentile_of_sorted(&sorted, lower),
            percentile_of_sorted(&sorted, upper),
        );
        debug!(
            "Percentile bounds {lower}..{upper} over {count} finite values: {bounds}",
            count = sorted.len()
        );
        Ok(Some(bounds))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{vmin}..{vmax}", vmin = self.vmin, vmax = self.vmax)
    }
}

/// Percentile of an ascending, non-empty slice with linear interpolation
fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = percentile / 100.0 * last as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;

    if below == above {
        return sorted[below];
    }

    let weight = rank - below as f64;
    (sorted[above] - sorted[below]).mul_add(weight, sorted[below])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use ndarray::{Array1, Array2, array};

    #[test]
    fn test_is_inverted() {
        assert!(!Bounds::new(0.0, 1.0).is_inverted());
        assert!(Bounds::new(1.0, 0.0).is_inverted());
        assert!(Bounds::new(3.0, 3.0).is_inverted());
    }

    #[test]
    fn test_ordered() {
        assert_eq!(Bounds::new(5.0, -2.0).ordered(), (-2.0, 5.0));
        assert_eq!(Bounds::new(-2.0, 5.0).ordered(), (-2.0, 5.0));
    }

    #[test]
    fn test_inverted_swaps() {
        let bounds = Bounds::new(1.0, 9.0);
        assert_eq!(bounds.inverted(), Bounds::new(9.0, 1.0));
        assert_eq!(bounds.inverted().inverted(), bounds);
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::new(-1.5, 2.0).to_string(), "-1.5..2");
    }

    #[test]
    fn test_min_max_skips_non_finite() {
        let values = array![f64::NAN, 3.0, f64::INFINITY, -2.0, 7.5, f64::NEG_INFINITY];
        let bounds = Bounds::from_min_max(&values).unwrap();

        assert_eq!(bounds, Bounds::new(-2.0, 7.5));
    }

    #[test]
    fn test_min_max_integer_image() {
        let values = Array2::<u16>::from_shape_vec((2, 3), vec![40, 12, 900, 7, 65535, 3]).unwrap();
        let bounds = Bounds::from_min_max(&values).unwrap();

        assert_eq!(bounds, Bounds::new(3.0, 65535.0));
    }

    #[test]
    fn test_min_max_i64_values() {
        let values = array![-9_000_000_000i64, 12, 3_000_000_000];
        let bounds = Bounds::from_min_max(&values).unwrap();

        assert_eq!(bounds, Bounds::new(-9.0e9, 3.0e9));
    }

    #[test]
    fn test_min_max_none_without_finite_values() {
        let values = array![f64::NAN, f64::INFINITY];
        assert_eq!(Bounds::from_min_max(&values), None);

        let empty = Array1::<f64>::zeros(0);
        assert_eq!(Bounds::from_min_max(&empty), None);
    }

    #[test]
    fn test_percentiles_full_range_matches_min_max() {
        let values = array![4.0, -1.0, 8.0, 2.0];
        let bounds = Bounds::from_percentiles(&values, 0.0, 100.0).unwrap().unwrap();

        assert_eq!(Some(bounds), Bounds::from_min_max(&values));
    }

    #[test]
    fn test_percentiles_interpolate() {
        // 0..=100 in steps of 1: the p-th percentile is p
        let values = Array1::linspace(0.0, 100.0, 101);
        let bounds = Bounds::from_percentiles(&values, 2.5, 97.5).unwrap().unwrap();

        assert_relative_eq!(bounds.vmin, 2.5, epsilon = 1e-9);
        assert_relative_eq!(bounds.vmax, 97.5, epsilon = 1e-9);
    }

    #[test]
    fn test_percentiles_between_ranks() {
        let values = array![10.0, 20.0];
        let bounds = Bounds::from_percentiles(&values, 25.0, 50.0).unwrap().unwrap();

        assert_relative_eq!(bounds.vmin, 12.5);
        assert_relative_eq!(bounds.vmax, 15.0);
    }

    #[test]
    fn test_percentiles_ignore_nan() {
        let values = array![f64::NAN, 1.0, 2.0, 3.0, f64::NAN];
        let bounds = Bounds::from_percentiles(&values, 0.0, 50.0).unwrap().unwrap();

        assert_eq!(bounds, Bounds::new(1.0, 2.0));
    }

    #[test]
    fn test_percentiles_reject_bad_range() {
        let values = array![1.0, 2.0];

        assert_matches!(
            Bounds::from_percentiles(&values, 60.0, 40.0),
            Err(NormalizeError::InvalidPercentile { .. })
        );
        assert_matches!(
            Bounds::from_percentiles(&values, -1.0, 40.0),
            Err(NormalizeError::InvalidPercentile { .. })
        );
        assert_matches!(
            Bounds::from_percentiles(&values, 10.0, 100.5),
            Err(NormalizeError::InvalidPercentile { .. })
        );
        assert_matches!(
            Bounds::from_percentiles(&values, f64::NAN, 50.0),
            Err(NormalizeError::InvalidPercentile { .. })
        );
    }

    #[test]
    fn test_percentiles_none_without_finite_values() {
        let values = array![f64::NAN];
        assert_matches!(Bounds::from_percentiles(&values, 1.0, 99.0), Ok(None));
    }
}
