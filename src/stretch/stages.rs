//! Shared pipeline stages
//!
//! Both stages work in place on the caller's `f64` buffer and clamp their
//! output to [0, 1]. NaN passes through untouched.

use ndarray::{ArrayBase, DataMut, Dimension};

/// Clamp to [0, 1], letting NaN through
#[inline(always)]
#[must_use]
pub(crate) fn clip_unit(value: f64) -> f64 {
    // f64::clamp keeps NaN as NaN
    value.clamp(0.0, 1.0)
}

/// Linearly rescale `[vmin, vmax]` to `[0, 1]`, clipping outliers
///
/// The caller guarantees `vmin != vmax`. A zero range yields `inf` (clamped
/// to 0 or 1) or NaN for values equal to `vmin`.
pub fn normalize_linear<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    let range = vmax - vmin;
    x.mapv_inplace(|v| clip_unit((v - vmin) / range));
}

/// Apply bias and contrast, then clip to `[0, 1]`
///
/// `y = (x - bias) * contrast + 0.5`. With `bias = 0.5` and `contrast = 1`
/// this is the identity on `[0, 1]`.
pub fn apply_contrast<S, D>(x: &mut ArrayBase<S, D>, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    x.mapv_inplace(|v| clip_unit((v - bias) * contrast + 0.5));
}
