//! The seven stretch functions
//!
//! Each one normalizes `x` into `[0, 1]` against `[vmin, vmax]`, applies its
//! warp, then runs the bias/contrast stage. Everything happens in place.

use ndarray::{ArrayBase, DataMut, Dimension};

use super::stages::{apply_contrast, normalize_linear};

/// Offset added before the logarithm so `t = 0` never evaluates `ln(1)` exactly
const LOG_OFFSET: f64 = 1.001;

const ASINH_SCALE: f64 = 10.0;
const ASINH_NORM: f64 = 3.0;
const SINH_SCALE: f64 = 3.0;
const SINH_NORM: f64 = 10.0;

pub fn linear_warp<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    apply_contrast(x, bias, contrast);
}

/// `ln(exp * t + 1.001) / ln(exp + 1)`
///
/// Compresses the bright end. Values slightly above 1 at `t = 1` are
/// clipped by the contrast stage.
pub fn log_warp<S, D>(
    x: &mut ArrayBase<S, D>,
    vmin: f64,
    vmax: f64,
    bias: f64,
    contrast: f64,
    exp: f64,
) where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    let denom = (exp + 1.0).ln();
    x.mapv_inplace(|t| (exp * t + LOG_OFFSET).ln() / denom);
    apply_contrast(x, bias, contrast);
}

/// `(exp^t - 1) / (exp - 1)`
pub fn power_warp<S, D>(
    x: &mut ArrayBase<S, D>,
    vmin: f64,
    vmax: f64,
    bias: f64,
    contrast: f64,
    exp: f64,
) where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    let denom = exp - 1.0;
    x.mapv_inplace(|t| (exp.powf(t) - 1.0) / denom);
    apply_contrast(x, bias, contrast);
}

pub fn sqrt_warp<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    x.mapv_inplace(f64::sqrt);
    apply_contrast(x, bias, contrast);
}

pub fn squared_warp<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    x.mapv_inplace(|t| t * t);
    apply_contrast(x, bias, contrast);
}

/// `asinh(10 t) / 3`
///
/// `asinh(10) / 3` is about 0.998, so the top of the range stays just under 1.
pub fn asinh_warp<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    x.mapv_inplace(|t| (t * ASINH_SCALE).asinh() / ASINH_NORM);
    apply_contrast(x, bias, contrast);
}

/// `sinh(3 t) / 10`
///
/// `sinh(3) / 10` is about 1.002; the contrast stage clips the overshoot.
pub fn sinh_warp<S, D>(x: &mut ArrayBase<S, D>, vmin: f64, vmax: f64, bias: f64, contrast: f64)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    normalize_linear(x, vmin, vmax);
    x.mapv_inplace(|t| (t * SINH_SCALE).sinh() / SINH_NORM);
    apply_contrast(x, bias, contrast);
}
