//! Stretch dispatch and 8-bit quantization
//!
//! Every entry point follows the same steps: bounds given as `vmax <= vmin`
//! request inversion, the stretch runs over the ordered bounds, inverted
//! results are flipped with `1 - y`, and the [0, 1] result is scaled to
//! 0..=255 and truncated to `u8`.

use crate::bounds::Bounds;
use crate::error::NormalizeError;
use crate::options::NormalizeOptions;
use crate::sample::Sample;
use log::debug;
use ndarray::{Array, ArrayBase, ArrayView1, Data, Dimension};

const MAX_BYTE: f64 = 255.0;

/// Normalize `value` into display bytes
///
/// `value` is copied once into an `f64` working buffer. The output has the
/// same shape as the input. Setting `vmax` below `vmin` inverts the output.
#[must_use]
pub fn normalize<S, D>(
    value: &ArrayBase<S, D>,
    vmin: f64,
    vmax: f64,
    options: &NormalizeOptions,
) -> Array<u8, D>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    normalize_owned(to_working(value), vmin, vmax, options)
}

/// Normalize using a stretch given by name
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidStretch`] if `stretch` is not one of the
/// recognized names. No data is processed in that case.
pub fn normalize_named<S, D>(
    value: &ArrayBase<S, D>,
    vmin: f64,
    vmax: f64,
    bias: f64,
    contrast: f64,
    stretch: &str,
) -> Result<Array<u8, D>, NormalizeError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    let options = NormalizeOptions::new()
        .with_bias(bias)
        .with_contrast(contrast)
        .with_stretch_name(stretch)?;

    Ok(normalize(value, vmin, vmax, &options))
}

/// Normalize an `f64` buffer the caller no longer needs, reusing its storage
/// for every stage
#[must_use]
pub fn normalize_owned<D>(
    mut value: Array<f64, D>,
    vmin: f64,
    vmax: f64,
    options: &NormalizeOptions,
) -> Array<u8, D>
where
    D: Dimension,
{
    stretch_in_place(&mut value, vmin, vmax, options);
    value.mapv(quantize)
}

/// Normalize a flat buffer, for callers that keep their own shape
#[must_use]
pub fn normalize_slice<T>(values: &[T], vmin: f64, vmax: f64, options: &NormalizeOptions) -> Vec<u8>
where
    T: Sample,
{
    normalize(&ArrayView1::from(values), vmin, vmax, options).to_vec()
}

/// Run the stretch and inversion but stop before quantization
///
/// Values are in [0, 1] except NaN, which passes through.
#[must_use]
pub fn normalize_unit<S, D>(
    value: &ArrayBase<S, D>,
    vmin: f64,
    vmax: f64,
    options: &NormalizeOptions,
) -> Array<f64, D>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    let mut working = to_working(value);
    stretch_in_place(&mut working, vmin, vmax, options);
    working
}

fn to_working<S, D>(value: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    value.mapv(Sample::to_f64)
}

fn stretch_in_place<D>(value: &mut Array<f64, D>, vmin: f64, vmax: f64, options: &NormalizeOptions)
where
    D: Dimension,
{
    let bounds = Bounds::new(vmin, vmax);
    let inverted = bounds.is_inverted();
    let (lo, hi) = bounds.ordered();

    debug!(
        "Normalizing {count} values over [{lo}, {hi}] ({options}, inverted={inverted})",
        count = value.len()
    );

    options
        .stretch
        .apply(value, lo, hi, options.bias, options.contrast, options.exponent);

    if inverted {
        value.mapv_inplace(|v| 1.0 - v);
    }
}

/// Scale a [0, 1] value to a byte, truncating toward zero
///
/// The float-to-int cast saturates and maps NaN to 0.
#[inline(always)]
#[must_use]
fn quantize(value: f64) -> u8 {
    (value * MAX_BYTE).clamp(0.0, MAX_BYTE) as u8
}
