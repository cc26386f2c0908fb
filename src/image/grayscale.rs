//! Grayscale image buffers
//!
//! Wraps normalized 2-D data into `image` buffers. Rows become image height
//! and columns become image width.

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage};
use ndarray::{ArrayBase, Data, Ix2};

use crate::normalize::normalize;
use crate::options::NormalizeOptions;
use crate::sample::Sample;

/// Normalize a 2-D array into an 8-bit grayscale image
///
/// # Errors
///
/// Returns an error if either dimension does not fit in `u32`
pub fn to_gray_image<S>(
    values: &ArrayBase<S, Ix2>,
    vmin: f64,
    vmax: f64,
    options: &NormalizeOptions,
) -> Result<GrayImage>
where
    S: Data,
    S::Elem: Sample,
{
    let (width, height) = image_dimensions(values)?;

    // Logical iteration order is row-major regardless of the input's strides
    let pixels: Vec<u8> = normalize(values, vmin, vmax, options)
        .iter()
        .copied()
        .collect();

    ImageBuffer::from_raw(width, height, pixels).context("Failed to create grayscale image buffer")
}

/// Normalize a 2-D array into an RGB image with equal channels
///
/// # Errors
///
/// Returns an error if either dimension does not fit in `u32`
pub fn to_rgb_image<S>(
    values: &ArrayBase<S, Ix2>,
    vmin: f64,
    vmax: f64,
    options: &NormalizeOptions,
) -> Result<DynamicImage>
where
    S: Data,
    S::Elem: Sample,
{
    let (width, height) = image_dimensions(values)?;

    let rgb_pixels: Vec<u8> = normalize(values, vmin, vmax, options)
        .iter()
        .flat_map(|&gray| [gray, gray, gray])
        .collect();

    let rgb_image: RgbImage = ImageBuffer::from_raw(width, height, rgb_pixels)
        .context("Failed to create RGB image buffer")?;

    Ok(DynamicImage::ImageRgb8(rgb_image))
}

fn image_dimensions<S>(values: &ArrayBase<S, Ix2>) -> Result<(u32, u32)>
where
    S: Data,
{
    let (rows, cols) = values.dim();
    let width = u32::try_from(cols).with_context(|| format!("Image width {cols} exceeds u32"))?;
    let height = u32::try_from(rows).with_context(|| format!("Image height {rows} exceeds u32"))?;
    Ok((width, height))
}
