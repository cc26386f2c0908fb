//! Normalization settings

use crate::error::NormalizeError;
use crate::stretch::Stretch;
use std::fmt;

/// Normalized value that lands on mid-gray
pub const DEFAULT_BIAS: f64 = 0.5;
/// Unit slope around the bias
pub const DEFAULT_CONTRAST: f64 = 1.0;
/// Exponent for the `log` and `power` stretches
pub const DEFAULT_EXPONENT: f64 = 1000.0;

/// Bias, contrast, stretch and exponent applied by [`crate::normalize()`]
///
/// No range is enforced on any field; out-of-range results are clamped by
/// the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    pub bias: f64,
    pub contrast: f64,
    pub stretch: Stretch,
    pub exponent: f64,
}

impl NormalizeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bias: DEFAULT_BIAS,
            contrast: DEFAULT_CONTRAST,
            stretch: Stretch::Linear,
            exponent: DEFAULT_EXPONENT,
        }
    }

    #[must_use]
    pub const fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    #[must_use]
    pub const fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    #[must_use]
    pub const fn with_stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    #[must_use]
    pub const fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Set the stretch from its name
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidStretch`] if `name` is not a known stretch
    pub fn with_stretch_name(self, name: &str) -> Result<Self, NormalizeError> {
        Ok(self.with_stretch(name.parse()?))
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NormalizeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stretch={stretch}, bias={bias}, contrast={contrast}",
            stretch = self.stretch,
            bias = self.bias,
            contrast = self.contrast
        )?;
        if self.stretch.uses_exponent() {
            write!(f, ", exponent={exponent}", exponent = self.exponent)?;
        }
        Ok(())
    }
}
