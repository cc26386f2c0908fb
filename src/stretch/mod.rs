//! Stretch kinds and the functions behind them
//!
//! A stretch normalizes raw values into [0, 1], warps them to change how
//! intensity is distributed, then applies bias and contrast.

mod stages;
mod warps;

pub use stages::{apply_contrast, normalize_linear};
pub use warps::{
    asinh_warp, linear_warp, log_warp, power_warp, sinh_warp, sqrt_warp, squared_warp,
};

use crate::error::NormalizeError;
use ndarray::{ArrayBase, DataMut, Dimension};
use std::str::FromStr;

/// Nonlinear mapping applied to normalized data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stretch {
    /// Identity
    #[default]
    Linear,
    /// Logarithmic, brightens faint values
    Log,
    /// Square root
    Sqrt,
    /// Exponential, darkens faint values
    Power,
    /// Square
    Squared,
    /// Inverse hyperbolic sine
    Arcsinh,
    /// Hyperbolic sine
    Sinh,
}

impl Stretch {
    /// Every stretch kind, in the order names are listed in error messages
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Log,
        Self::Sqrt,
        Self::Power,
        Self::Squared,
        Self::Arcsinh,
        Self::Sinh,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Power => "power",
            Self::Squared => "squared",
            Self::Arcsinh => "arcsinh",
            Self::Sinh => "sinh",
        }
    }

    /// Whether the exponent option affects this stretch
    #[inline]
    #[must_use]
    pub const fn uses_exponent(self) -> bool {
        matches!(self, Self::Log | Self::Power)
    }

    /// Comma separated list of valid names
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// Run this stretch over `x` in place, leaving values in [0, 1]
    ///
    /// `exponent` is ignored unless [`Stretch::uses_exponent`] is true.
    pub fn apply<S, D>(
        self,
        x: &mut ArrayBase<S, D>,
        vmin: f64,
        vmax: f64,
        bias: f64,
        contrast: f64,
        exponent: f64,
    ) where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        match self {
            Self::Linear => linear_warp(x, vmin, vmax, bias, contrast),
            Self::Log => log_warp(x, vmin, vmax, bias, contrast, exponent),
            Self::Sqrt => sqrt_warp(x, vmin, vmax, bias, contrast),
            Self::Power => power_warp(x, vmin, vmax, bias, contrast, exponent),
            Self::Squared => squared_warp(x, vmin, vmax, bias, contrast),
            Self::Arcsinh => asinh_warp(x, vmin, vmax, bias, contrast),
            Self::Sinh => sinh_warp(x, vmin, vmax, bias, contrast),
        }
    }
}

impl FromStr for Stretch {
    type Err = NormalizeError;

    /// Parse a stretch from its exact canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stretch| stretch.name() == s)
            .ok_or_else(|| NormalizeError::InvalidStretch {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl std::fmt::Display for Stretch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
