//! Normalization and stretch functions that turn raw scalar data into 8-bit
//! display values.
//!
//! ```
//! use ndarray::array;
//! use stretchmap::{NormalizeOptions, Stretch, normalize};
//!
//! let data = array![[0.0, 250.0], [500.0, 1000.0]];
//! let options = NormalizeOptions::new().with_stretch(Stretch::Sqrt);
//! let pixels = normalize(&data, 0.0, 1000.0, &options);
//!
//! assert_eq!(pixels.shape(), &[2, 2]);
//! assert_eq!(pixels[[1, 1]], 255);
//! ```

pub mod bounds;
pub mod error;
pub mod image;
pub mod normalize;
pub mod options;
pub mod sample;
pub mod stretch;

// Re-export commonly used items
pub use bounds::Bounds;
pub use error::NormalizeError;
pub use normalize::{normalize, normalize_named, normalize_owned, normalize_slice, normalize_unit};
pub use options::NormalizeOptions;
pub use sample::Sample;
pub use stretch::Stretch;
