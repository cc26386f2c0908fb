mod grayscale;

pub use grayscale::{to_gray_image, to_rgb_image};
