//! Element types accepted as input data

/// Numeric element that can be widened to `f64` for processing
///
/// 64-bit integers above 2^53 lose precision, as they would in any `f64`
/// pipeline.
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sample for $ty {
                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
