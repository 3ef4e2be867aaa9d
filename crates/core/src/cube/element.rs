//! Cube element trait for generic band values

use num_traits::NumCast;
use std::fmt::Debug;

/// Trait for types that can be stored in a spectral cube.
///
/// Index formulas always evaluate in `f64`, so every element type must
/// widen to it. Integer digital numbers (e.g. `u16` reflectance) are
/// accepted as-is; no scaling is applied.
pub trait CubeElement: Copy + Debug + NumCast + Send + Sync + 'static {
    /// Widen self to f64
    fn to_f64(self) -> f64 {
        <f64 as NumCast>::from(self).unwrap_or(f64::NAN)
    }
}

macro_rules! impl_cube_element_int {
    ($($t:ty),*) => {
        $(impl CubeElement for $t {})*
    };
}

macro_rules! impl_cube_element_float {
    ($($t:ty),*) => {
        $(impl CubeElement for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_cube_element_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_cube_element_float!(f32, f64);
