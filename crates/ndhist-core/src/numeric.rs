//! Numeric measurement types
//!
//! Measurement vectors may be made of any primitive number. Binning always
//! happens in `f64`, so the trait only has to describe how a component gets
//! there and whether it can be placed on the real line at all.

use num_traits::Num;
use std::fmt::Debug;

/// Base trait for the component type of a measurement vector
///
/// `zero`/`one` come from the `num_traits::Num` supertrait.
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 for binning arithmetic
    fn to_f64(&self) -> f64;
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numeric_trait() {
        assert_eq!(<f64 as num_traits::Zero>::zero(), 0.0);
        assert!(Numeric::is_finite(&5.0f64));
        assert!(!Numeric::is_finite(&f32::NAN));
        assert!(!Numeric::is_finite(&f64::INFINITY));

        assert_eq!(<u8 as num_traits::One>::one(), 1);
        assert!(Numeric::is_finite(&42i32));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Numeric::to_f64(&-17.5f32), -17.5);
        assert_eq!(Numeric::to_f64(&255u8), 255.0);
        assert_eq!(Numeric::to_f64(&-3i16), -3.0);
        assert_eq!(Numeric::to_f64(&u64::MAX), 18446744073709551616.0);
        // f32 inputs widen without gaining precision
        assert_relative_eq!(Numeric::to_f64(&0.1f32), 0.1, max_relative = 1e-7);
        assert_relative_eq!(Numeric::to_f64(&1.7e18f64), 1.7e18);
    }
}
