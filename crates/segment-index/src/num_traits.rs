//! This module contains the number traits of values stored in a segment index

use std::fmt::Debug;

/// A trait representing a type that can be stored in a [`SegmentIndex`](crate::SegmentIndex)
///
/// Values are compared with `<` only, and ties are broken toward the lower position.
///
/// It's implemented for signed and unsigned integers and floating-point numbers.
/// Floating-point `NaN` is not ordered against anything, so the index refuses to store it.
pub trait Value: Copy + PartialOrd + Debug {
    /// Initial value of every position of a freshly allocated index
    const ZERO: Self;

    /// Value of the leaves padding the index up to a power of two
    ///
    /// It must not be smaller than any other value, so that padding never wins a comparison.
    const PADDING: Self;

    /// Whether this value has no place in the ordering, i.e. `NaN`
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_value_for_int {
    ($($int_type:ty),*) => {
        $(
            impl Value for $int_type {
                const ZERO: Self = 0;
                const PADDING: Self = <$int_type>::MAX;
            }
        )*
    };
}

impl_value_for_int!(i8, i16, i32, i64, i128, isize);
impl_value_for_int!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_value_for_float {
    ($($float_type:ty),*) => {
        $(
            impl Value for $float_type {
                const ZERO: Self = 0.0;
                const PADDING: Self = <$float_type>::INFINITY;

                fn is_nan(self) -> bool {
                    <$float_type>::is_nan(self)
                }
            }
        )*
    };
}

impl_value_for_float!(f32, f64);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn padding_is_largest<V: Value>(samples: &[V]) {
        for &v in samples {
            assert!(v <= V::PADDING, "{v:?} is larger than padding");
        }
    }

    #[test]
    fn test_padding() {
        padding_is_largest(&[i8::MIN, -1, 0, i8::MAX]);
        padding_is_largest(&[0u32, 1, u32::MAX]);
        padding_is_largest(&[i128::MIN, 0, i128::MAX]);
        padding_is_largest(&[f64::MIN, -0.0, 0.0, f64::MAX, f64::INFINITY]);
        padding_is_largest(&[f32::NEG_INFINITY, f32::MAX]);
    }

    #[test]
    fn test_is_nan() {
        assert!(Value::is_nan(f64::NAN));
        assert!(Value::is_nan(-f32::NAN));
        assert!(!Value::is_nan(f64::INFINITY));
        assert!(!Value::is_nan(u8::MAX));
        assert!(!Value::is_nan(-1i64));
    }
}
