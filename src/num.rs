//! A thin abstraction over the coordinate types we support.

use std::hash::Hash;

use ordered_float::{NotNan, OrderedFloat};

/// A trait for abstracting over the properties we need from coordinate types.
///
/// The sweep itself only adds, subtracts and compares coordinates; multiplication
/// is only used for computing areas. It is implemented for all the primitive
/// integer types, and for `f32` and `f64` wrapped in `NotNan` or `OrderedFloat`
/// (plain floats don't have the total order that the event queue needs).
///
/// No overflow checking is done anywhere: if `x + width` doesn't fit in your
/// coordinate type, pick a wider one.
pub trait Coord:
    Sized
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::Mul<Self, Output = Self>
    + Copy
    + std::fmt::Debug
    + Ord
    + Eq
    + Hash
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts to an `f64`, for rendering. This may lose precision for very large integers.
    fn to_f64(self) -> f64;
}

macro_rules! impl_coord_for_int {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_coord_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coord for NotNan<f64> {
    fn zero() -> Self {
        // Zero is not a NaN.
        NotNan::try_from(0.0).unwrap()
    }

    fn to_f64(self) -> f64 {
        self.into_inner()
    }
}

impl Coord for NotNan<f32> {
    fn zero() -> Self {
        NotNan::try_from(0.0f32).unwrap()
    }

    fn to_f64(self) -> f64 {
        f64::from(self.into_inner())
    }
}

impl Coord for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn to_f64(self) -> f64 {
        self.into_inner()
    }
}

impl Coord for OrderedFloat<f32> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn to_f64(self) -> f64 {
        f64::from(self.into_inner())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    // Kind of like Arbitrary, but
    // - it's a local trait, so we can impl it for whatever we want, and
    // - it only returns "reasonable" values, small enough that the sweep
    //   sees lots of coincident edges.
    pub trait Reasonable {
        type Strategy: Strategy<Value = Self> + 'static;
        fn reasonable() -> Self::Strategy;
    }

    impl Reasonable for i32 {
        type Strategy = BoxedStrategy<i32>;

        fn reasonable() -> Self::Strategy {
            (-20i32..20).boxed()
        }
    }

    impl Reasonable for u32 {
        type Strategy = BoxedStrategy<u32>;

        fn reasonable() -> Self::Strategy {
            (0u32..40).boxed()
        }
    }

    impl Reasonable for NotNan<f64> {
        type Strategy = BoxedStrategy<NotNan<f64>>;

        fn reasonable() -> Self::Strategy {
            // Multiples of a half are exact, so areas can be compared exactly.
            (-40i32..40)
                .prop_map(|x| NotNan::new(f64::from(x) / 2.0).unwrap())
                .boxed()
        }
    }

    #[test]
    fn zeros() {
        assert_eq!(i32::zero(), 0);
        assert_eq!(u64::zero(), 0);
        assert_eq!(NotNan::<f64>::zero().into_inner(), 0.0);
        assert_eq!(OrderedFloat::<f32>::zero(), OrderedFloat(0.0));
    }

    #[test]
    fn float_conversion() {
        assert_eq!((-3i64).to_f64(), -3.0);
        assert_eq!(NotNan::new(1.5f32).unwrap().to_f64(), 1.5);
    }
}
