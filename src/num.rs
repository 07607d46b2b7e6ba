//! Numbers and numerics.

use num_traits::{self as nt, AsPrimitive};
use std::{fmt::Debug, ops::Neg};

/// Gathers traits required of vector elements that support arithmetic.
///
/// Implemented for the primitive integer and floating point types. Whether a
/// type is an integer or a float decides how a vector of that type is divided
/// by a scalar, see [`Scalar::divide_all`].
pub trait Scalar:
    Copy + Default + Debug + PartialOrd + nt::Num + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Divides each of the given values by the same divisor.
    ///
    /// Floating point types compute the reciprocal of the divisor once and
    /// multiply each value by it. Integer types divide each value directly,
    /// since multiplying by an integer reciprocal would truncate to zero.
    fn divide_all<const N: usize>(values: [Self; N], divisor: Self) -> [Self; N];

    /// Computes the square root. Integer types compute it in `f64` and
    /// truncate the result back to the integer type.
    fn square_root(self) -> Self;
}

/// A [`Scalar`] that can be negated.
pub trait SignedScalar: Scalar + Neg<Output = Self> {
    const NEG_ONE: Self;
}

macro_rules! impl_integer_scalar {
    ($($i:ty),+) => {
        $(
            impl Scalar for $i {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn divide_all<const N: usize>(values: [Self; N], divisor: Self) -> [Self; N] {
                    values.map(|value| value / divisor)
                }

                #[inline]
                fn square_root(self) -> Self {
                    AsPrimitive::<f64>::as_(self).sqrt().as_()
                }
            }
        )+
    };
}

macro_rules! impl_float_scalar {
    ($($f:ty),+) => {
        $(
            impl Scalar for $f {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn divide_all<const N: usize>(values: [Self; N], divisor: Self) -> [Self; N] {
                    let factor = divisor.recip();
                    values.map(|value| value * factor)
                }

                #[inline]
                fn square_root(self) -> Self {
                    self.sqrt()
                }
            }

            impl SignedScalar for $f {
                const NEG_ONE: Self = -1.0;
            }
        )+
    };
}

macro_rules! impl_signed_integer_scalar {
    ($($i:ty),+) => {
        $(
            impl SignedScalar for $i {
                const NEG_ONE: Self = -1;
            }
        )+
    };
}

impl_integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_signed_integer_scalar!(i8, i16, i32, i64);
impl_float_scalar!(f32, f64);
