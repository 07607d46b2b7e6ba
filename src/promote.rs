//! Promotion of mixed element types to a common type.
//!
//! Combining a vector of `T` with a vector or scalar of `S` computes in, and
//! returns elements of, [`CommonType<T, S>`]. The common type is the smallest
//! supported type that both operand types widen into:
//!
//! - A type combined with itself stays the same.
//! - Two signed or two unsigned integers give the wider of the two.
//! - A signed integer combined with a narrower unsigned integer gives the
//!   signed integer. Otherwise the result is the signed integer twice as wide
//!   as the unsigned one. There is no such type for [`u64`], so `u64` does not
//!   combine with any signed integer.
//! - Any integer combined with [`f32`] or [`f64`] gives that float.
//! - `f32` combined with `f64` gives `f64`.

use crate::{num::Scalar, vector::Vector};
use std::array;

/// Determines the common type of `Self` and `Rhs` and converts operands into
/// it.
pub trait Promote<Rhs>: Scalar {
    type Output: Scalar;

    /// Converts the left-hand operand into the common type.
    fn promote_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right-hand operand into the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The type that operands of types `T` and `S` are promoted to.
pub type CommonType<T, S> = <T as Promote<S>>::Output;

macro_rules! impl_promote {
    ($t:ty, $s:ty => $c:ty) => {
        impl Promote<$s> for $t {
            type Output = $c;

            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn promote_lhs(self) -> $c {
                self as $c
            }

            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn promote_rhs(rhs: $s) -> $c {
                rhs as $c
            }
        }
    };
}

macro_rules! impl_identity_promote {
    ($($t:ty),+) => {
        $(impl_promote!($t, $t => $t);)+
    };
}

macro_rules! impl_symmetric_promote {
    ($($t:ty, $s:ty => $c:ty;)+) => {
        $(
            impl_promote!($t, $s => $c);
            impl_promote!($s, $t => $c);
        )+
    };
}

impl_identity_promote!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl_symmetric_promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    i8, u8 => i16;
    i8, u16 => i32;
    i8, u32 => i64;
    i16, u8 => i16;
    i16, u16 => i32;
    i16, u32 => i64;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => i64;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;

    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;

    f32, f64 => f64;
}

/// Applies the given operation to each pair of corresponding elements of the
/// two vectors after converting both to their common type.
#[inline]
pub(crate) fn zip_promoted<T, S, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<S, N>,
    mut op: impl FnMut(CommonType<T, S>, CommonType<T, S>) -> CommonType<T, S>,
) -> Vector<CommonType<T, S>, N>
where
    T: Promote<S>,
    S: Copy,
{
    Vector::new(array::from_fn(|idx| {
        op(
            <T as Promote<S>>::promote_lhs(lhs[idx]),
            <T as Promote<S>>::promote_rhs(rhs[idx]),
        )
    }))
}

/// Applies the given operation to each element of the vector and the scalar
/// after converting both to their common type.
#[inline]
pub(crate) fn broadcast_promoted<T, S, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: S,
    mut op: impl FnMut(CommonType<T, S>, CommonType<T, S>) -> CommonType<T, S>,
) -> Vector<CommonType<T, S>, N>
where
    T: Promote<S>,
{
    let rhs = <T as Promote<S>>::promote_rhs(rhs);
    lhs.mapped(|value| op(<T as Promote<S>>::promote_lhs(value), rhs))
}

/// Converts both vectors to their common element type.
#[inline]
pub(crate) fn promote_pair<T, S, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<S, N>,
) -> (Vector<CommonType<T, S>, N>, Vector<CommonType<T, S>, N>)
where
    T: Promote<S>,
    S: Copy,
{
    (
        lhs.mapped(<T as Promote<S>>::promote_lhs),
        rhs.mapped(<T as Promote<S>>::promote_rhs),
    )
}
