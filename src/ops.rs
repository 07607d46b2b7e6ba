//! Arithmetic operators on vectors.
//!
//! Binary operators between a vector of `T` and a vector of `S` of the same
//! length, or a vector of `T` and a scalar of type `S`, compute in and return
//! elements of [`CommonType<T, S>`](crate::CommonType). Compound assignment
//! computes the same result and converts it back to `T`.
//!
//! Scalar operands must have a concrete [`Scalar`](crate::Scalar) type, so an
//! unsuffixed literal may need a suffix (`v * 2.0_f64`) when the result is
//! used before the literal's type is known.

use crate::{
    num::SignedScalar,
    promote::{CommonType, Promote},
    vector::Vector,
};

impl_elementwise_binop!(Add, add, |a, b| a + b);

impl_elementwise_binop!(Sub, sub, |a, b| a - b);

impl_elementwise_binop!(Mul, mul, |a, b| a * b);

impl_elementwise_binop!(Div, div, |a, b| a / b);

impl_elementwise_binop_assign!(AddAssign, add_assign, |a, b| a + b);

impl_elementwise_binop_assign!(SubAssign, sub_assign, |a, b| a - b);

impl_elementwise_binop_assign!(MulAssign, mul_assign, |a, b| a * b);

impl_elementwise_binop_assign!(DivAssign, div_assign, |a, b| a / b);

impl_scalar_broadcast!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl_unary_op!(Neg, neg, SignedScalar, |val| {
    val.mapped(|value| T::NEG_ONE * value)
});

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Multiplies each element by the corresponding element in another
    /// vector. Equivalent to `self * other`.
    #[inline]
    pub fn component_mul<S>(&self, other: &Vector<S, N>) -> Vector<CommonType<T, S>, N>
    where
        T: Promote<S>,
        S: Copy,
    {
        self * other
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use crate::{DVec2, DVec3, FVec3, IVec2, IVec3, Vector};
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn adding_vectors_adds_elementwise() {
        let a = IVec3::new([1, 2, 3]);
        let b = IVec3::new([10, -20, 30]);
        assert_eq!(a + b, IVec3::new([11, -18, 33]));
        assert_eq!(&a + &b, a + b);
        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
    }

    #[test]
    fn subtracting_vectors_subtracts_elementwise() {
        let a = DVec3::new([1.0, 2.0, 3.0]);
        let b = DVec3::new([0.5, 4.0, -1.0]);
        assert_eq!(a - b, DVec3::new([0.5, -2.0, 4.0]));
        assert_eq!(a - b, a + (-b));
    }

    #[test]
    fn subtracting_unsigned_vectors_works_without_negation() {
        let a = Vector::new([10_u32, 7]);
        let b = Vector::new([3_u32, 7]);
        assert_eq!(a - b, Vector::new([7_u32, 0]));
    }

    #[test]
    fn multiplying_and_dividing_vectors_is_elementwise() {
        let a = DVec2::new([3.0, -4.0]);
        let b = DVec2::new([2.0, 8.0]);
        assert_eq!(a * b, DVec2::new([6.0, -32.0]));
        assert_eq!(a / b, DVec2::new([1.5, -0.5]));
        assert_eq!(a.component_mul(&b), a * b);
    }

    #[test]
    fn adding_int_and_double_vectors_gives_double_vector() {
        let a = IVec2::new([1, 2]);
        let b = DVec2::new([0.5, 0.25]);
        let sum: DVec2 = a + b;
        assert_eq!(sum, DVec2::new([1.5, 2.25]));
        let sum: DVec2 = b + a;
        assert_eq!(sum, DVec2::new([1.5, 2.25]));
    }

    #[test]
    fn adding_int_vectors_gives_int_vector() {
        let sum: IVec2 = IVec2::new([1, 2]) + IVec2::new([3, 4]);
        assert_eq!(sum, IVec2::new([4, 6]));
    }

    #[test]
    fn combining_float_and_double_vectors_gives_double_vector() {
        let product: DVec3 = FVec3::new([1.0, 2.0, 3.0]) * DVec3::new([2.0, 2.0, 2.0]);
        assert_eq!(product, DVec3::new([2.0, 4.0, 6.0]));
    }

    #[test]
    fn combining_mixed_signedness_vectors_does_not_wrap() {
        let a = Vector::new([200_u8, 0]);
        let b = Vector::new([100_i8, -1]);
        let sum: Vector<i16, 2> = a + b;
        assert_eq!(sum, Vector::new([300, -1]));
    }

    #[test]
    fn multiplying_by_scalar_is_commutative() {
        let v = DVec3::new([1.0, -2.0, 0.5]);
        assert_eq!(v * 2.0_f64, DVec3::new([2.0, -4.0, 1.0]));
        assert_eq!(2.0_f64 * v, v * 2.0_f64);
        assert_eq!(&v * 2.0_f64, 2.0_f64 * &v);
    }

    #[test]
    fn multiplying_int_vector_by_double_scalar_gives_double_vector() {
        let scaled: DVec2 = IVec2::new([1, 3]) * 0.5_f64;
        assert_eq!(scaled, DVec2::new([0.5, 1.5]));
        let scaled: DVec2 = 0.5_f64 * IVec2::new([1, 3]);
        assert_eq!(scaled, DVec2::new([0.5, 1.5]));
    }

    #[test]
    fn dividing_float_vector_by_scalar_divides_each_element() {
        let v = DVec3::new([1.0, 2.0, -3.0]);
        assert_abs_diff_eq!(v / 4.0_f64, DVec3::new([0.25, 0.5, -0.75]), epsilon = EPSILON);
    }

    #[test]
    fn dividing_int_vector_by_int_scalar_truncates_each_element() {
        let v = IVec3::new([7, -7, 10]);
        assert_eq!(v / 2_i32, IVec3::new([3, -3, 5]));
        assert_eq!(v / 3_i32, IVec3::new([2, -2, 3]));
    }

    #[test]
    fn dividing_int_vector_by_double_scalar_gives_double_vector() {
        let quotient: DVec2 = IVec2::new([1, 3]) / 2.0_f64;
        assert_eq!(quotient, DVec2::new([0.5, 1.5]));
    }

    #[test]
    fn dividing_float_vector_by_zero_gives_infinities() {
        let quotient = DVec2::new([1.0, -1.0]) / 0.0_f64;
        assert_eq!(quotient, DVec2::new([f64::INFINITY, f64::NEG_INFINITY]));
    }

    #[test]
    #[should_panic]
    fn dividing_int_vector_by_zero_panics() {
        let _ = IVec2::new([1, 2]) / 0_i32;
    }

    #[test]
    fn negating_vector_flips_each_sign() {
        assert_eq!(-IVec3::new([1, -2, 0]), IVec3::new([-1, 2, 0]));
        assert_eq!(-&DVec2::new([0.5, -4.0]), DVec2::new([-0.5, 4.0]));
    }

    #[test]
    fn compound_assignment_matches_binary_operation() {
        let a = DVec3::new([1.0, 2.0, 3.0]);
        let b = DVec3::new([4.0, 5.0, 6.0]);

        let mut v = a;
        v += b;
        assert_eq!(v, a + b);

        let mut v = a;
        v -= &b;
        assert_eq!(v, a - b);

        let mut v = a;
        v *= b;
        assert_eq!(v, a * b);

        let mut v = a;
        v /= b;
        assert_eq!(v, a / b);

        let mut v = a;
        v *= 3.0_f64;
        assert_eq!(v, a * 3.0_f64);

        let mut v = a;
        v /= 2.0_f64;
        assert_eq!(v, a / 2.0_f64);
    }

    #[test]
    fn compound_assignment_with_wider_operand_converts_back() {
        let mut v = IVec2::new([1, 2]);
        v += DVec2::new([0.75, 0.5]);
        assert_eq!(v, IVec2::new([1, 2]));

        let mut v = IVec2::new([3, 5]);
        v *= 1.5_f64;
        assert_eq!(v, IVec2::new([4, 7]));

        let mut v = FVec3::new([1.0, 2.0, 3.0]);
        v += IVec3::new([1, 1, 1]);
        assert_eq!(v, FVec3::new([2.0, 3.0, 4.0]));
    }

    #[test]
    fn compound_division_of_int_vector_by_scalar_truncates() {
        let mut v = IVec3::new([9, 10, -11]);
        v /= 2_i32;
        assert_eq!(v, IVec3::new([4, 5, -5]));
    }
}
