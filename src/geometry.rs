//! Geometric functions on vectors.

use crate::{
    num::Scalar,
    promote::{CommonType, Promote, promote_pair, zip_promoted},
    vector::Vector,
};
use std::ops::BitXor;

/// Cross product between two vectors.
///
/// Implemented for vectors of length 2, 3 and 4, computing in the
/// [`CommonType`] of the element types:
///
/// - Length 2 gives the scalar `a[0]*b[1] - a[1]*b[0]`, the signed area of the
///   parallelogram spanned by the vectors.
/// - Length 3 gives the usual cross product vector.
/// - Length 4 gives the 3D cross product of the first three components, with
///   `a[3]*b[3]` as the fourth component. This is not a standard 4D product.
///
/// The `^` operator is a synonym for [`Cross::cross`].
pub trait Cross<Rhs = Self> {
    type Output;

    /// Computes the cross product of this vector with another.
    fn cross(&self, rhs: &Rhs) -> Self::Output;
}

impl<T, S> Cross<Vector<S, 2>> for Vector<T, 2>
where
    T: Promote<S>,
    S: Copy,
{
    type Output = CommonType<T, S>;

    #[inline]
    fn cross(&self, rhs: &Vector<S, 2>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        a[0] * b[1] - a[1] * b[0]
    }
}

impl<T, S> Cross<Vector<S, 3>> for Vector<T, 3>
where
    T: Promote<S>,
    S: Copy,
{
    type Output = Vector<CommonType<T, S>, 3>;

    #[inline]
    fn cross(&self, rhs: &Vector<S, 3>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        Vector::new([
            a[1] * b[2] - b[1] * a[2],
            a[2] * b[0] - b[2] * a[0],
            a[0] * b[1] - b[0] * a[1],
        ])
    }
}

impl<T, S> Cross<Vector<S, 4>> for Vector<T, 4>
where
    T: Promote<S>,
    S: Copy,
{
    type Output = Vector<CommonType<T, S>, 4>;

    #[inline]
    fn cross(&self, rhs: &Vector<S, 4>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        Vector::new([
            a[1] * b[2] - b[1] * a[2],
            a[2] * b[0] - b[2] * a[0],
            a[0] * b[1] - b[0] * a[1],
            a[3] * b[3],
        ])
    }
}

impl<'a, T, S, const N: usize> BitXor<&'a Vector<S, N>> for &'a Vector<T, N>
where
    Vector<T, N>: Cross<Vector<S, N>>,
{
    type Output = <Vector<T, N> as Cross<Vector<S, N>>>::Output;

    #[inline]
    fn bitxor(self, rhs: &'a Vector<S, N>) -> Self::Output {
        self.cross(rhs)
    }
}

impl<T, S, const N: usize> BitXor<Vector<S, N>> for Vector<T, N>
where
    Vector<T, N>: Cross<Vector<S, N>>,
{
    type Output = <Vector<T, N> as Cross<Vector<S, N>>>::Output;

    #[inline]
    fn bitxor(self, rhs: Vector<S, N>) -> Self::Output {
        self.cross(&rhs)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot<S: Copy>(&self, other: &Vector<S, N>) -> CommonType<T, S>
    where
        T: Promote<S>,
    {
        zip_promoted(self, other, |a, b| a * b)
            .into_iter()
            .fold(<CommonType<T, S> as Scalar>::ZERO, |sum, product| {
                sum + product
            })
    }

    /// Computes the square of the norm of the vector, which is its dot product
    /// with itself.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.iter()
            .fold(T::ZERO, |sum, &value| sum + value * value)
    }

    /// Returns a vector with the absolute value of each element.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(|value| if value >= T::ZERO { value } else { T::ZERO - value })
    }

    /// Computes the norm (length) of the vector. For integer elements the
    /// norm is truncated.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().square_root()
    }

    /// Computes the normalized version of the vector by dividing it by its
    /// norm. If the vector has zero length, the result will be non-finite for
    /// floating point elements, and the division panics for integer elements.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(T::divide_all(self.into_array(), self.norm()))
    }
}

/// Computes the dot product of two vectors.
#[inline]
pub fn dot<T, S, const N: usize>(a: &Vector<T, N>, b: &Vector<S, N>) -> CommonType<T, S>
where
    T: Promote<S>,
    S: Copy,
{
    a.dot(b)
}

/// Computes the cross product of two vectors, see [`Cross`].
#[inline]
pub fn cross<A, B>(a: &A, b: &B) -> A::Output
where
    A: Cross<B>,
{
    a.cross(b)
}

/// Computes the square of the length of a vector.
#[inline]
pub fn norm_squared<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.norm_squared()
}

/// Computes the length of a vector.
#[inline]
pub fn length<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.norm()
}

/// Divides a vector by its length. The zero vector gives a non-finite result
/// for floating point elements.
#[inline]
pub fn normalize<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.normalized()
}

/// Computes the absolute value of each element of a vector.
#[inline]
pub fn abs<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.component_abs()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{DVec2, DVec3, DVec4, FVec2, IVec2, IVec3, IVec4, Vec2, Vec3};
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-6;

    prop_compose! {
        fn vec3_strategy(max_component: f64)(
            components in prop::array::uniform3(-max_component..max_component)
        ) -> DVec3 {
            DVec3::new(components)
        }
    }

    prop_compose! {
        fn nonzero_vec3_strategy(max_component: f64)(
            v in vec3_strategy(max_component).prop_filter("vector must not be zero", |v| v.norm() > 1e-3)
        ) -> DVec3 {
            v
        }
    }

    #[test]
    fn dot_product_sums_elementwise_products() {
        let a = DVec3::new([1.0, 2.0, 3.0]);
        let b = DVec3::new([4.0, -5.0, 6.0]);
        assert_abs_diff_eq!(a.dot(&b), 12.0);
        assert_abs_diff_eq!(dot(&a, &b), 12.0);
    }

    #[test]
    fn dot_product_of_int_and_double_vectors_is_double() {
        let product: f64 = dot(&IVec2::new([1, 2]), &DVec2::new([0.5, 0.25]));
        assert_abs_diff_eq!(product, 1.0);
    }

    #[test]
    fn dot_product_of_int_vectors_is_int() {
        let product: i32 = IVec4::new([1, 2, 3, 4]).dot(&IVec4::new([5, 6, 7, 8]));
        assert_eq!(product, 70);
    }

    #[test]
    fn pseudo_cross_product_gives_signed_area() {
        let a = DVec2::new([1.0, 0.0]);
        let b = DVec2::new([0.0, 1.0]);
        assert_abs_diff_eq!(a.cross(&b), 1.0);
        assert_abs_diff_eq!(b.cross(&a), -1.0);
        assert_abs_diff_eq!(a ^ b, 1.0);
        assert_eq!(IVec2::new([2, 3]) ^ IVec2::new([4, 5]), 2 * 5 - 3 * 4);
    }

    #[test]
    fn cross_product_of_unit_axes_gives_third_axis() {
        let x = Vec3::new([1.0, 0.0, 0.0]);
        let y = Vec3::new([0.0, 1.0, 0.0]);
        let z = Vec3::new([0.0, 0.0, 1.0]);
        assert_eq!(x ^ y, z);
        assert_eq!(y ^ z, x);
        assert_eq!(z ^ x, y);
        assert_eq!(cross(&y, &x), -z);
        assert_eq!(&x ^ &y, z);
    }

    #[test]
    fn cross_product_of_int_and_double_vectors_is_double() {
        let product: DVec3 = IVec3::new([1, 0, 0]).cross(&DVec3::new([0.0, 2.0, 0.0]));
        assert_eq!(product, DVec3::new([0.0, 0.0, 2.0]));
    }

    #[test]
    fn four_dimensional_cross_product_multiplies_fourth_components() {
        let a = DVec4::new([1.0, 0.0, 0.0, 3.0]);
        let b = DVec4::new([0.0, 1.0, 0.0, -2.0]);
        assert_eq!(a ^ b, DVec4::new([0.0, 0.0, 1.0, -6.0]));
    }

    #[test]
    fn computing_norm_works() {
        let v = Vec2::new([3.0, 4.0]);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(length(&v), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 25.0, epsilon = EPSILON);
        assert_eq!(norm_squared(&IVec2::new([3, 4])), 25);
    }

    #[test]
    fn normalizing_vector_gives_unit_vector() {
        let v = Vec2::new([3.0, 4.0]);
        let normalized = normalize(&v);
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vec2::new([0.6, 0.8]), epsilon = EPSILON);

        let normalized = FVec2::new([0.0, -2.0]).normalized();
        assert_abs_diff_eq!(normalized, FVec2::new([0.0, -1.0]));
    }

    #[test]
    fn computing_norm_of_int_vector_truncates() {
        assert_eq!(length(&IVec2::new([3, 4])), 5);
        assert_eq!(IVec3::new([1, 1, 1]).norm(), 1);
        assert_eq!(IVec3::new([2, -3, 6]).norm(), 7);
    }

    #[test]
    fn normalizing_int_vector_divides_by_truncated_norm() {
        assert_eq!(normalize(&IVec2::new([3, 4])), IVec2::new([0, 0]));
        assert_eq!(normalize(&IVec2::new([0, -7])), IVec2::new([0, -1]));
        assert_eq!(IVec3::new([10, 0, 0]).normalized(), IVec3::new([1, 0, 0]));
    }

    #[test]
    #[should_panic]
    fn normalizing_zero_int_vector_panics() {
        let _ = normalize(&IVec2::ZERO);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        let normalized = DVec3::ZERO.normalized();
        assert!(normalized.iter().all(|value| value.is_nan()));
    }

    #[test]
    fn component_abs_flips_negative_elements() {
        assert_eq!(abs(&IVec3::new([-1, 0, 2])), IVec3::new([1, 0, 2]));
        assert_eq!(
            DVec2::new([-0.5, 0.25]).component_abs(),
            DVec2::new([0.5, 0.25])
        );
        let unsigned = crate::Vector::new([3_u8, 0]);
        assert_eq!(unsigned.component_abs(), unsigned);
    }

    proptest! {
        #[test]
        fn dot_product_is_commutative(a in vec3_strategy(1e3), b in vec3_strategy(1e3)) {
            prop_assert!(abs_diff_eq!(a.dot(&b), b.dot(&a), epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(a in vec3_strategy(1e3), b in vec3_strategy(1e3)) {
            prop_assert!(abs_diff_eq!(a.cross(&b), -b.cross(&a), epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_orthogonal_to_operands(a in vec3_strategy(1e2), b in vec3_strategy(1e2)) {
            let c = a ^ b;
            let tolerance = 1e-9 * (1.0 + a.norm_squared() * b.norm());
            prop_assert!(abs_diff_eq!(a.dot(&c), 0.0, epsilon = tolerance));
            prop_assert!(abs_diff_eq!(b.dot(&c), 0.0, epsilon = tolerance));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector_has_unit_length(v in nonzero_vec3_strategy(1e3)) {
            prop_assert!(abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = EPSILON));
        }
    }
}
