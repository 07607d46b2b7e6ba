//! Elementwise comparison and reduction of vectors.

use crate::vector::Vector;
use approx::{AbsDiffEq, RelativeEq};
use std::array;

macro_rules! impl_component_comparison {
    ($bound:ident, $($(#[$attributes:meta])* $name:ident => $op:tt),+) => {
        impl<T: $bound, const N: usize> Vector<T, N> {
            $(
                $(#[$attributes])*
                #[inline]
                pub fn $name(&self, other: &Self) -> Vector<bool, N> {
                    Vector::new(array::from_fn(|idx| self[idx] $op other[idx]))
                }
            )+
        }
    };
}

impl_component_comparison!(
    PartialEq,
    /// Compares each element for equality with the corresponding element in
    /// another vector.
    component_eq => ==,
    /// Compares each element for inequality with the corresponding element in
    /// another vector.
    component_ne => !=
);

impl_component_comparison!(
    PartialOrd,
    /// Checks for each element whether it is smaller than the corresponding
    /// element in another vector.
    component_lt => <,
    /// Checks for each element whether it is larger than the corresponding
    /// element in another vector.
    component_gt => >,
    /// Checks for each element whether it is smaller than or equal to the
    /// corresponding element in another vector.
    component_le => <=,
    /// Checks for each element whether it is larger than or equal to the
    /// corresponding element in another vector.
    component_ge => >=
);

impl<const N: usize> Vector<bool, N> {
    /// Whether all elements are `true`.
    #[inline]
    pub fn all(&self) -> bool {
        self.iter().all(|&value| value)
    }

    /// Whether any element is `true`.
    #[inline]
    pub fn any(&self) -> bool {
        self.iter().any(|&value| value)
    }
}

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    /// Returns the largest element. The first of several equal largest
    /// elements is returned.
    #[inline]
    pub fn max_component(&self) -> T {
        let mut max = self[0];
        for &value in &self.as_slice()[1..] {
            if value > max {
                max = value;
            }
        }
        max
    }

    /// Returns the smallest element. The first of several equal smallest
    /// elements is returned.
    #[inline]
    pub fn min_component(&self) -> T {
        let mut min = self[0];
        for &value in &self.as_slice()[1..] {
            if value < min {
                min = value;
            }
        }
        min
    }
}

/// Whether all elements of a boolean vector are `true`.
#[inline]
pub fn all<const N: usize>(v: &Vector<bool, N>) -> bool {
    v.all()
}

/// Whether any element of a boolean vector is `true`.
#[inline]
pub fn any<const N: usize>(v: &Vector<bool, N>) -> bool {
    v.any()
}

/// Returns the largest element of a vector.
#[inline]
pub fn max<T: Copy + PartialOrd, const N: usize>(v: &Vector<T, N>) -> T {
    v.max_component()
}

/// Returns the smallest element of a vector.
#[inline]
pub fn min<T: Copy + PartialOrd, const N: usize>(v: &Vector<T, N>) -> T {
    v.min_component()
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
