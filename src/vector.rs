//! Vectors.

use crate::num::Scalar;
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::{
    array,
    ops::{Index, IndexMut},
    slice,
};

/// An `N`-dimensional vector with elements of type `T`.
///
/// The elements are stored contiguously in a `[T; N]`, so the vector has the
/// same size and alignment as the array. A vector with zero elements is
/// rejected at compile time.
///
/// The [`Default`] vector is zero-initialized, meaning every element is
/// `T::default()`.
///
/// Arithmetic requires elements implementing [`Scalar`]. Vectors of [`bool`]
/// are produced by the elementwise comparison methods and reduced with
/// [`Vector::all`] and [`Vector::any`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of elements in the vector.
    pub const LEN: usize = N;

    const NONEMPTY: () = assert!(N > 0, "InvalidLength: a vector must have at least one element");

    /// Creates a new vector with the given elements.
    ///
    /// A vector without elements does not compile:
    ///
    /// ```compile_fail
    /// use fixvec::Vector;
    ///
    /// let empty = Vector::<f64, 0>::new([]);
    /// ```
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = Self::NONEMPTY;
        Self { data }
    }

    /// The number of elements in the vector.
    #[inline]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub const fn len(&self) -> usize {
        N
    }

    /// The elements of the vector as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// The elements of the vector as a mutable array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// The elements of the vector as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements of the vector as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// A raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// A raw mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Consumes the vector and returns its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// An iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// An iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// A mutable reference to the element at the given index.
    ///
    /// # Panics
    /// If `index` is not smaller than `N`.
    #[inline]
    pub fn component_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// A reference to the element at the given index, without bounds
    /// checking.
    ///
    /// # Safety
    /// `index` must be smaller than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that the index is in bounds
        unsafe { self.data.get_unchecked(index) }
    }

    /// A mutable reference to the element at the given index, without bounds
    /// checking.
    ///
    /// # Safety
    /// `index` must be smaller than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that the index is in bounds
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// A mutable reference to the x-component. Only compiles for `N >= 1`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        self.named_mut::<0>()
    }

    /// A mutable reference to the y-component. Only compiles for `N >= 2`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        self.named_mut::<1>()
    }

    /// A mutable reference to the z-component. Only compiles for `N >= 3`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        self.named_mut::<2>()
    }

    /// A mutable reference to the w-component. Only compiles for `N >= 4`.
    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        self.named_mut::<3>()
    }

    #[inline]
    fn named_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "the vector has no component with this name") };
        &mut self.data[I]
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a new vector with the same value for all elements.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new([value; N])
    }

    /// The element at the given index. Equivalent to `self[index]`.
    ///
    /// # Panics
    /// If `index` is not smaller than `N`.
    #[inline]
    pub fn component(&self, index: usize) -> T {
        self.data[index]
    }

    /// The x-component. Only compiles for `N >= 1`.
    #[inline]
    pub fn x(&self) -> T {
        self.named::<0>()
    }

    /// The y-component. Only compiles for `N >= 2`.
    #[inline]
    pub fn y(&self) -> T {
        self.named::<1>()
    }

    /// The z-component. Only compiles for `N >= 3`.
    #[inline]
    pub fn z(&self) -> T {
        self.named::<2>()
    }

    /// The w-component. Only compiles for `N >= 4`.
    ///
    /// ```compile_fail
    /// use fixvec::Vec2;
    ///
    /// let w = Vec2::new([1.0, 2.0]).w();
    /// ```
    #[inline]
    pub fn w(&self) -> T {
        self.named::<3>()
    }

    /// Copies the `M` contiguous elements starting at `offset` into a new
    /// vector.
    ///
    /// # Panics
    /// If `offset + M` exceeds `N`.
    #[inline]
    pub fn sub_vector<const M: usize>(&self, offset: usize) -> Vector<T, M> {
        assert!(
            offset.checked_add(M).is_some_and(|end| end <= N),
            "sub-vector of length {M} at offset {offset} exceeds vector of length {N}"
        );
        Vector::new(array::from_fn(|idx| self.data[offset + idx]))
    }

    /// Copies the first `M` elements into a new vector.
    ///
    /// # Panics
    /// If `M` exceeds `N`.
    #[inline]
    pub fn head<const M: usize>(&self) -> Vector<T, M> {
        self.sub_vector(0)
    }

    /// Returns a vector with the given closure applied to each element.
    #[inline]
    pub fn mapped<U>(&self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::new(self.data.map(f))
    }

    /// Converts each element to `U` with the semantics of an `as` cast.
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.mapped(AsPrimitive::<U>::as_)
    }

    /// Assigns the elements of a vector of another element type to this
    /// vector, converting each element with the semantics of an `as` cast.
    #[inline]
    pub fn assign_from<S>(&mut self, other: &Vector<S, N>)
    where
        S: AsPrimitive<T>,
        T: 'static,
    {
        for (dst, &src) in self.data.iter_mut().zip(other.iter()) {
            *dst = src.as_();
        }
    }

    #[inline]
    fn named<const I: usize>(&self) -> T {
        const { assert!(I < N, "the vector has no component with this name") };
        self.data[I]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The vector with all elements zero.
    pub const ZERO: Self = Self::same(T::ZERO);

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }
}

impl<T: Copy + Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::same(T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.into_array()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// SAFETY: The vector is a transparent wrapper around `[T; N]`, which is
// zeroable when `T` is
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}

// SAFETY: The vector is a transparent wrapper around `[T; N]`, which is
// plain old data when `T` is
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

#[cfg(feature = "arbitrary")]
impl<'a, T, const N: usize> arbitrary::Arbitrary<'a> for Vector<T, N>
where
    T: arbitrary::Arbitrary<'a>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?))
    }
}
