//! Construction of vectors from sequences of scalars and smaller vectors.
//!
//! A vector of length `N` can be built from a tuple of parts, where each part
//! is either a scalar or a vector. The parts are written in order into the
//! elements of the new vector: a scalar fills one element and a vector of
//! length `M` fills `M` consecutive elements. Every value is converted to the
//! element type of the new vector with the semantics of an `as` cast. The
//! parts must fill exactly `N` elements, which is checked at compile time.
//!
//! ```
//! use fixvec::{DVec2, DVec3, DVec4, vector};
//!
//! let a: DVec4 = vector![DVec2::new([1.0, 2.0]), 3.0, 4.0];
//! let b: DVec4 = vector![DVec3::new([1.0, 2.0, 3.0]), 4];
//! assert_eq!(a, b);
//! ```

use crate::vector::Vector;
use anyhow::{Result, bail};
use num_traits::AsPrimitive;
use std::array;

/// A value that can fill one or more consecutive elements of a vector with
/// element type `T`.
pub trait Component<T> {
    /// The number of elements the value fills.
    const LEN: usize;

    /// Writes the value into the given elements. The slice has length
    /// [`Self::LEN`].
    fn write_to(self, slots: &mut [T]);
}

/// An ordered sequence of [`Component`]s that can fill the elements of a
/// vector with element type `T`.
pub trait Unroll<T> {
    /// The total number of elements filled by the components.
    const LEN: usize;

    /// Writes the components in order into the given elements. The slice has
    /// length [`Self::LEN`].
    fn unroll_into(self, slots: &mut [T]);
}

macro_rules! impl_component_for_scalar {
    ($($s:ty),+) => {
        $(
            impl<T> Component<T> for $s
            where
                $s: AsPrimitive<T>,
                T: Copy + 'static,
            {
                const LEN: usize = 1;

                #[inline]
                fn write_to(self, slots: &mut [T]) {
                    slots[0] = self.as_();
                }
            }
        )+
    };
}

impl_component_for_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Component<bool> for bool {
    const LEN: usize = 1;

    #[inline]
    fn write_to(self, slots: &mut [bool]) {
        slots[0] = self;
    }
}

impl<T, S, const M: usize> Component<T> for Vector<S, M>
where
    S: AsPrimitive<T>,
    T: Copy + 'static,
{
    const LEN: usize = M;

    #[inline]
    fn write_to(self, slots: &mut [T]) {
        for (slot, value) in slots.iter_mut().zip(self) {
            *slot = value.as_();
        }
    }
}

macro_rules! impl_unroll_for_tuple {
    ($($part:ident . $idx:tt),+) => {
        impl<T, $($part: Component<T>),+> Unroll<T> for ($($part,)+) {
            const LEN: usize = 0 $(+ <$part as Component<T>>::LEN)+;

            #[inline]
            fn unroll_into(self, slots: &mut [T]) {
                let mut offset = 0;
                $(
                    let end = offset + <$part as Component<T>>::LEN;
                    self.$idx.write_to(&mut slots[offset..end]);
                    offset = end;
                )+
                debug_assert_eq!(offset, slots.len());
            }
        }
    };
}

impl_unroll_for_tuple!(A.0);
impl_unroll_for_tuple!(A.0, B.1);
impl_unroll_for_tuple!(A.0, B.1, C.2);
impl_unroll_for_tuple!(A.0, B.1, C.2, D.3);
impl_unroll_for_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_unroll_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_unroll_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_unroll_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<T: Copy + Default, const N: usize> Vector<T, N> {
    /// Creates a vector by writing the given tuple of scalars and vectors in
    /// order into its elements, converting each value to `T`.
    ///
    /// Fails to compile if the parts do not fill exactly `N` elements. The
    /// [`vector!`](crate::vector!) macro is a shorthand for this.
    ///
    /// ```
    /// use fixvec::{DVec2, DVec3, Vector};
    ///
    /// let v = DVec3::from_parts((DVec2::new([1.0, 2.0]), 3_i32));
    /// assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
    /// ```
    ///
    /// Too few parts:
    ///
    /// ```compile_fail
    /// use fixvec::DVec3;
    ///
    /// let v = DVec3::from_parts((1.0, 2.0));
    /// ```
    ///
    /// Too many parts:
    ///
    /// ```compile_fail
    /// use fixvec::{DVec3, vector};
    ///
    /// let v: DVec3 = vector![1.0, 2.0, 3.0, 4.0];
    /// ```
    ///
    /// A vector part longer than the remaining elements:
    ///
    /// ```compile_fail
    /// use fixvec::{DVec2, DVec3, vector};
    ///
    /// let v: DVec3 = vector![1.0, 2.0, DVec2::new([3.0, 4.0])];
    /// ```
    #[inline]
    pub fn from_parts<P: Unroll<T>>(parts: P) -> Self {
        const {
            assert!(
                <P as Unroll<T>>::LEN == N,
                "ArityMismatch: the parts must fill exactly the length of the vector"
            );
        };
        let mut data = [T::default(); N];
        parts.unroll_into(&mut data);
        Self::new(data)
    }

    /// Creates a vector from the elements of a slice whose length is only
    /// known at runtime, converting each element to `T`.
    ///
    /// # Errors
    /// Returns an error if the length of the slice is not `N`.
    pub fn try_from_slice<S>(values: &[S]) -> Result<Self>
    where
        S: AsPrimitive<T>,
        T: 'static,
    {
        if values.len() != N {
            log::trace!(
                "Rejected slice of length {} for vector of length {}",
                values.len(),
                N
            );
            bail!(
                "Arity mismatch: got {} values for a vector of length {}",
                values.len(),
                N
            );
        }
        Ok(Self::new(array::from_fn(|idx| values[idx].as_())))
    }

    /// Creates a vector from every `stride`-th element of a slice, starting
    /// with the first, converting each element to `T`. Elements after the
    /// `N`th selected one are ignored.
    ///
    /// # Errors
    /// Returns an error if `stride` is zero or the slice is too short to
    /// provide `N` elements with the given stride.
    pub fn try_from_strided_slice<S>(values: &[S], stride: usize) -> Result<Self>
    where
        S: AsPrimitive<T>,
        T: 'static,
    {
        if stride == 0 {
            log::trace!("Rejected zero stride for vector of length {}", N);
            bail!("Invalid stride: the stride must be at least one");
        }
        let Some(required_len) = strided_len(N, stride) else {
            log::trace!(
                "Rejected stride {} overflowing for vector of length {}",
                stride,
                N
            );
            bail!(
                "Invalid stride: a vector of length {} with stride {} spans more values than can be addressed",
                N,
                stride
            );
        };
        if values.len() < required_len {
            log::trace!(
                "Rejected slice of length {} for vector of length {} with stride {}",
                values.len(),
                N,
                stride
            );
            bail!(
                "Arity mismatch: a vector of length {} with stride {} needs at least {} values, got {}",
                N,
                stride,
                required_len,
                values.len()
            );
        }
        Ok(Self::new(array::from_fn(|idx| values[idx * stride].as_())))
    }
}

impl<T: Copy + 'static, const N: usize> Vector<T, N> {
    /// Overwrites the elements with every `stride`-th element of a slice,
    /// starting with the first, converting each element to `T`.
    ///
    /// # Panics
    /// If the slice is too short to provide `N` elements with the given
    /// stride, or if `stride` is zero.
    pub fn copy_from_strided_slice<S>(&mut self, values: &[S], stride: usize)
    where
        S: AsPrimitive<T>,
    {
        assert!(stride > 0, "stride must be at least one");
        assert!(
            strided_len(N, stride).is_some_and(|required_len| values.len() >= required_len),
            "slice of length {} too short for vector of length {} with stride {}",
            values.len(),
            N,
            stride
        );
        for (idx, element) in self.iter_mut().enumerate() {
            *element = values[idx * stride].as_();
        }
    }
}

/// The number of values spanned by `len` elements taken `stride` apart, or
/// `None` if it overflows.
fn strided_len(len: usize, stride: usize) -> Option<usize> {
    (len - 1).checked_mul(stride)?.checked_add(1)
}
