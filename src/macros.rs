//! Utility macros.

/// Creates a [`Vector`](crate::Vector) from a sequence of scalars and smaller
/// vectors, which are written in order into the elements of the new vector.
///
/// Expands to [`Vector::from_parts`](crate::Vector::from_parts) with the
/// arguments as a tuple, so the length and element type of the vector come
/// from the context. Fails to compile if the arguments do not fill exactly
/// the length of the vector.
///
/// ```
/// use fixvec::{Vec2, Vec3, vector};
///
/// let xy = Vec2::new([1.0, 2.0]);
/// let v: Vec3 = vector![xy, 3.0];
/// assert_eq!(v, Vec3::new([1.0, 2.0, 3.0]));
/// ```
#[macro_export]
macro_rules! vector {
    ($($part:expr),+ $(,)?) => {
        $crate::Vector::from_parts(($($part,)+))
    };
}

macro_rules! impl_elementwise_binop {
    ($op:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<'a, T, S, const N: usize> ::std::ops::$op<&'a $crate::Vector<S, N>>
            for &'a $crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
        {
            type Output = $crate::Vector<$crate::CommonType<T, S>, N>;

            #[inline]
            fn $method(self, rhs: &'a $crate::Vector<S, N>) -> Self::Output {
                $crate::promote::zip_promoted(self, rhs, |$lhs, $rhs| $body)
            }
        }

        impl<T, S, const N: usize> ::std::ops::$op<$crate::Vector<S, N>> for &$crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
        {
            type Output = $crate::Vector<$crate::CommonType<T, S>, N>;

            #[inline]
            fn $method(self, rhs: $crate::Vector<S, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T, S, const N: usize> ::std::ops::$op<&'a $crate::Vector<S, N>>
            for $crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
        {
            type Output = $crate::Vector<$crate::CommonType<T, S>, N>;

            #[inline]
            fn $method(self, rhs: &'a $crate::Vector<S, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T, S, const N: usize> ::std::ops::$op<$crate::Vector<S, N>> for $crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
        {
            type Output = $crate::Vector<$crate::CommonType<T, S>, N>;

            #[inline]
            fn $method(self, rhs: $crate::Vector<S, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_elementwise_binop_assign {
    ($op:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<T, S, const N: usize> ::std::ops::$op<&$crate::Vector<S, N>> for $crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
            $crate::CommonType<T, S>: ::num_traits::AsPrimitive<T>,
        {
            #[inline]
            fn $method(&mut self, rhs: &$crate::Vector<S, N>) {
                *self = $crate::promote::zip_promoted(self, rhs, |$lhs, $rhs| $body).cast();
            }
        }

        impl<T, S, const N: usize> ::std::ops::$op<$crate::Vector<S, N>> for $crate::Vector<T, N>
        where
            T: $crate::Promote<S>,
            S: Copy,
            $crate::CommonType<T, S>: ::num_traits::AsPrimitive<T>,
        {
            #[inline]
            fn $method(&mut self, rhs: $crate::Vector<S, N>) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_scalar_broadcast {
    ($($s:ty),+) => {
        $(
            impl<T, const N: usize> ::std::ops::Mul<$s> for &$crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn mul(self, rhs: $s) -> Self::Output {
                    $crate::promote::broadcast_promoted(self, rhs, |a, b| a * b)
                }
            }

            impl<T, const N: usize> ::std::ops::Mul<$s> for $crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn mul(self, rhs: $s) -> Self::Output {
                    ::std::ops::Mul::mul(&self, rhs)
                }
            }

            impl<T, const N: usize> ::std::ops::Mul<&$crate::Vector<T, N>> for $s
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn mul(self, rhs: &$crate::Vector<T, N>) -> Self::Output {
                    ::std::ops::Mul::mul(rhs, self)
                }
            }

            impl<T, const N: usize> ::std::ops::Mul<$crate::Vector<T, N>> for $s
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn mul(self, rhs: $crate::Vector<T, N>) -> Self::Output {
                    ::std::ops::Mul::mul(&rhs, self)
                }
            }

            impl<T, const N: usize> ::std::ops::Div<$s> for &$crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn div(self, rhs: $s) -> Self::Output {
                    let divisor = <T as $crate::Promote<$s>>::promote_rhs(rhs);
                    let values = self.mapped(<T as $crate::Promote<$s>>::promote_lhs);
                    $crate::Vector::new(
                        <$crate::CommonType<T, $s> as $crate::Scalar>::divide_all(
                            values.into_array(),
                            divisor,
                        ),
                    )
                }
            }

            impl<T, const N: usize> ::std::ops::Div<$s> for $crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
            {
                type Output = $crate::Vector<$crate::CommonType<T, $s>, N>;

                #[inline]
                fn div(self, rhs: $s) -> Self::Output {
                    ::std::ops::Div::div(&self, rhs)
                }
            }

            impl<T, const N: usize> ::std::ops::MulAssign<$s> for $crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
                $crate::CommonType<T, $s>: ::num_traits::AsPrimitive<T>,
            {
                #[inline]
                fn mul_assign(&mut self, rhs: $s) {
                    *self = ::std::ops::Mul::mul(&*self, rhs).cast();
                }
            }

            impl<T, const N: usize> ::std::ops::DivAssign<$s> for $crate::Vector<T, N>
            where
                T: $crate::Promote<$s>,
                $crate::CommonType<T, $s>: ::num_traits::AsPrimitive<T>,
            {
                #[inline]
                fn div_assign(&mut self, rhs: $s) {
                    *self = ::std::ops::Div::div(&*self, rhs).cast();
                }
            }
        )+
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $bound:path, |$this:ident| $body:expr) => {
        impl<T: $bound, const N: usize> ::std::ops::$op for &$crate::Vector<T, N> {
            type Output = $crate::Vector<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<T: $bound, const N: usize> ::std::ops::$op for $crate::Vector<T, N> {
            type Output = $crate::Vector<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}
