//! Fixed-size numeric vectors with mixed-type arithmetic.
//!
//! A [`Vector<T, N>`] holds exactly `N` elements of the scalar type `T`.
//! Arithmetic between vectors of different scalar types yields a vector of
//! their common type (see [`Promote`]), and vectors can be assembled from any
//! mix of scalars and smaller vectors with the [`vector!`] macro.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod aliases;
pub mod compare;
pub mod geometry;
pub mod num;
pub mod ops;
pub mod promote;
pub mod unroll;
pub mod vector;

pub use aliases::*;
pub use compare::{all, any, max, min};
pub use geometry::{Cross, abs, cross, dot, length, norm_squared, normalize};
pub use num::{Scalar, SignedScalar};
pub use promote::{CommonType, Promote};
pub use unroll::{Component, Unroll};
pub use vector::Vector;
