//! Shorthand names for common vector types.

use crate::vector::Vector;

macro_rules! define_aliases {
    ($n:literal => $($alias:ident, $null:ident: $t:ty),+) => {
        $(
            #[doc = concat!("A ", stringify!($n), "-dimensional vector of `", stringify!($t), "`.")]
            pub type $alias = Vector<$t, $n>;

            #[doc = concat!("The zero [`", stringify!($alias), "`].")]
            pub const $null: $alias = <$alias>::ZERO;
        )+
    };
}

define_aliases!(2 =>
    DVec2, NULL_DVEC2: f64,
    FVec2, NULL_FVEC2: f32,
    IVec2, NULL_IVEC2: i32
);
define_aliases!(3 =>
    DVec3, NULL_DVEC3: f64,
    FVec3, NULL_FVEC3: f32,
    IVec3, NULL_IVEC3: i32
);
define_aliases!(4 =>
    DVec4, NULL_DVEC4: f64,
    FVec4, NULL_FVEC4: f32,
    IVec4, NULL_IVEC4: i32
);

pub type BVec2 = Vector<bool, 2>;
pub type BVec3 = Vector<bool, 3>;
pub type BVec4 = Vector<bool, 4>;

/// The default 2-dimensional vector, with `f64` elements.
pub type Vec2 = DVec2;
/// The default 3-dimensional vector, with `f64` elements.
pub type Vec3 = DVec3;
/// The default 4-dimensional vector, with `f64` elements.
pub type Vec4 = DVec4;

pub const NULL_VEC2: Vec2 = NULL_DVEC2;
pub const NULL_VEC3: Vec3 = NULL_DVEC3;
pub const NULL_VEC4: Vec4 = NULL_DVEC4;
