//! Vector helpers on top of glam.
//!
//! Arithmetic, `length`, `normalize`, `distance`, `dot`, `min` and `max`
//! come straight from glam's operators and methods.  What lives here are
//! the few operations whose formula matters for reproducible output.
//! Zero-length inputs are not guarded: normalising or projecting onto a
//! zero vector yields non-finite components.

use glam::{Vec2, Vec3, Vec4};

pub trait VectorExt: Copy {
    /// `self * (1 - t) + end * t`; exact at both endpoints.
    fn lerp_to(self, end: Self, t: f32) -> Self;

    /// Component of `self` along `onto`.
    fn project(self, onto: Self) -> Self;
}

macro_rules! impl_vector_ext {
    ($($ty:ty),*) => {$(
        impl VectorExt for $ty {
            #[inline]
            fn lerp_to(self, end: Self, t: f32) -> Self {
                self * (1.0 - t) + end * t
            }

            #[inline]
            fn project(self, onto: Self) -> Self {
                let unit = onto / onto.length();
                unit * self.dot(unit)
            }
        }
    )*};
}

impl_vector_ext!(Vec2, Vec3, Vec4);

pub trait Vector4Ext {
    /// Cross product of the xyz parts; `w` of the result is zero.
    fn cross(self, rhs: Self) -> Self;
}

impl Vector4Ext for Vec4 {
    #[inline]
    fn cross(self, rhs: Self) -> Self {
        self.truncate().cross(rhs.truncate()).extend(0.0)
    }
}

/// View a point list as the flat `x, y, x, y, ...` float array it is emitted as.
#[inline]
pub fn as_floats(points: &[Vec2]) -> &[f32] {
    bytemuck::cast_slice(points)
}
