//! Quaternion helpers.
//!
//! glam's `Quat::lerp`/`slerp` take the shortest arc and normalise; these
//! variants interpolate the raw components like the rest of the library.
//! Construction (`Quat::from_axis_angle`), `conjugate`, `length`,
//! `normalize` and the Hamilton product (`*`) are glam's own.

use glam::{Quat, Vec3, Vec4};

pub trait QuaternionExt: Copy {
    /// `conjugate / |q|²`; valid for non-unit quaternions too.
    fn reciprocal(self) -> Self;
    /// Rotation angle in radians, `2·acos(w)`.
    fn rotation_angle(self) -> f32;
    /// Rotation axis, `xyz / sin(acos(w))`.  Not finite for the identity.
    fn rotation_axis(self) -> Vec3;
    /// Rotate the xyz part of `v`; `w` passes through unchanged.
    fn rotate_vector4(self, v: Vec4) -> Vec4;
    fn lerp_raw(self, end: Self, t: f32) -> Self;
    fn nlerp(self, end: Self, t: f32) -> Self;
    fn slerp_raw(self, end: Self, t: f32) -> Self;
}

impl QuaternionExt for Quat {
    fn reciprocal(self) -> Self {
        let scale = 1.0 / self.length_squared();
        Quat::from_xyzw(-self.x * scale, -self.y * scale, -self.z * scale, self.w * scale)
    }

    fn rotation_angle(self) -> f32 {
        self.w.acos() * 2.0
    }

    fn rotation_axis(self) -> Vec3 {
        let scale = 1.0 / self.w.acos().sin();
        Vec3::new(self.x, self.y, self.z) * scale
    }

    fn rotate_vector4(self, v: Vec4) -> Vec4 {
        (self * v.truncate()).extend(v.w)
    }

    fn lerp_raw(self, end: Self, t: f32) -> Self {
        let a = Vec4::from(self);
        let b = Vec4::from(end);
        Quat::from_vec4(a * (1.0 - t) + b * t)
    }

    fn nlerp(self, end: Self, t: f32) -> Self {
        self.lerp_raw(end, t).normalize()
    }

    fn slerp_raw(self, end: Self, t: f32) -> Self {
        let angle = self.dot(end).acos();
        let sin = angle.sin();
        let start_scale = (angle * (1.0 - t)).sin() / sin;
        let end_scale = (angle * t).sin() / sin;
        Quat::from_vec4(Vec4::from(self) * start_scale + Vec4::from(end) * end_scale)
    }
}
