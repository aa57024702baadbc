//! Matrix builders and inversion.
//!
//! Every builder returns `self * builder`, so a transform added later is
//! applied to a point *before* the ones already accumulated.  That is the
//! order in which nested document transforms are read.

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// Operations shared by the 3x3 (planar) and 4x4 (spatial) transforms.
pub trait AffineMatrix: Copy + Sized {
    /// The point type this matrix transforms with an implicit `w = 1`.
    type Point: Copy;

    const IDENTITY: Self;

    fn translated(self, offset: Self::Point) -> Self;
    fn scaled(self, factor: Self::Point) -> Self;
    fn transposed(&self) -> Self;

    /// Transform `point` as an affine point (homogeneous coordinate 1).
    fn transform_point(&self, point: Self::Point) -> Self::Point;

    /// Inverse via adjugate / determinant.
    ///
    /// A determinant of exactly zero is not an error: the identity is
    /// returned together with `false` and the caller decides what to do.
    fn checked_inverse(&self) -> (Self, bool);

    /// Inverse-transpose, propagating the flag from [`Self::checked_inverse`].
    fn checked_inverse_transpose(&self) -> (Self, bool) {
        match self.checked_inverse() {
            (inverse, true) => (inverse.transposed(), true),
            _ => (Self::IDENTITY, false),
        }
    }
}

/// Planar-only helpers.
pub trait Matrix3Ext {
    fn rotated(self, radians: f32) -> Self;
    /// Full 3x3 product, no implicit homogeneous coordinate.
    fn transform_vector(&self, v: Vec3) -> Vec3;
}

/// Spatial-only helpers.
pub trait Matrix4Ext {
    /// Rotate about `axis`; the axis is used as given, not normalised.
    fn rotated(self, radians: f32, axis: Vec3) -> Self;
    fn rotated_x(self, radians: f32) -> Self;
    fn rotated_y(self, radians: f32) -> Self;
    fn rotated_z(self, radians: f32) -> Self;
    fn orthographic(self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self;
    fn perspective(self, fov_radians: f32, aspect: f32, near: f32, far: f32) -> Self;
    fn transform_vector(&self, v: Vec4) -> Vec4;
}

// ── Matrix3 ─────────────────────────────────────────────────────────────────

impl AffineMatrix for Mat3 {
    type Point = Vec2;

    const IDENTITY: Self = Mat3::IDENTITY;

    #[inline]
    fn translated(self, offset: Vec2) -> Self {
        self * Mat3::from_translation(offset)
    }

    #[inline]
    fn scaled(self, factor: Vec2) -> Self {
        self * Mat3::from_scale(factor)
    }

    #[inline]
    fn transposed(&self) -> Self {
        self.transpose()
    }

    #[inline]
    fn transform_point(&self, point: Vec2) -> Vec2 {
        self.transform_point2(point)
    }

    fn checked_inverse(&self) -> (Self, bool) {
        let m = self.to_cols_array();
        let mut adj = [
            m[4] * m[8] - m[7] * m[5],
            m[2] * m[7] - m[8] * m[1],
            m[1] * m[5] - m[4] * m[2],
            m[5] * m[6] - m[8] * m[3],
            m[0] * m[8] - m[6] * m[2],
            m[2] * m[3] - m[5] * m[0],
            m[3] * m[7] - m[6] * m[4],
            m[1] * m[6] - m[7] * m[0],
            m[0] * m[4] - m[3] * m[1],
        ];

        let det = m[0] * adj[0] + m[1] * adj[3] + m[2] * adj[6];
        if det == 0.0 {
            return (Mat3::IDENTITY, false);
        }

        for v in &mut adj {
            *v /= det;
        }
        (Mat3::from_cols_array(&adj), true)
    }
}

impl Matrix3Ext for Mat3 {
    #[inline]
    fn rotated(self, radians: f32) -> Self {
        self * Mat3::from_angle(radians)
    }

    #[inline]
    fn transform_vector(&self, v: Vec3) -> Vec3 {
        *self * v
    }
}

// ── Matrix4 ─────────────────────────────────────────────────────────────────

impl AffineMatrix for Mat4 {
    type Point = Vec3;

    const IDENTITY: Self = Mat4::IDENTITY;

    #[inline]
    fn translated(self, offset: Vec3) -> Self {
        self * Mat4::from_translation(offset)
    }

    #[inline]
    fn scaled(self, factor: Vec3) -> Self {
        self * Mat4::from_scale(factor)
    }

    #[inline]
    fn transposed(&self) -> Self {
        self.transpose()
    }

    #[inline]
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn checked_inverse(&self) -> (Self, bool) {
        let m = self.to_cols_array();
        let mut adj = [0.0f32; 16];

        adj[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        adj[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        adj[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        adj[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];

        adj[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        adj[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        adj[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        adj[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];

        adj[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        adj[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        adj[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        adj[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];

        adj[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        adj[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        adj[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        adj[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        let det = m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12];
        if det == 0.0 {
            return (Mat4::IDENTITY, false);
        }

        for v in &mut adj {
            *v /= det;
        }
        (Mat4::from_cols_array(&adj), true)
    }
}

impl Matrix4Ext for Mat4 {
    #[inline]
    fn rotated(self, radians: f32, axis: Vec3) -> Self {
        self * Mat4::from_axis_angle(axis, radians)
    }

    fn rotated_x(self, radians: f32) -> Self {
        self.rotated(radians, Vec3::X)
    }

    fn rotated_y(self, radians: f32) -> Self {
        self.rotated(radians, Vec3::Y)
    }

    fn rotated_z(self, radians: f32) -> Self {
        self.rotated(radians, Vec3::Z)
    }

    fn orthographic(self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        self.scaled(Vec3::new(
            2.0 / (right - left),
            2.0 / (top - bottom),
            -2.0 / (far - near),
        ))
        .translated(Vec3::new(
            -(right + left) / 2.0,
            -(top + bottom) / 2.0,
            (far + near) / 2.0,
        ))
    }

    fn perspective(self, fov_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        let scale = 1.0 / (fov_radians / 2.0).tan();
        #[rustfmt::skip]
        let projection = Mat4::from_cols_array(&[
            scale / aspect, 0.0,   0.0,                                0.0,
            0.0,            scale, 0.0,                                0.0,
            0.0,            0.0,   -(far + near) / (far - near),       -1.0,
            0.0,            0.0,   -2.0 * near * far / (far - near),   0.0,
        ]);
        self * projection
    }

    #[inline]
    fn transform_vector(&self, v: Vec4) -> Vec4 {
        *self * v
    }
}
