//! Core types shared by the asset compilers.
//!
//! Vector and matrix storage is plain `glam` (column-major, `f32`).  The
//! traits in [`affine`], [`vector`] and [`quaternion`] add the handful of
//! operations the compilers need with exactly the numeric behaviour the
//! emitted assets were authored against.  Builders compose on the right and
//! inversion reports singular matrices through a flag instead of producing
//! NaNs.

pub mod affine;
pub mod error;
pub mod quaternion;
pub mod vector;

pub use affine::{AffineMatrix, Matrix3Ext, Matrix4Ext};
pub use error::{BakeError, BakeResult};
pub use quaternion::QuaternionExt;
pub use vector::{as_floats, Vector4Ext, VectorExt};

// glam re-exported so downstream crates agree on a single version
pub use glam;

// ── Names used throughout the baker ────────────────────────────────────────

pub type Vector2 = glam::Vec2;
pub type Vector3 = glam::Vec3;
pub type Vector4 = glam::Vec4;
pub type Matrix3 = glam::Mat3;
pub type Matrix4 = glam::Mat4;
pub type Quaternion = glam::Quat;
