//! Offline asset compilers.
//!
//! * [`model`] flattens vector documents into line-segment [`Model`]s and
//!   groups per-character documents into [`ModelFont`]s.
//! * [`bdf`] parses bitmap glyph fonts and packs them into [`GlyphAtlas`]es.
//! * [`emit`] renders compiled assets as C arrays plus descriptors.
//!
//! Everything here is synchronous and fails on the first error; nothing is
//! written to disk except by [`GlyphAtlas::save_preview`].

/// Character slots in every font and atlas (7-bit ASCII).
pub const CHAR_COUNT: usize = 128;

pub mod bdf;
pub mod discover;
pub mod emit;
pub mod model;

pub use bdf::{Font, FontWeight, Glyph, GlyphAtlas};
pub use emit::{Emitted, FontEmitter, ModelEmitter};
pub use model::{Model, ModelFont};
