//! Atlas packing for bitmap glyphs.
//!
//! The atlas is one RGBA8 strip `width * 128` pixels wide and `height`
//! pixels tall.  Code `c` owns columns `c*width .. (c+1)*width`.  Rows are
//! stored bottom-up (glyph row `y` lands on atlas row `height-1-y`) so the
//! texture agrees with the y-up space models are emitted in.

use std::path::Path;

use bake_core::{BakeError, BakeResult};

use super::Font;
use crate::CHAR_COUNT;

pub const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphAtlas {
    /// Width of one glyph slot.
    pub width: usize,
    pub height: usize,
    /// Always `width * height * 128 * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Byte length of the atlas for a `width` x `height` cell, or `None` if it
/// cannot be allocated.
pub fn atlas_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(CHAR_COUNT * 4)
        .filter(|&len| len <= isize::MAX as usize)
}

impl GlyphAtlas {
    pub fn pack(font: &Font) -> BakeResult<Self> {
        let (width, height) = (font.width, font.height);
        let len = atlas_len(width, height).ok_or_else(|| BakeError::Record {
            keyword: "FONTBOUNDINGBOX",
            line: format!("{width} {height}"),
        })?;
        let stride = width * CHAR_COUNT;
        let mut pixels = vec![0u8; len];

        for glyph in font.glyphs.iter().flatten() {
            let slot_x = glyph.code as usize * width;
            for y in 0..height {
                let row = height - 1 - y;
                for x in 0..width {
                    if glyph.bitmap.get(y * width + x).copied().unwrap_or(false) {
                        let dst = (row * stride + slot_x + x) * 4;
                        pixels[dst..dst + 4].copy_from_slice(&OPAQUE_WHITE);
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Full strip width in pixels.
    pub fn columns(&self) -> usize {
        self.width * CHAR_COUNT
    }

    /// RGBA of atlas pixel `(x, y)`, `y` counted from the bottom row.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.columns() || y >= self.height {
            return None;
        }
        let at = (y * self.columns() + x) * 4;
        self.pixels[at..at + 4].try_into().ok()
    }

    /// Write the atlas as a PNG, top row first so it reads upright.
    pub fn save_preview(&self, path: impl AsRef<Path>) -> BakeResult<()> {
        let path = path.as_ref();
        let preview_error = |source: Box<dyn std::error::Error + Send + Sync>| BakeError::Preview {
            path: path.to_path_buf(),
            source,
        };

        let width = u32::try_from(self.columns()).map_err(|e| preview_error(e.into()))?;
        let height = u32::try_from(self.height).map_err(|e| preview_error(e.into()))?;
        let image = image::RgbaImage::from_raw(width, height, self.pixels.clone())
            .ok_or_else(|| preview_error("atlas buffer does not match its size".into()))?;

        image::imageops::flip_vertical(&image)
            .save(path)
            .map_err(|e| preview_error(e.into()))?;
        log::info!("wrote atlas preview {}", path.display());
        Ok(())
    }
}
