//! Bitmap glyph fonts in the line-oriented BDF format.
//!
//! Only the records needed to rasterise a fixed-cell ASCII font are
//! interpreted: `FONTBOUNDINGBOX`, `WEIGHT_NAME`, `STARTCHAR`, `ENCODING`,
//! `BITMAP` and `ENDCHAR`.  Every other record is skipped.

pub mod atlas;
pub mod hex_reader;

use std::path::Path;

use bake_core::{BakeError, BakeResult};

pub use atlas::GlyphAtlas;

use crate::CHAR_COUNT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Medium,
    Bold,
}

impl FontWeight {
    pub fn name(self) -> &'static str {
        match self {
            FontWeight::Medium => "Medium",
            FontWeight::Bold => "Bold",
        }
    }
}

/// One character cell; `bitmap` is row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub code: u8,
    pub bitmap: Vec<bool>,
}

/// A fixed-cell font.  `glyphs[c]` is the glyph for code `c`, if defined.
#[derive(Debug, Clone)]
pub struct Font {
    pub width: usize,
    pub height: usize,
    pub weight: FontWeight,
    pub glyphs: [Option<Glyph>; CHAR_COUNT],
}

impl Default for Font {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            weight: FontWeight::Medium,
            glyphs: std::array::from_fn(|_| None),
        }
    }
}

impl Font {
    /// Read and parse a `.bdf` file.  Errors name the file.
    pub fn load(path: impl AsRef<Path>) -> BakeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BakeError::io(path, e))?;
        let font = Self::parse(&text).map_err(|e| e.in_file(path))?;
        log::debug!(
            "{}: {}x{} {}, {} glyphs",
            path.display(),
            font.width,
            font.height,
            font.weight.name(),
            font.glyph_count()
        );
        Ok(font)
    }

    pub fn parse(text: &str) -> BakeResult<Self> {
        let mut font = Font::default();
        let mut code: i64 = 0;
        let mut bitmap: Vec<bool> = Vec::new();

        let mut lines = text.lines();
        while let Some(line) = lines.next() {
            let mut parts = line.split_whitespace();
            let Some(keyword) = parts.next() else {
                continue;
            };

            match keyword {
                "STARTCHAR" => {
                    code = 0;
                    bitmap.clear();
                }
                "WEIGHT_NAME" => {
                    font.weight = match parts.next() {
                        Some("\"Bold\"") => FontWeight::Bold,
                        Some("\"Medium\"") => FontWeight::Medium,
                        other => return Err(BakeError::Weight(other.unwrap_or("").to_string())),
                    };
                }
                "ENCODING" => {
                    code = record_number(parts.next(), "ENCODING", line)?;
                }
                "FONTBOUNDINGBOX" => {
                    let width = record_number(parts.next(), "FONTBOUNDINGBOX", line)?;
                    let height = record_number(parts.next(), "FONTBOUNDINGBOX", line)?;
                    // every later size computation is bounded by the atlas length
                    if atlas::atlas_len(width, height).is_none() {
                        return Err(BakeError::Record {
                            keyword: "FONTBOUNDINGBOX",
                            line: line.to_string(),
                        });
                    }
                    font.width = width;
                    font.height = height;
                }
                "BITMAP" => {
                    bitmap.clear();
                    for found in 0..font.height {
                        let row = lines.next().ok_or(BakeError::BitmapRowCount {
                            found,
                            expected: font.height,
                        })?;
                        bitmap.extend(hex_reader::read_row(row.trim(), font.width)?);
                    }
                }
                "ENDCHAR" => {
                    let expected = font.width * font.height;
                    if bitmap.len() != expected {
                        return Err(BakeError::BitmapRowCount {
                            found: bitmap.len() / font.width.max(1),
                            expected: font.height,
                        });
                    }
                    match u8::try_from(code).ok().filter(|&c| (c as usize) < CHAR_COUNT) {
                        Some(c) => {
                            font.glyphs[c as usize] = Some(Glyph {
                                code: c,
                                bitmap: std::mem::take(&mut bitmap),
                            })
                        }
                        None => log::warn!("skipping glyph with code {code} outside the atlas"),
                    }
                }
                _ => {}
            }
        }

        Ok(font)
    }

    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(code as usize)?.as_ref()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    /// Symbol name for the emitted atlas: family, pixel height and weight
    /// (`Terminus16Bold`).
    pub fn atlas_name(&self, family: &str) -> String {
        format!("{family}{}{}", self.height, self.weight.name())
    }
}

fn record_number<T: std::str::FromStr>(
    value: Option<&str>,
    keyword: &'static str,
    line: &str,
) -> BakeResult<T> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| BakeError::Record {
            keyword,
            line: line.to_string(),
        })
}
