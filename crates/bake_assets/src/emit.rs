//! C source emission.
//!
//! Each asset kind produces a pair of texts: a `.data` file holding the
//! raw literal arrays and a `.c` file holding typed descriptors that point
//! at them by name.  Floats are written with six decimals and bytes as
//! two-digit hex, so equal input always renders to equal bytes.  Assets
//! appear in the order they are handed in.

use std::fmt::{self, Write};

use bake_core::as_floats;

use crate::bdf::GlyphAtlas;
use crate::CHAR_COUNT;
use crate::model::{Model, ModelFont};

const MODEL_PREAMBLE: &str = r#"#include "model.h"
#include "model.data"

#if INTERFACE

typedef struct {
    int Width;
    int Height;
    int Length;
    V2 *Data;
} Model;

typedef struct {
    int Height;
    int Length;
    Model Characters[];
} ModelFont;

#endif

"#;

const FONT_PREAMBLE: &str = r#"#include <stdlib.h>
#include "font.h"
#include "font.data"

#if INTERFACE

typedef struct {
    int Width;
    int Height;
    int Chars;
    uint8_t *Data;
} Font;

#endif

"#;

/// Type names defined by the preambles and `model.h`.
pub const RESERVED_SYMBOLS: [&str; 4] = ["V2", "Model", "ModelFont", "Font"];

fn data_symbol(name: &str) -> String {
    format!("{name}Data")
}

fn char_symbol(font: &str, code: usize) -> String {
    format!("{font}Char{code}")
}

/// Every C symbol [`ModelEmitter::model`] defines for `name`.
pub fn model_symbols(name: &str) -> Vec<String> {
    vec![format!("Model{name}"), data_symbol(name)]
}

/// Every C symbol [`ModelEmitter::model_font`] defines for `font`.
pub fn model_font_symbols(font: &ModelFont) -> Vec<String> {
    let glyphs = font
        .glyphs
        .iter()
        .enumerate()
        .filter(|(_, glyph)| glyph.is_some())
        .map(|(code, _)| data_symbol(&char_symbol(&font.name, code)));
    std::iter::once(format!("{}Font", font.name))
        .chain(glyphs)
        .collect()
}

/// Every C symbol [`FontEmitter::atlas`] defines for `name`.
pub fn atlas_symbols(name: &str) -> Vec<String> {
    vec![name.to_string(), data_symbol(name)]
}

/// The two rendered texts for one asset kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emitted {
    /// Literal arrays (`*.data`).
    pub data: String,
    /// Descriptors (`*.c`).
    pub source: String,
}

pub struct ModelEmitter {
    out: Emitted,
}

impl Default for ModelEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelEmitter {
    pub fn new() -> Self {
        Self {
            out: Emitted {
                data: String::new(),
                source: MODEL_PREAMBLE.to_string(),
            },
        }
    }

    fn points(&mut self, name: &str, model: &Model) -> fmt::Result {
        writeln!(self.out.data, "V2 {}[] = {{", data_symbol(name))?;
        for xy in as_floats(&model.points).chunks_exact(2) {
            writeln!(self.out.data, "{{{:.6}, {:.6}}},", xy[0], xy[1])?;
        }
        writeln!(self.out.data, "}};")
    }

    /// `ModelFont <Name>Font` with 128 character records.
    pub fn model_font(&mut self, font: &ModelFont) -> fmt::Result {
        let src = &mut self.out.source;
        writeln!(src, "ModelFont {}Font = {{", font.name)?;
        writeln!(src, "    .Height = {},", font.height)?;
        writeln!(src, "    .Length = {CHAR_COUNT},")?;
        writeln!(src, "    .Characters = {{")?;

        for (code, glyph) in font.glyphs.iter().enumerate() {
            let Some(model) = glyph else {
                writeln!(self.out.source, "    {{}},")?;
                continue;
            };
            let char_name = char_symbol(&font.name, code);
            let src = &mut self.out.source;
            writeln!(src, "  {{")?;
            writeln!(src, "    .Width = {},", model.width)?;
            writeln!(src, "    .Height = {},", model.height)?;
            writeln!(src, "    .Length = {},", model.points.len())?;
            writeln!(src, "    .Data = {},", data_symbol(&char_name))?;
            writeln!(src, "  }},")?;
            self.points(&char_name, model)?;
        }

        writeln!(self.out.source, "    }},")?;
        writeln!(self.out.source, "}};\n")
    }

    /// `Model Model<Name>` plus its `<Name>Data` array.
    pub fn model(&mut self, name: &str, model: &Model) -> fmt::Result {
        let src = &mut self.out.source;
        writeln!(src, "Model Model{name} = {{")?;
        writeln!(src, "    .Width = {},", model.width)?;
        writeln!(src, "    .Height = {},", model.height)?;
        writeln!(src, "    .Length = {},", model.points.len())?;
        writeln!(src, "    .Data = {},", data_symbol(name))?;
        writeln!(src, "}};\n")?;
        self.points(name, model)
    }

    pub fn finish(self) -> Emitted {
        self.out
    }
}

pub struct FontEmitter {
    out: Emitted,
}

impl Default for FontEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl FontEmitter {
    pub fn new() -> Self {
        Self {
            out: Emitted {
                data: String::new(),
                source: FONT_PREAMBLE.to_string(),
            },
        }
    }

    /// `Font <Name>` plus the `<Name>Data` pixel array.
    pub fn atlas(&mut self, name: &str, atlas: &GlyphAtlas) -> fmt::Result {
        let src = &mut self.out.source;
        writeln!(src, "Font {name} = {{")?;
        writeln!(src, "  .Width = {},", atlas.width)?;
        writeln!(src, "  .Height = {},", atlas.height)?;
        writeln!(src, "  .Chars = {CHAR_COUNT},")?;
        writeln!(src, "  .Data = {},", data_symbol(name))?;
        writeln!(src, "}};\n")?;

        let data = &mut self.out.data;
        write!(data, "uint8_t {}[] = {{", data_symbol(name))?;
        for (i, b) in atlas.pixels.iter().enumerate() {
            if i > 0 {
                data.push_str(", ");
            }
            write!(data, "0x{b:02x}")?;
        }
        writeln!(data, "}};")
    }

    pub fn finish(self) -> Emitted {
        self.out
    }
}

/// Read a `V2 <name>Data[]` array back out of emitted data text.
pub fn read_points(data: &str, name: &str) -> Option<Vec<glam::Vec2>> {
    let header = format!("V2 {}[] = {{", data_symbol(name));
    let body = data.split(&header).nth(1)?.split("};").next()?;
    body.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let inner = l.trim().strip_prefix('{')?.strip_suffix("},")?;
            let (x, y) = inner.split_once(", ")?;
            Some(glam::Vec2::new(x.parse().ok()?, y.parse().ok()?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdf::Font;

    fn square() -> Model {
        Model::compile(
            r#"<svg viewBox="0 0 10 10"><g><polygon points="0 0 10 0 10 10 0 10"/></g></svg>"#,
        )
        .unwrap()
    }

    #[test]
    fn model_descriptor_and_data() {
        let mut e = ModelEmitter::new();
        e.model("Box", &square()).unwrap();
        let out = e.finish();

        assert!(out.source.starts_with("#include \"model.h\""));
        assert!(out.source.contains(
            "Model ModelBox = {\n    .Width = 10,\n    .Height = 10,\n    .Length = 8,\n    .Data = BoxData,\n};\n"
        ));
        assert!(out.data.starts_with("V2 BoxData[] = {\n{0.000000, 10.000000},\n{10.000000, 10.000000},\n"));
        assert!(out.data.ends_with("};\n"));
    }

    #[test]
    fn compiled_points_read_back_in_order() {
        let model = Model::compile(
            r#"<svg viewBox="0 0 7 3">
                <g transform="translate(0.1, 0.2) scale(1.5, 0.3)">
                  <path d="M0.123456789,0.7 L1.987654321,2.333333 L0.1,0.1"
                        transform="translate(0.3333333, 0)"/>
                  <polygon points="1 1 2 1"/>
                  <g transform="scale(0.7, 1.1)">
                    <path d="M0.123456789,0.7 L0.123456789,0.7"/>
                  </g>
                </g>
              </svg>"#,
        )
        .unwrap();
        assert_eq!(model.points.len(), 10);

        let mut e = ModelEmitter::new();
        e.model("Mixed", &model).unwrap();
        let back = read_points(&e.finish().data, "Mixed").unwrap();

        // six decimals: order and count exact, values within 1e-6
        assert_eq!(back.len(), model.points.len());
        for (i, (got, want)) in back.iter().zip(&model.points).enumerate() {
            assert!(got.abs_diff_eq(*want, 1e-6), "point {i}: {got} vs {want}");
        }
    }

    #[test]
    fn symbols_match_emitted_names() {
        let mut font = ModelFont::new("Tiny");
        font.insert(b'A', square());
        assert_eq!(model_font_symbols(&font), ["TinyFont", "TinyChar65Data"]);
        assert_eq!(model_symbols("Box"), ["ModelBox", "BoxData"]);
        assert_eq!(atlas_symbols("Tiny1Medium"), ["Tiny1Medium", "Tiny1MediumData"]);

        let mut e = ModelEmitter::new();
        e.model_font(&font).unwrap();
        e.model("Box", &square()).unwrap();
        let out = e.finish();
        for symbol in model_font_symbols(&font).iter().chain(&model_symbols("Box")) {
            assert!(
                out.source.contains(symbol.as_str()) || out.data.contains(symbol.as_str()),
                "{symbol}"
            );
        }
    }

    #[test]
    fn model_font_has_128_records() {
        let mut font = ModelFont::new("Tiny");
        font.insert(b'A', square());
        let mut e = ModelEmitter::new();
        e.model_font(&font).unwrap();
        let out = e.finish();

        assert!(out.source.contains("ModelFont TinyFont = {\n    .Height = 10,\n    .Length = 128,"));
        assert_eq!(out.source.matches("    {},\n").count(), 127);
        assert!(out.source.contains("    .Data = TinyChar65Data,"));
        assert!(out.data.contains("V2 TinyChar65Data[] = {"));
    }

    #[test]
    fn atlas_bytes_are_hex() {
        let font = Font::parse("FONTBOUNDINGBOX 1 1 0 0\nSTARTCHAR a\nENCODING 0\nBITMAP\n80\nENDCHAR\n")
            .unwrap();
        let atlas = GlyphAtlas::pack(&font).unwrap();
        let mut e = FontEmitter::new();
        e.atlas("Tiny1Medium", &atlas).unwrap();
        let out = e.finish();

        assert!(out.source.contains("Font Tiny1Medium = {\n  .Width = 1,\n  .Height = 1,\n  .Chars = 128,\n  .Data = Tiny1MediumData,\n};"));
        assert!(out.data.starts_with("uint8_t Tiny1MediumData[] = {0xff, 0xff, 0xff, 0xff, 0x00, "));
        assert!(out.data.ends_with("0x00};\n"));
        assert_eq!(out.data.matches("0x").count(), 128 * 4);
    }

    #[test]
    fn output_is_reproducible() {
        let render = || {
            let mut e = ModelEmitter::new();
            e.model("A", &square()).unwrap();
            e.model("B", &square()).unwrap();
            e.finish()
        };
        assert_eq!(render(), render());
    }
}
