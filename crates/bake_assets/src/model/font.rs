//! Stroke fonts assembled from one vector document per character.

use std::path::Path;

use bake_core::{BakeError, BakeResult};

use super::Model;
use crate::{discover, CHAR_COUNT};

/// 128 character slots, each optionally holding a model.
#[derive(Debug, Clone)]
pub struct ModelFont {
    pub name: String,
    pub height: i32,
    pub glyphs: [Option<Model>; CHAR_COUNT],
}

/// Character a document file stands for, from its file stem:
/// `space` is `' '`, `lower-x` is `x`, `upper-x` is `X`, anything else is
/// its own last character.
pub fn character_for_stem(stem: &str) -> BakeResult<u8> {
    let out_of_range = || BakeError::Character {
        name: stem.to_string(),
    };

    if stem == "space" {
        return Ok(b' ');
    }

    let last = stem.chars().last().ok_or_else(out_of_range)?;
    let c = if stem.starts_with("upper-") {
        last.to_ascii_uppercase()
    } else {
        last
    };

    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(out_of_range())
    }
}

impl ModelFont {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: 0,
            glyphs: std::array::from_fn(|_| None),
        }
    }

    /// Place `model` in the slot for `code`, replacing any previous one.
    /// Codes past the last slot are ignored.
    pub fn insert(&mut self, code: u8, model: Model) {
        if let Some(slot) = self.glyphs.get_mut(code as usize) {
            *slot = Some(model);
            self.height = self.line_height();
        }
    }

    pub fn get(&self, code: u8) -> Option<&Model> {
        self.glyphs.get(code as usize)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height of the space glyph, else of the lowest populated code.
    fn line_height(&self) -> i32 {
        self.get(b' ')
            .or_else(|| self.glyphs.iter().flatten().next())
            .map_or(0, |m| m.height)
    }

    /// Compile every `.svg` file in `dir` into one font.
    pub fn load_dir(name: impl Into<String>, dir: impl AsRef<Path>) -> BakeResult<Self> {
        let mut font = Self::new(name);
        for file in discover::list_files(dir.as_ref(), "svg")? {
            let stem = discover::file_stem(&file);
            let code = character_for_stem(&stem).map_err(|e| e.in_file(&file))?;
            font.insert(code, Model::load(&file)?);
        }
        log::debug!("model font {}: {} glyphs", font.name, font.len());
        Ok(font)
    }
}
