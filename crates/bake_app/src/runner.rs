use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use bake_assets::discover::{self, asset_identifier, file_stem};
use bake_assets::emit::{self, atlas_symbols, model_font_symbols, model_symbols};
use bake_assets::{Emitted, Font, FontEmitter, GlyphAtlas, Model, ModelEmitter, ModelFont};
use bake_core::BakeResult;

use crate::config::BakeConfig;

/// Everything one run produces, held in memory until it is written.
#[derive(Debug, Default)]
pub struct BakeOutput {
    pub models: Emitted,
    pub fonts: Emitted,
    /// Packed atlases by symbol name, kept for the optional previews.
    pub atlases: Vec<(String, GlyphAtlas)>,
    pub model_count: usize,
    pub model_font_count: usize,
}

/// Punto de entrada de una pasada: descubre, compila y escribe.
pub struct Baker {
    root: PathBuf,
    config: BakeConfig,
}

impl Baker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: BakeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BakeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BakeConfig {
        &self.config
    }

    fn dir(&self, dir: &Path) -> PathBuf {
        BakeConfig::resolve(&self.root, dir)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir(&self.config.out_dir)
    }

    /// Compile every discovered asset without touching the output directory.
    /// The first failing asset aborts the run.
    pub fn compile(&self) -> anyhow::Result<BakeOutput> {
        let mut output = BakeOutput::default();
        let mut names: BTreeSet<String> =
            emit::RESERVED_SYMBOLS.iter().map(|s| s.to_string()).collect();

        // ── Models ────────────────────────────────────────────────────────
        let model_dir = self.dir(&self.config.model_dir);
        let mut models = ModelEmitter::new();

        for dir in discover::list_dirs(&model_dir.join("fonts"))? {
            let name = identifier_for(&dir)?;
            let font = ModelFont::load_dir(name, &dir)?;
            claim(&mut names, model_font_symbols(&font), &dir)?;
            log::info!(
                "model font {} ({} glyphs, height {})",
                font.name,
                font.len(),
                font.height
            );
            models.model_font(&font)?;
            output.model_font_count += 1;
        }

        for path in discover::list_files(&model_dir.join("game"), "svg")? {
            let name = identifier_for(&path)?;
            claim(&mut names, model_symbols(&name), &path)?;
            let model = Model::load(&path)?;
            log::info!(
                "model {name} ({}x{}, {} segments)",
                model.width,
                model.height,
                model.segment_count()
            );
            models.model(&name, &model)?;
            output.model_count += 1;
        }
        output.models = models.finish();

        // ── Fonts ─────────────────────────────────────────────────────────
        let mut fonts = FontEmitter::new();
        for path in discover::walk_files(&self.dir(&self.config.font_dir), "bdf")? {
            let font = Font::load(&path)?;
            let name = font.atlas_name(&identifier_for(&path)?);
            claim(&mut names, atlas_symbols(&name), &path)?;
            let atlas = GlyphAtlas::pack(&font).map_err(|e| e.in_file(&path))?;
            log::info!(
                "font {name} ({} glyphs, atlas {}x{})",
                font.glyph_count(),
                atlas.width,
                atlas.height
            );
            fonts.atlas(&name, &atlas)?;
            output.atlases.push((name, atlas));
        }
        output.fonts = fonts.finish();

        Ok(output)
    }

    /// Write the four source files, then the previews if enabled.
    pub fn write(&self, output: &BakeOutput) -> anyhow::Result<()> {
        let out_dir = self.out_dir();
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;

        let files = [
            ("model.data", &output.models.data),
            ("model.c", &output.models.source),
            ("font.data", &output.fonts.data),
            ("font.c", &output.fonts.source),
        ];
        for (file, text) in files {
            let path = out_dir.join(file);
            std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
            log::debug!("wrote {}", path.display());
        }

        if self.config.atlas_preview {
            for (name, atlas) in &output.atlases {
                atlas.save_preview(out_dir.join(format!("{name}.png")))?;
            }
        }
        Ok(())
    }

    pub fn run(self) -> anyhow::Result<BakeOutput> {
        let output = self.compile()?;
        self.write(&output)?;
        log::info!(
            "baked {} models, {} model fonts, {} atlases into {}",
            output.model_count,
            output.model_font_count,
            output.atlases.len(),
            self.out_dir().display()
        );
        Ok(output)
    }
}

fn identifier_for(path: &Path) -> BakeResult<String> {
    asset_identifier(&file_stem(path)).map_err(|e| e.in_file(path))
}

/// Generated symbols share one C namespace with the preamble typedefs.
fn claim(names: &mut BTreeSet<String>, symbols: Vec<String>, source: &Path) -> anyhow::Result<()> {
    for symbol in symbols {
        if names.contains(&symbol) {
            bail!(
                "{}: symbol {symbol} is already defined by another asset or the preamble",
                source.display()
            );
        }
        names.insert(symbol);
    }
    Ok(())
}
