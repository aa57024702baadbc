//! Run configuration.
//!
//! Read from `bake.toml` in the input root when present; every key is
//! optional.  The builder methods mirror the keys for programmatic use.
//!
//! ```toml
//! model_dir = "model"
//! font_dir = "font"
//! out_dir = "src"
//! atlas_preview = true
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Configuración de una pasada de bake.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BakeConfig {
    /// Vector documents: `game/*.svg` and `fonts/<name>/*.svg` below it.
    pub model_dir: PathBuf,
    /// Bitmap fonts, searched recursively for `*.bdf`.
    pub font_dir: PathBuf,
    /// Destination of `model.{c,data}` and `font.{c,data}`.
    pub out_dir: PathBuf,
    /// Also write `<atlas>.png` next to the sources.
    pub atlas_preview: bool,
    pub log_level: String,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("model"),
            font_dir: PathBuf::from("font"),
            out_dir: PathBuf::from("src"),
            atlas_preview: false,
            log_level: "info".to_string(),
        }
    }
}

impl BakeConfig {
    pub const FILE_NAME: &'static str = "bake.toml";

    /// Load `bake.toml` from `root`, or the defaults if there is none.
    pub fn load(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = root.as_ref().join(Self::FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_atlas_preview(mut self, enabled: bool) -> Self {
        self.atlas_preview = enabled;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// `dir` relative to `root` unless it is already absolute.
    pub fn resolve(root: &Path, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(BakeConfig::from_toml("").unwrap(), BakeConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = BakeConfig::from_toml("out_dir = \"gen\"\natlas_preview = true\n").unwrap();
        assert_eq!(c.out_dir, PathBuf::from("gen"));
        assert!(c.atlas_preview);
        assert_eq!(c.model_dir, PathBuf::from("model"));
        assert_eq!(c.log_level, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(BakeConfig::from_toml("modle_dir = \"x\"").is_err());
    }

    #[test]
    fn builder_overrides() {
        let c = BakeConfig::default()
            .with_model_dir("art")
            .with_font_dir("bdf")
            .with_out_dir("/tmp/out")
            .with_atlas_preview(true)
            .with_log_level("warn");
        assert_eq!(c.font_dir, PathBuf::from("bdf"));
        assert_eq!(c.log_level, "warn");
        assert_eq!(
            BakeConfig::resolve(Path::new("/root"), &c.out_dir),
            PathBuf::from("/tmp/out")
        );
        assert_eq!(
            BakeConfig::resolve(Path::new("/root"), &c.model_dir),
            PathBuf::from("/root/art")
        );
    }

    #[test]
    fn missing_file_gives_defaults() {
        let c = BakeConfig::load("/no/such/root").unwrap();
        assert_eq!(c, BakeConfig::default());
    }
}
