//! Input enumeration.  Listings are sorted by file name so that the
//! emitted sources do not depend on the order the filesystem returns.

use std::path::{Path, PathBuf};

use bake_core::{BakeError, BakeResult};

fn sorted_entries(dir: &Path) -> BakeResult<Vec<(PathBuf, bool)>> {
    if !dir.is_dir() {
        log::warn!("{} does not exist, nothing to bake there", dir.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| BakeError::io(dir, e))? {
        let entry = entry.map_err(|e| BakeError::io(dir, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| BakeError::io(entry.path(), e))?
            .is_dir();
        entries.push((entry.path(), is_dir));
    }
    entries.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(entries)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|e| e == extension)
}

/// Files directly inside `dir` with the given extension.
pub fn list_files(dir: &Path, extension: &str) -> BakeResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|(path, is_dir)| !is_dir && has_extension(path, extension))
        .map(|(path, _)| path)
        .collect())
}

/// Immediate subdirectories of `dir`.
pub fn list_dirs(dir: &Path) -> BakeResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|(_, is_dir)| *is_dir)
        .map(|(path, _)| path)
        .collect())
}

/// Files below `dir` at any depth, visiting each directory's entries in
/// name order and descending into subdirectories where they sort.
pub fn walk_files(dir: &Path, extension: &str) -> BakeResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    for (path, is_dir) in sorted_entries(dir)? {
        if is_dir {
            found.extend(walk_files(&path, extension)?);
        } else if has_extension(&path, extension) {
            found.push(path);
        }
    }
    Ok(found)
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Identifier used for generated symbols: the stem with its first
/// character upper-cased (`ship` → `Ship`).  The stem must already be a C
/// identifier: ASCII letters, digits and `_`, not starting with a digit.
pub fn asset_identifier(stem: &str) -> BakeResult<String> {
    let valid = stem
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(BakeError::Identifier {
            stem: stem.to_string(),
        });
    }

    let mut chars = stem.chars();
    Ok(chars
        .next()
        .map(|first| first.to_ascii_uppercase())
        .into_iter()
        .chain(chars)
        .collect())
}
