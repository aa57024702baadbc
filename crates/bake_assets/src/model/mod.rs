//! Vector documents flattened into line-segment models.
//!
//! The group tree is walked depth-first.  At each group the accumulated
//! transform is extended by the group's own `transform`; each path then
//! adds its own before its points are mapped.  Within a group, paths come
//! first, then polygons, then child groups.  Polygon vertices are emitted
//! as written: neither group nor path transforms apply to them.
//!
//! Once the whole tree is flattened every point is moved from the
//! document's top-left, y-down space into a bottom-left, y-up space of the
//! same size.

pub mod document;
pub mod font;
pub mod path;
pub mod transform;

use std::path::Path as FsPath;

use bake_core::{AffineMatrix, BakeError, BakeResult};
use glam::{Mat3, Vec2};

pub use document::{Group, Root, ViewBox};
pub use font::{character_for_stem, ModelFont};
pub use path::PathCommand;

/// A flattened drawing: every consecutive pair in `points` is one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub width: i32,
    pub height: i32,
    pub points: Vec<Vec2>,
}

impl Model {
    /// Compile document text into a model.
    pub fn compile(text: &str) -> BakeResult<Self> {
        Self::from_root(&Root::parse(text)?)
    }

    /// Read and compile a document file.  Errors name the file.
    pub fn load(path: impl AsRef<FsPath>) -> BakeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BakeError::io(path, e))?;
        let model = Self::compile(&text).map_err(|e| e.in_file(path))?;
        log::debug!(
            "{}: {}x{}, {} segments",
            path.display(),
            model.width,
            model.height,
            model.segment_count()
        );
        Ok(model)
    }

    pub fn from_root(root: &Root) -> BakeResult<Self> {
        let ViewBox { width, height, .. } = root.view_box;

        let mut points = Vec::new();
        flatten_groups(&root.groups, Mat3::IDENTITY, &mut points)?;

        let to_y_up = Mat3::IDENTITY
            .translated(Vec2::new(0.0, height as f32))
            .scaled(Vec2::new(1.0, -1.0));
        for p in &mut points {
            *p = to_y_up.transform_point(*p);
        }

        Ok(Self {
            width,
            height,
            points,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.chunks_exact(2).map(|s| (s[0], s[1]))
    }
}

fn flatten_groups(groups: &[Group], transform: Mat3, out: &mut Vec<Vec2>) -> BakeResult<()> {
    for group in groups {
        let group_transform = transform * transform::parse_transform(&group.transform)?;

        for p in &group.paths {
            let path_transform = group_transform * transform::parse_transform(&p.transform)?;
            let commands = path::parse_path(&p.d)?;
            out.extend(
                path::segments(&commands)
                    .into_iter()
                    .map(|pt| path_transform.transform_point(pt)),
            );
        }

        for polygon in &group.polygons {
            out.extend(path::polygon_segments(polygon));
        }

        flatten_groups(&group.groups, group_transform, out)?;
    }
    Ok(())
}
