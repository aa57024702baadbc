//! In-memory form of a vector document.
//!
//! Only the elements the compiler understands are kept: `g`, `path` and
//! `polygon` below `g`, and the root's `viewBox`.  Anything else in the
//! file (metadata, `defs`, elements directly under the root) is dropped.
//! Attribute text is kept verbatim; transforms and path data are
//! interpreted later, during flattening.

use bake_core::{BakeError, BakeResult};
use roxmltree::{Node, ParsingOptions};

/// `minX minY width height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewBox {
    pub min_x: i32,
    pub min_y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub view_box: ViewBox,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub transform: String,
    pub groups: Vec<Group>,
    pub paths: Vec<Path>,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub d: String,
    pub transform: String,
}

/// Flat `x y x y ...` integer list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub coords: Vec<i32>,
}

impl Root {
    pub fn parse(text: &str) -> BakeResult<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| BakeError::Xml(e.to_string()))?;
        let root = doc.root_element();

        Ok(Root {
            view_box: parse_view_box(root.attribute("viewBox").unwrap_or(""))?,
            groups: elements(root, "g").map(read_group).collect::<BakeResult<_>>()?,
        })
    }
}

pub fn parse_view_box(text: &str) -> BakeResult<ViewBox> {
    let values = text
        .split_whitespace()
        .map(|v| v.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| BakeError::ViewBox(text.to_string()))?;

    match values[..] {
        [min_x, min_y, width, height] => Ok(ViewBox {
            min_x,
            min_y,
            width,
            height,
        }),
        _ => Err(BakeError::ViewBox(text.to_string())),
    }
}

fn elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

fn read_group(node: Node) -> BakeResult<Group> {
    Ok(Group {
        transform: node.attribute("transform").unwrap_or("").to_string(),
        groups: elements(node, "g").map(read_group).collect::<BakeResult<_>>()?,
        paths: elements(node, "path")
            .map(|p| Path {
                d: p.attribute("d").unwrap_or("").to_string(),
                transform: p.attribute("transform").unwrap_or("").to_string(),
            })
            .collect(),
        polygons: elements(node, "polygon")
            .map(|p| read_polygon(p.attribute("points").unwrap_or("")))
            .collect::<BakeResult<_>>()?,
    })
}

fn read_polygon(points: &str) -> BakeResult<Polygon> {
    let coords = points
        .split_whitespace()
        .map(|c| c.parse::<i32>().map_err(|_| BakeError::Number(c.to_string())))
        .collect::<BakeResult<Vec<_>>>()?;
    if coords.len() % 2 != 0 {
        return Err(BakeError::Polygon(coords.len()));
    }
    Ok(Polygon { coords })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 32">
  <title>ignored</title>
  <path d="M0,0 L1,1"/>
  <g transform="translate(1, 2)">
    <path d="M0,0 L5,5" transform="scale(2, 2)"/>
    <polygon points="0 0 10 0 10 10"/>
    <g><path d="M1,1 L2,2"/></g>
  </g>
  <g/>
</svg>"#;

    #[test]
    fn reads_nested_groups() {
        let root = Root::parse(DOC).unwrap();
        assert_eq!(
            root.view_box,
            ViewBox { min_x: 0, min_y: 0, width: 64, height: 32 }
        );
        assert_eq!(root.groups.len(), 2);

        let g = &root.groups[0];
        assert_eq!(g.transform, "translate(1, 2)");
        assert_eq!(g.paths[0].transform, "scale(2, 2)");
        assert_eq!(g.polygons[0].coords, vec![0, 0, 10, 0, 10, 10]);
        assert_eq!(g.groups[0].paths[0].d, "M1,1 L2,2");
        assert!(g.groups[0].transform.is_empty());
    }

    #[test]
    fn view_box_needs_four_integers() {
        assert!(matches!(parse_view_box("0 0 10"), Err(BakeError::ViewBox(_))));
        assert!(matches!(parse_view_box("0 0 10 1.5"), Err(BakeError::ViewBox(_))));
        assert!(matches!(parse_view_box(""), Err(BakeError::ViewBox(_))));
        assert!(parse_view_box("  -4 2 10 20 ").is_ok());
    }

    #[test]
    fn missing_view_box_is_fatal() {
        let err = Root::parse("<svg><g/></svg>").unwrap_err();
        assert!(matches!(err, BakeError::ViewBox(_)));
    }

    #[test]
    fn odd_polygon_is_fatal() {
        let doc = r#"<svg viewBox="0 0 1 1"><g><polygon points="1 2 3"/></g></svg>"#;
        assert!(matches!(Root::parse(doc), Err(BakeError::Polygon(3))));
    }

    #[test]
    fn non_integer_polygon_is_fatal() {
        let doc = r#"<svg viewBox="0 0 1 1"><g><polygon points="1 2.5"/></g></svg>"#;
        assert!(matches!(Root::parse(doc), Err(BakeError::Number(_))));
    }

    #[test]
    fn broken_xml_is_fatal() {
        assert!(matches!(Root::parse("<svg"), Err(BakeError::Xml(_))));
    }
}
