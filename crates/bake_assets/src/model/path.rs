//! Path data and polygon outlines as line segments.

use bake_core::{BakeError, BakeResult};
use glam::Vec2;

use super::document::Polygon;

/// The supported subset of path commands.  Coordinates are absolute and
/// in the path's local space; y grows downward as in the source document.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Parsed but emits nothing; closed outlines repeat their first point
    /// with an explicit `L` instead.
    Close,
}

/// Parse `d` text such as `"M0,0 L10,0 L10,10 Z"`.  The coordinate pair
/// may also follow the command letter as a separate token (`"M 0,0"`).
pub fn parse_path(d: &str) -> BakeResult<Vec<PathCommand>> {
    let mut commands = Vec::new();
    let mut words = d.split_whitespace();

    while let Some(word) = words.next() {
        let (letter, rest) = word.split_at(word.chars().next().map_or(0, char::len_utf8));
        let command = match letter {
            "M" | "L" => {
                let coords = if rest.is_empty() {
                    words
                        .next()
                        .ok_or_else(|| BakeError::PathCommand(word.to_string()))?
                } else {
                    rest
                };
                let point = parse_point(coords)?;
                if letter == "M" {
                    PathCommand::MoveTo(point)
                } else {
                    PathCommand::LineTo(point)
                }
            }
            "Z" if rest.is_empty() => PathCommand::Close,
            _ => return Err(BakeError::PathCommand(word.to_string())),
        };
        commands.push(command);
    }

    Ok(commands)
}

/// `"x,y"` as a point.
pub fn parse_point(text: &str) -> BakeResult<Vec2> {
    let mut parts = text.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BakeError::Number(text.to_string()));
    };
    let number = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|_| BakeError::Number(text.to_string()))
    };
    Ok(Vec2::new(number(x)?, number(y)?))
}

/// Expand commands into segment endpoints: every `L` emits the current
/// cursor followed by its target.  The cursor starts at the origin.
pub fn segments(commands: &[PathCommand]) -> Vec<Vec2> {
    let mut points = Vec::new();
    let mut cursor = Vec2::ZERO;
    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => cursor = p,
            PathCommand::LineTo(p) => {
                points.push(cursor);
                points.push(p);
                cursor = p;
            }
            PathCommand::Close => {}
        }
    }
    points
}

/// Closed outline through the polygon's vertices: one segment per
/// consecutive pair plus one from the last vertex back to the first.
pub fn polygon_segments(polygon: &Polygon) -> Vec<Vec2> {
    let vertices: Vec<Vec2> = polygon
        .coords
        .chunks_exact(2)
        .map(|c| Vec2::new(c[0] as f32, c[1] as f32))
        .collect();

    let mut points = Vec::with_capacity(vertices.len() * 2);
    for (i, &v) in vertices.iter().enumerate() {
        points.push(v);
        points.push(vertices[(i + 1) % vertices.len()]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn open_path_yields_two_segments() {
        let cmds = parse_path("M0,0 L10,0 L10,10").unwrap();
        assert_eq!(
            segments(&cmds),
            vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)]
        );
    }

    #[test]
    fn close_emits_nothing() {
        let open = segments(&parse_path("M0,0 L1,0 L1,1").unwrap());
        let closed = segments(&parse_path("M0,0 L1,0 L1,1 Z").unwrap());
        assert_eq!(open, closed);
    }

    #[test]
    fn move_restarts_cursor() {
        let cmds = parse_path("M1,1 L2,2 M5,5 L6,6").unwrap();
        assert_eq!(
            segments(&cmds),
            vec![v(1.0, 1.0), v(2.0, 2.0), v(5.0, 5.0), v(6.0, 6.0)]
        );
    }

    #[test]
    fn line_without_move_starts_at_origin() {
        assert_eq!(segments(&parse_path("L3,4").unwrap()), vec![v(0.0, 0.0), v(3.0, 4.0)]);
    }

    #[test]
    fn separated_coordinates() {
        assert_eq!(
            parse_path("M 1.5,-2 L 3,4").unwrap(),
            vec![PathCommand::MoveTo(v(1.5, -2.0)), PathCommand::LineTo(v(3.0, 4.0))]
        );
    }

    #[test]
    fn unsupported_commands_are_fatal() {
        assert!(matches!(parse_path("M0,0 C1,1"), Err(BakeError::PathCommand(_))));
        assert!(matches!(parse_path("m0,0"), Err(BakeError::PathCommand(_))));
        assert!(matches!(parse_path("M0,0 Zq"), Err(BakeError::PathCommand(_))));
        assert!(matches!(parse_path("M"), Err(BakeError::PathCommand(_))));
    }

    #[test]
    fn malformed_points_are_fatal() {
        assert!(matches!(parse_path("M1"), Err(BakeError::Number(_))));
        assert!(matches!(parse_path("M1,2,3"), Err(BakeError::Number(_))));
        assert!(matches!(parse_path("Lx,2"), Err(BakeError::Number(_))));
    }

    #[test]
    fn square_polygon_is_closed_loop() {
        let square = Polygon { coords: vec![0, 0, 10, 0, 10, 10, 0, 10] };
        #[rustfmt::skip]
        let expected = vec![
            v(0.0, 0.0),   v(10.0, 0.0),
            v(10.0, 0.0),  v(10.0, 10.0),
            v(10.0, 10.0), v(0.0, 10.0),
            v(0.0, 10.0),  v(0.0, 0.0),
        ];
        assert_eq!(polygon_segments(&square), expected);
    }

    #[test]
    fn empty_polygon_emits_nothing() {
        assert!(polygon_segments(&Polygon::default()).is_empty());
    }
}
