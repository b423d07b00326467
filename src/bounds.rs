//! Axis-aligned bounding boxes per primitive kind.
//!
//! Pure functions used by every correction pass. Degenerate or unparsable
//! primitives yield `None` and are excluded from aggregation; folding them
//! in as zero-sized boxes would pull the whole icon's bounds toward the
//! origin.

use kurbo::{Point, Rect};

use crate::geom;
use crate::icon::{Element, Shape};

/// Bounding box of one primitive, or `None` when it has no usable geometry.
///
/// Path bounds are approximated by pairing the numeric tokens of the `d`
/// string sequentially as (x, y); true bounds would require curve
/// evaluation, which this engine deliberately avoids.
pub fn shape_bounds(shape: &Shape) -> Option<Rect> {
    match *shape {
        Shape::Circle { cx, cy, r } => Some(Rect::from_points(
            Point::new(cx - r, cy - r),
            Point::new(cx + r, cy + r),
        )),
        Shape::Ellipse { cx, cy, rx, ry } => Some(Rect::from_points(
            Point::new(cx - rx, cy - ry),
            Point::new(cx + rx, cy + ry),
        )),
        Shape::Rect {
            x, y, width, height, ..
        } => Some(Rect::from_points(
            Point::new(x, y),
            Point::new(x + width, y + height),
        )),
        Shape::Line { x1, y1, x2, y2 } => Some(Rect::from_points(
            Point::new(x1, y1),
            Point::new(x2, y2),
        )),
        Shape::Polygon { ref points } | Shape::Polyline { ref points } => {
            points_bounds(&geom::point_pairs(points))
        }
        Shape::Path { ref d } => {
            let tokens = geom::numeric_tokens(d);
            let pairs: Vec<Point> = tokens
                .chunks_exact(2)
                .map(|c| Point::new(c[0], c[1]))
                .collect();
            points_bounds(&pairs)
        }
        Shape::Unknown { .. } => None,
    }
}

/// Aggregate bounds over a paint-ordered element list.
///
/// `None` when no element has usable geometry; callers must treat that as
/// "skip correction" rather than assuming a box at the origin.
pub fn elements_bounds(elements: &[Element]) -> Option<Rect> {
    elements
        .iter()
        .filter_map(|el| shape_bounds(&el.shape))
        .reduce(|acc, b| acc.union(b))
}

fn points_bounds(points: &[Point]) -> Option<Rect> {
    points
        .iter()
        .map(|p| Rect::from_points(*p, *p))
        .reduce(|acc, b| acc.union(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Style;

    fn element(shape: Shape) -> Element {
        Element {
            shape,
            style: Style::default(),
        }
    }

    #[test]
    fn circle_bounds_are_center_plus_radius() {
        let b = shape_bounds(&Shape::Circle {
            cx: 200.0,
            cy: 100.0,
            r: 50.0,
        })
        .unwrap();
        assert_eq!(b, Rect::new(150.0, 50.0, 250.0, 150.0));
    }

    #[test]
    fn negative_rect_extent_is_normalized() {
        let b = shape_bounds(&Shape::Rect {
            x: 100.0,
            y: 100.0,
            width: -40.0,
            height: 60.0,
            rx: None,
        })
        .unwrap();
        assert_eq!(b, Rect::new(60.0, 100.0, 100.0, 160.0));
    }

    #[test]
    fn path_without_numbers_has_no_bounds() {
        assert!(shape_bounds(&Shape::Path { d: "M Z".to_string() }).is_none());
        assert!(shape_bounds(&Shape::Polygon { points: String::new() }).is_none());
    }

    #[test]
    fn unknown_kinds_are_excluded_from_aggregate() {
        let els = vec![
            element(Shape::Unknown {
                kind: "star".to_string(),
                attrs: serde_json::Map::new(),
            }),
            element(Shape::Line {
                x1: 100.0,
                y1: 120.0,
                x2: 300.0,
                y2: 280.0,
            }),
        ];
        let b = elements_bounds(&els).unwrap();
        assert_eq!(b, Rect::new(100.0, 120.0, 300.0, 280.0));
    }

    #[test]
    fn aggregate_of_no_geometry_is_none() {
        let els = vec![element(Shape::Path { d: "garbage".to_string() })];
        assert!(elements_bounds(&els).is_none());
    }
}
