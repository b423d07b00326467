//! Archetype-specific shape canonicalization.
//!
//! A registry of heuristic rules, each gated by its own structural
//! precondition over the current element composition so rules cannot
//! misfire on unrelated icons. New archetypes register here without
//! touching the pipeline's control flow.

use kurbo::Point;

use crate::config::ValidatorConfig;
use crate::geom;
use crate::icon::{Element, IconDescription, Shape};
use crate::report::Diagnostics;

/// One canonicalization rule: a structural precondition plus a fixup.
///
/// `apply` returns the warning to record, or `None` when the composition
/// matched but was already well-formed.
pub struct ArchetypeRule {
    pub name: &'static str,
    pub matches: fn(&[Element]) -> bool,
    pub apply: fn(&mut IconDescription, &ValidatorConfig) -> Option<String>,
}

/// Builtin archetype registry.
pub fn rules() -> &'static [ArchetypeRule] {
    &[ArchetypeRule {
        name: "heart",
        matches: heart_matches,
        apply: heart_apply,
    }]
}

/// Run every registered rule whose precondition holds.
pub fn canonicalize(icon: &mut IconDescription, config: &ValidatorConfig, diag: &mut Diagnostics) {
    for rule in rules() {
        if !(rule.matches)(&icon.elements) {
            continue;
        }
        if let Some(message) = (rule.apply)(icon, config) {
            diag.warning(message);
        }
    }
}

// ── Heart: two lobes + one point ─────────────────────────────────

/// Exactly 2 circles and 1 polygon, nothing else.
fn heart_matches(elements: &[Element]) -> bool {
    let circles = elements
        .iter()
        .filter(|el| matches!(el.shape, Shape::Circle { .. }))
        .count();
    let polygons = elements
        .iter()
        .filter(|el| matches!(el.shape, Shape::Polygon { .. }))
        .count();
    circles == 2 && polygons == 1 && elements.len() == 3
}

/// Snap a misdrawn heart to the canonical symmetric form.
///
/// Fires when the triangle has extra points or the lobe centers are not
/// mirrored around the vertical canvas axis (x-coordinate sum deviating
/// from the canvas width by more than 10 units).
fn heart_apply(icon: &mut IconDescription, config: &ValidatorConfig) -> Option<String> {
    let canvas = config.canvas_size;

    let mut circle_centers = Vec::with_capacity(2);
    let mut polygon_points = 0usize;
    for el in &icon.elements {
        match &el.shape {
            Shape::Circle { cx, .. } => circle_centers.push(*cx),
            Shape::Polygon { points } => polygon_points = geom::point_pairs(points).len(),
            _ => {}
        }
    }

    let asymmetric = (circle_centers.iter().sum::<f64>() - canvas).abs() > 10.0;
    if polygon_points <= 3 && !asymmetric {
        return None;
    }

    // Canonical lobes: mirrored around the vertical axis, equal radii.
    let left = canvas * 0.35;
    let right = canvas * 0.65;
    let lobe_y = canvas * 0.4;
    let lobe_r = canvas * 0.15;
    // Canonical point: one triangle spanning both lobes.
    let triangle = [
        Point::new(canvas * 0.225, canvas * 0.475),
        Point::new(canvas * 0.775, canvas * 0.475),
        Point::new(canvas * 0.5, canvas * 0.85),
    ];

    let mut first_lobe = true;
    for el in &mut icon.elements {
        match &mut el.shape {
            Shape::Circle { cx, cy, r } => {
                // Keep left/right assignment from the drawn order.
                *cx = if first_lobe { left } else { right };
                *cy = lobe_y;
                *r = lobe_r;
                first_lobe = false;
            }
            Shape::Polygon { points } => *points = geom::join_pairs(&triangle),
            _ => {}
        }
    }

    Some("Adjusted heart geometry to the canonical symmetric form".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Style;

    fn heart_icon(cx1: f64, cx2: f64, points: &str) -> IconDescription {
        let circle = |cx: f64, r: f64| Element {
            shape: Shape::Circle { cx, cy: 160.0, r },
            style: Style::default(),
        };
        IconDescription {
            name: Some("heart".to_string()),
            width: 400.0,
            height: 400.0,
            elements: vec![
                circle(cx1, 50.0),
                circle(cx2, 45.0),
                Element {
                    shape: Shape::Polygon {
                        points: points.to_string(),
                    },
                    style: Style::default(),
                },
            ],
        }
    }

    fn circle_params(icon: &IconDescription) -> Vec<(f64, f64)> {
        icon.elements
            .iter()
            .filter_map(|el| match el.shape {
                Shape::Circle { cx, r, .. } => Some((cx, r)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn asymmetric_lobes_snap_to_mirrored_positions() {
        let mut icon = heart_icon(150.0, 280.0, "100,200 200,340 300,200");
        let mut diag = Diagnostics::new();
        canonicalize(&mut icon, &ValidatorConfig::default(), &mut diag);

        let circles = circle_params(&icon);
        assert_eq!(circles[0].0 + circles[1].0, 400.0);
        assert_eq!(circles[0].1, circles[1].1, "lobe radii equalized");
        assert!(diag.warnings.iter().any(|w| w.contains("heart")));
    }

    #[test]
    fn extra_triangle_points_trigger_the_fix() {
        let mut icon = heart_icon(140.0, 260.0, "100,200 150,260 200,300 250,260 300,200");
        let mut diag = Diagnostics::new();
        canonicalize(&mut icon, &ValidatorConfig::default(), &mut diag);

        let Shape::Polygon { points } = &icon.elements[2].shape else {
            unreachable!()
        };
        assert_eq!(geom::point_pairs(points).len(), 3);
        assert_eq!(diag.warnings.len(), 1);
    }

    #[test]
    fn well_formed_heart_is_left_alone() {
        let original = heart_icon(140.0, 260.0, "90,190 310,190 200,340");
        let mut icon = original.clone();
        let mut diag = Diagnostics::new();
        canonicalize(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert_eq!(icon, original);
        assert!(diag.is_clean());
    }

    #[test]
    fn unrelated_compositions_never_match() {
        let mut icon = IconDescription {
            name: Some("dot".to_string()),
            width: 400.0,
            height: 400.0,
            elements: vec![Element {
                shape: Shape::Circle {
                    cx: 390.0,
                    cy: 200.0,
                    r: 60.0,
                },
                style: Style::default(),
            }],
        };
        let mut diag = Diagnostics::new();
        canonicalize(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert!(diag.is_clean());
    }
}
