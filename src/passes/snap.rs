//! Grid snapping for pixel-crisp rendering.
//!
//! Rounds every coordinate-bearing field, and parsed polygon point pairs,
//! to the nearest grid multiple. Path `d` strings are left as-is:
//! token-level rounding risks corrupting command semantics when a command
//! letter sits flush against a number.

use crate::config::ValidatorConfig;
use crate::geom;
use crate::icon::{IconDescription, Shape};
use crate::report::Diagnostics;

pub fn quantize(icon: &mut IconDescription, config: &ValidatorConfig, diag: &mut Diagnostics) {
    let grid = config.grid;
    if grid <= 0.0 {
        return;
    }

    let mut changed = 0usize;
    for el in &mut icon.elements {
        match &mut el.shape {
            Shape::Circle { cx, cy, r } => {
                changed += snap(cx, grid) + snap(cy, grid) + snap(r, grid);
            }
            Shape::Ellipse { cx, cy, rx, ry } => {
                changed += snap(cx, grid) + snap(cy, grid) + snap(rx, grid) + snap(ry, grid);
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                changed += snap(x, grid) + snap(y, grid) + snap(width, grid) + snap(height, grid);
                if let Some(rx) = rx {
                    changed += snap(rx, grid);
                }
            }
            Shape::Line { x1, y1, x2, y2 } => {
                changed += snap(x1, grid) + snap(y1, grid) + snap(x2, grid) + snap(y2, grid);
            }
            Shape::Polygon { points } | Shape::Polyline { points } => {
                let mut pairs = geom::point_pairs(points);
                if !pairs.is_empty() {
                    for p in &mut pairs {
                        changed += snap(&mut p.x, grid) + snap(&mut p.y, grid);
                    }
                    *points = geom::join_pairs(&pairs);
                }
            }
            Shape::Path { .. } | Shape::Unknown { .. } => {}
        }
    }

    if changed > 0 {
        diag.warning(format!("Snapped {changed} coordinates to the {grid}-unit grid"));
    }
}

fn snap(v: &mut f64, grid: f64) -> usize {
    let snapped = (*v / grid).round() * grid;
    if (snapped - *v).abs() > 1e-9 {
        *v = snapped;
        1
    } else {
        0
    }
}
