//! Shrink-to-fit bounds correction.
//!
//! Detects geometry escaping the canvas or the padded safe zone, then
//! applies ONE uniform scale+translate to the entire icon. Per-element
//! scaling would distort relative proportions, so the transform is always
//! whole-icon; the scale is clamped to 1 so the corrector only ever
//! shrinks (enlarging would amplify generation noise).

use crate::bounds;
use crate::config::ValidatorConfig;
use crate::geom;
use crate::icon::{Element, IconDescription, Shape};
use crate::report::Diagnostics;

/// Detect canvas/safe-zone violations and repair them in one transform.
pub fn fit_to_canvas(
    icon: &mut IconDescription,
    config: &ValidatorConfig,
    diag: &mut Diagnostics,
) {
    let canvas = config.canvas_size;
    let pad = config.padding;
    // Later grid snapping can push a box up to one grid unit past the safe
    // zone; tolerate that much here so re-validating corrected output does
    // not re-trigger the transform.
    let slack = config.grid;

    let mut violated = false;
    for (i, el) in icon.elements.iter().enumerate() {
        let Some(b) = bounds::shape_bounds(&el.shape) else {
            continue;
        };
        if b.x0 < 0.0 || b.y0 < 0.0 || b.x1 > canvas || b.y1 > canvas {
            let msg = format!("Element {} ({}) extends outside the canvas", i, el.shape.kind());
            if config.strict_bounds {
                diag.error(msg);
            } else {
                diag.warning(msg);
            }
            violated = true;
        } else if b.x0 < pad - slack
            || b.y0 < pad - slack
            || b.x1 > canvas - pad + slack
            || b.y1 > canvas - pad + slack
        {
            diag.warning(format!(
                "Element {} ({}) crosses into the canvas padding",
                i,
                el.shape.kind()
            ));
            violated = true;
        }
    }
    if !violated {
        return;
    }
    let Some(agg) = bounds::elements_bounds(&icon.elements) else {
        return;
    };

    // A zero-extent icon (a single point) is scaled as if one unit wide.
    let content_w = if agg.width() > 0.0 { agg.width() } else { 1.0 };
    let content_h = if agg.height() > 0.0 { agg.height() } else { 1.0 };
    let avail = config.available();
    let scale = (avail / content_w).min(avail / content_h).min(1.0);
    let dx = pad + (avail - content_w * scale) / 2.0 - agg.x0 * scale;
    let dy = pad + (avail - content_h * scale) / 2.0 - agg.y0 * scale;

    for el in &mut icon.elements {
        transform(el, scale, dx, dy);
    }
    diag.warning(format!(
        "Rescaled icon content to fit the canvas (scale {scale:.2})"
    ));
}

/// Apply `scale` then `(dx, dy)` to every coordinate-bearing field.
///
/// Stroke widths scale but never translate. Polygon points and path data
/// are rewritten at the numeric-token level: both only need the tokens,
/// not a full path grammar, so the string-level transform mirrors the
/// token pairing used for bounds extraction.
pub(crate) fn transform(el: &mut Element, scale: f64, dx: f64, dy: f64) {
    match &mut el.shape {
        Shape::Circle { cx, cy, r } => {
            *cx = *cx * scale + dx;
            *cy = *cy * scale + dy;
            *r *= scale;
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            *cx = *cx * scale + dx;
            *cy = *cy * scale + dy;
            *rx *= scale;
            *ry *= scale;
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => {
            *x = *x * scale + dx;
            *y = *y * scale + dy;
            *width *= scale;
            *height *= scale;
            if let Some(rx) = rx {
                *rx *= scale;
            }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            *x1 = *x1 * scale + dx;
            *y1 = *y1 * scale + dy;
            *x2 = *x2 * scale + dx;
            *y2 = *y2 * scale + dy;
        }
        Shape::Polygon { points } | Shape::Polyline { points } => {
            *points = geom::map_tokens(points, |i, v| {
                if i % 2 == 0 { v * scale + dx } else { v * scale + dy }
            });
        }
        Shape::Path { d } => {
            *d = geom::map_tokens(d, |i, v| {
                if i % 2 == 0 { v * scale + dx } else { v * scale + dy }
            });
        }
        Shape::Unknown { .. } => {}
    }
    if let Some(w) = &mut el.style.stroke_width {
        *w *= scale;
    }
}
