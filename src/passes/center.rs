//! Recentering of the post-fit composition.
//!
//! Runs unconditionally but is a silent no-op when the content midpoint
//! already sits within the threshold of canvas center. Translate only;
//! scaling belongs to the fit pass.

use crate::bounds;
use crate::config::ValidatorConfig;
use crate::geom;
use crate::icon::IconDescription;
use crate::passes::fit;
use crate::report::Diagnostics;

pub fn recenter(icon: &mut IconDescription, config: &ValidatorConfig, diag: &mut Diagnostics) {
    let Some(agg) = bounds::elements_bounds(&icon.elements) else {
        return;
    };
    let target = config.canvas_size / 2.0;
    let dx = target - agg.center().x;
    let dy = target - agg.center().y;
    if dx.abs() <= config.center_threshold && dy.abs() <= config.center_threshold {
        return;
    }

    for el in &mut icon.elements {
        fit::transform(el, 1.0, dx, dy);
    }
    diag.warning(format!(
        "Icon content is off-center; shifted by ({}, {})",
        geom::fmt_coord(dx),
        geom::fmt_coord(dy)
    ));
}
