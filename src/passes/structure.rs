//! Structural normalization of the raw generated value.
//!
//! Guarantees the downstream passes a well-shaped working copy: canonical
//! canvas size, an elements array, and no presentation-layer attributes.
//! Runs first and is non-optional.

use serde_json::{Map, Value};

use crate::config::ValidatorConfig;
use crate::icon::{Element, IconDescription};
use crate::report::Diagnostics;

/// Presentation-layer attributes the generator must not emit. Stripped
/// unconditionally from the root object and every element.
pub const FORBIDDEN_ATTRS: &[&str] = &[
    "class",
    "style",
    "transform",
    "id",
    "data-id",
    "preserveAspectRatio",
];

/// Normalize any JSON value into a typed icon description.
///
/// Total: a maximally malformed input (non-object root) yields an empty
/// icon plus the matching structural errors.
pub fn normalize(
    input: &Value,
    config: &ValidatorConfig,
    diag: &mut Diagnostics,
) -> IconDescription {
    let empty = Map::new();
    let root = input.as_object().unwrap_or(&empty);

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    if name.is_none() {
        diag.error("Missing name field");
    }

    let canvas = config.canvas_size;
    if dimension(root, "width") != Some(canvas) {
        diag.warning(format!("Invalid width corrected to {canvas}"));
    }
    if dimension(root, "height") != Some(canvas) {
        diag.warning(format!("Invalid height corrected to {canvas}"));
    }

    let raw_elements: &[Value] = match root.get("elements") {
        Some(Value::Array(items)) => {
            if items.is_empty() {
                diag.error("Icon has no elements");
            }
            items
        }
        _ => {
            diag.error("Icon elements must be an array");
            &[]
        }
    };
    if raw_elements.len() > config.max_elements {
        diag.warning(format!(
            "Icon has {} elements; consider simplifying to {} or fewer",
            raw_elements.len(),
            config.max_elements
        ));
    }

    let mut stripped = FORBIDDEN_ATTRS
        .iter()
        .filter(|key| root.contains_key(**key))
        .count();

    let elements: Vec<Element> = raw_elements
        .iter()
        .map(|raw| {
            let Some(map) = raw.as_object() else {
                return Element::from_value(raw);
            };
            let mut clean = map.clone();
            for key in FORBIDDEN_ATTRS {
                if clean.remove(*key).is_some() {
                    stripped += 1;
                }
            }
            Element::from_value(&Value::Object(clean))
        })
        .collect();

    if stripped > 0 {
        diag.warning(format!(
            "Removed {stripped} unsupported presentation attributes"
        ));
    }

    IconDescription {
        name,
        width: canvas,
        height: canvas,
        elements,
    }
}

fn dimension(root: &Map<String, Value>, key: &str) -> Option<f64> {
    match root.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
