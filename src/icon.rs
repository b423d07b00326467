//! The icon data model: a flat list of typed 2D primitives plus shared
//! optional styling, as produced (imperfectly) by the upstream generator.
//!
//! Parsing is total: any JSON value maps to *some* `Element`. Missing or
//! non-numeric coordinate fields parse as 0, numeric strings are coerced,
//! and unrecognized kinds are carried through verbatim so they survive to
//! the corrected output without contributing geometry.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One drawable 2D primitive, tagged by kind.
///
/// The union is closed over the recognized kinds: the bounds, fit and snap
/// passes all match exhaustively, so adding a kind forces updates to each.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Point pairs serialized as "x,y x,y ..." (separators free-form).
    Polygon { points: String },
    Polyline { points: String },
    /// Compact path-command string ("M10 20 L30 40 ...").
    Path { d: String },
    /// Unrecognized kind, kept verbatim. No geometry, never transformed.
    Unknown {
        kind: String,
        attrs: Map<String, Value>,
    },
}

impl Shape {
    /// Kind tag as it appears in the JSON `type` field.
    pub fn kind(&self) -> &str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Rect { .. } => "rect",
            Shape::Line { .. } => "line",
            Shape::Polygon { .. } => "polygon",
            Shape::Polyline { .. } => "polyline",
            Shape::Path { .. } => "path",
            Shape::Unknown { kind, .. } => kind,
        }
    }
}

/// Shared optional styling carried by every primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Hex color string or the literal "none".
    pub fill: Option<String>,
    /// Hex color string or the literal "none".
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

/// One primitive with its styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub style: Style,
}

impl Element {
    /// Build an element from a raw JSON value. Total: never fails.
    pub fn from_value(value: &Value) -> Element {
        let Some(map) = value.as_object() else {
            return Element {
                shape: Shape::Unknown {
                    kind: "unknown".to_string(),
                    attrs: Map::new(),
                },
                style: Style::default(),
            };
        };

        let kind = map.get("type").and_then(Value::as_str).unwrap_or("");
        let shape = match kind {
            "circle" => Shape::Circle {
                cx: num(map, "cx"),
                cy: num(map, "cy"),
                r: num(map, "r"),
            },
            "ellipse" => Shape::Ellipse {
                cx: num(map, "cx"),
                cy: num(map, "cy"),
                rx: num(map, "rx"),
                ry: num(map, "ry"),
            },
            "rect" => Shape::Rect {
                x: num(map, "x"),
                y: num(map, "y"),
                width: num(map, "width"),
                height: num(map, "height"),
                rx: opt_num(map, "rx"),
            },
            "line" => Shape::Line {
                x1: num(map, "x1"),
                y1: num(map, "y1"),
                x2: num(map, "x2"),
                y2: num(map, "y2"),
            },
            "polygon" => Shape::Polygon {
                points: text(map, "points"),
            },
            "polyline" => Shape::Polyline {
                points: text(map, "points"),
            },
            "path" => Shape::Path { d: text(map, "d") },
            other => {
                let mut attrs = map.clone();
                attrs.remove("type");
                // Style stays in attrs for unknown kinds; they are opaque
                // to every pass including the style normalizer.
                return Element {
                    shape: Shape::Unknown {
                        kind: if other.is_empty() {
                            "unknown".to_string()
                        } else {
                            other.to_string()
                        },
                        attrs,
                    },
                    style: Style::default(),
                };
            }
        };

        let style = Style {
            fill: opt_text(map, "fill"),
            stroke: opt_text(map, "stroke"),
            stroke_width: opt_num(map, "strokeWidth").or_else(|| opt_num(map, "stroke-width")),
            opacity: opt_num(map, "opacity"),
        };

        Element { shape, style }
    }

    /// Serialize back to the tagged JSON form.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.shape.kind()));
        match &self.shape {
            Shape::Circle { cx, cy, r } => {
                map.insert("cx".to_string(), num_value(*cx));
                map.insert("cy".to_string(), num_value(*cy));
                map.insert("r".to_string(), num_value(*r));
            }
            Shape::Ellipse { cx, cy, rx, ry } => {
                map.insert("cx".to_string(), num_value(*cx));
                map.insert("cy".to_string(), num_value(*cy));
                map.insert("rx".to_string(), num_value(*rx));
                map.insert("ry".to_string(), num_value(*ry));
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                map.insert("x".to_string(), num_value(*x));
                map.insert("y".to_string(), num_value(*y));
                map.insert("width".to_string(), num_value(*width));
                map.insert("height".to_string(), num_value(*height));
                if let Some(rx) = rx {
                    map.insert("rx".to_string(), num_value(*rx));
                }
            }
            Shape::Line { x1, y1, x2, y2 } => {
                map.insert("x1".to_string(), num_value(*x1));
                map.insert("y1".to_string(), num_value(*y1));
                map.insert("x2".to_string(), num_value(*x2));
                map.insert("y2".to_string(), num_value(*y2));
            }
            Shape::Polygon { points } | Shape::Polyline { points } => {
                map.insert("points".to_string(), Value::from(points.as_str()));
            }
            Shape::Path { d } => {
                map.insert("d".to_string(), Value::from(d.as_str()));
            }
            Shape::Unknown { attrs, .. } => {
                for (k, v) in attrs {
                    map.insert(k.clone(), v.clone());
                }
            }
        }
        if let Some(fill) = &self.style.fill {
            map.insert("fill".to_string(), Value::from(fill.as_str()));
        }
        if let Some(stroke) = &self.style.stroke {
            map.insert("stroke".to_string(), Value::from(stroke.as_str()));
        }
        if let Some(w) = self.style.stroke_width {
            map.insert("strokeWidth".to_string(), num_value(w));
        }
        if let Some(o) = self.style.opacity {
            map.insert("opacity".to_string(), num_value(o));
        }
        Value::Object(map)
    }
}

/// The root icon value: display name, canvas size, paint-ordered elements.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDescription {
    /// Required; missing names are flagged as an error, never invented.
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
    /// Back-to-front paint order. Order is meaningful and preserved.
    pub elements: Vec<Element>,
}

impl IconDescription {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::from(name.as_str()));
        }
        map.insert("width".to_string(), num_value(self.width));
        map.insert("height".to_string(), num_value(self.height));
        map.insert(
            "elements".to_string(),
            Value::Array(self.elements.iter().map(Element::to_value).collect()),
        );
        Value::Object(map)
    }
}

impl Serialize for IconDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// ── Field coercion ───────────────────────────────────────────────

fn num(map: &Map<String, Value>, key: &str) -> f64 {
    opt_num(map, key).unwrap_or(0.0)
}

fn opt_num(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Emit whole coordinates as JSON integers, the rest as floats.
fn num_value(v: f64) -> Value {
    if v.is_finite() && (v - v.round()).abs() < 1e-9 && v.abs() < 1e15 {
        Value::from(v.round() as i64)
    } else {
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0))
    }
}
