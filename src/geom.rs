//! Shared numeric-token utilities for point-list and path-data strings.
//!
//! Polygon points and path `d` attributes arrive as free-form strings.
//! Everything here works on the numeric tokens inside those strings: the
//! same scan drives bounds extraction, the fit transform, and grid snapping.

use std::sync::LazyLock;

use kurbo::Point;
use regex::Regex;

/// Matches one signed decimal number, with optional exponent.
static NUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("numeric token regex")
});

/// Extract all numeric tokens from a string, in order.
pub fn numeric_tokens(s: &str) -> Vec<f64> {
    NUM_RE
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Parse a point-list string ("x,y x,y ...", separators free-form) into
/// coordinate pairs. An odd trailing token is dropped.
pub fn point_pairs(s: &str) -> Vec<Point> {
    numeric_tokens(s)
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect()
}

/// Rewrite every numeric token in place via `f(token_index, value)`.
///
/// Token indices alternate x/y (even = x, odd = y), matching the pairing
/// used by bounds extraction. Non-numeric text (command letters, separators)
/// is preserved verbatim.
pub fn map_tokens(s: &str, mut f: impl FnMut(usize, f64) -> f64) -> String {
    let mut idx = 0usize;
    NUM_RE
        .replace_all(s, |caps: &regex::Captures| {
            let v: f64 = caps[0].parse().unwrap_or(0.0);
            let out = f(idx, v);
            idx += 1;
            fmt_coord(out)
        })
        .into_owned()
}

/// Serialize a list of points back to "x,y x,y" form.
pub fn join_pairs(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_coord(p.x), fmt_coord(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a coordinate: whole values print as integers, the rest rounded
/// to 2 decimals with trailing zeros trimmed.
pub fn fmt_coord(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if (r - r.round()).abs() < 1e-9 {
        format!("{}", r.round() as i64)
    } else {
        let s = format!("{r:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
