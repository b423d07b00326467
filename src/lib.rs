//! iconfix: generated vector-icon descriptions → bounded, centered,
//! grid-aligned, stylistically consistent icons.
//!
//! Takes an arbitrary, possibly malformed icon description (a flat list of
//! typed 2D primitives, parsed from an LLM's JSON output) and
//! deterministically repairs it: structural normalization, shrink-to-fit
//! against the canvas, recentering, archetype canonicalization, grid
//! snapping and palette normalization, with a quality score derived from
//! the accumulated diagnostics.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let raw = json!({
//!     "name": "dot",
//!     "width": 400,
//!     "height": 400,
//!     "elements": [{"type": "circle", "cx": 200, "cy": 200, "r": 60, "fill": "#000000"}],
//! });
//! let result = iconfix::validate(&raw);
//! assert!(result.is_valid);
//! assert_eq!(result.score(), 100);
//! ```

#![forbid(unsafe_code)]

mod config;
mod geom;
mod icon;
mod passes;
mod report;

pub mod bounds;
pub mod error;

// Re-export kurbo so downstream users get the same version used by the
// bounds API (kurbo::Rect).
pub use kurbo;

pub use config::ValidatorConfig;
pub use error::IconError;
pub use icon::{Element, IconDescription, Shape, Style};
pub use report::{Diagnostics, RETRY_THRESHOLD, score};

use serde::Serialize;
use serde_json::Value;

/// The validator's output: diagnostics plus the corrected icon.
///
/// The input is never mutated; `fixed` is a corrected deep copy and is
/// returned even when `is_valid` is false — best-effort geometry, useful
/// for debugging, never delivered as the final asset.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// True when no errors were recorded. Warnings alone never invalidate.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub fixed: IconDescription,
}

impl ValidationResult {
    /// Quality score in `[0, 100]`, derived from the diagnostics alone.
    pub fn score(&self) -> u8 {
        report::score_counts(self.errors.len(), self.warnings.len())
    }
}

/// Validate and correct one icon description with the default config.
pub fn validate(input: &Value) -> ValidationResult {
    validate_with(input, &ValidatorConfig::default())
}

/// Validate and correct one icon description.
///
/// Total: any JSON value produces a result, even maximally malformed
/// input. The passes run in fixed order against one working copy, each
/// appending to the shared diagnostics; the score reads nothing else.
pub fn validate_with(input: &Value, config: &ValidatorConfig) -> ValidationResult {
    let mut diag = Diagnostics::new();

    let mut fixed = passes::structure::normalize(input, config, &mut diag);
    passes::fit::fit_to_canvas(&mut fixed, config, &mut diag);
    passes::center::recenter(&mut fixed, config, &mut diag);
    passes::canon::canonicalize(&mut fixed, config, &mut diag);
    passes::snap::quantize(&mut fixed, config, &mut diag);
    passes::style::normalize_style(&mut fixed, config, &mut diag);

    ValidationResult {
        is_valid: diag.errors.is_empty(),
        errors: diag.errors,
        warnings: diag.warnings,
        fixed,
    }
}

/// Parse and validate an icon description from JSON text.
///
/// The only fallible entry point; fails on unparseable JSON text alone.
pub fn validate_str(json: &str, config: &ValidatorConfig) -> Result<ValidationResult, IconError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(validate_with(&value, config))
}
