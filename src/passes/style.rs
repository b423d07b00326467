//! Palette normalization and style consistency checks.
//!
//! Collapses explicit colors to the canonical palette, warns on mixed
//! stroke/fill usage and invisible elements (advisory only, never fixed),
//! and hosts the path data sub-checks: structurally they belong with the
//! per-element style sweep even though they are logically independent.

use crate::config::ValidatorConfig;
use crate::icon::{IconDescription, Shape};
use crate::report::Diagnostics;

/// Recognized path command letters (absolute and relative).
const PATH_COMMANDS: &str = "MmLlHhVvCcSsQqTtAaZz";

pub fn normalize_style(
    icon: &mut IconDescription,
    config: &ValidatorConfig,
    diag: &mut Diagnostics,
) {
    let palette = config.effective_palette();
    let primary = palette
        .first()
        .cloned()
        .unwrap_or_else(|| "#000000".to_string());
    let canonical = |color: &str| palette.iter().any(|p| p.eq_ignore_ascii_case(color));

    let mut recolored = 0usize;
    for el in &mut icon.elements {
        if let Some(fill) = &mut el.style.fill {
            if fill != "none" && !canonical(fill) {
                *fill = primary.clone();
                recolored += 1;
            }
        }
        if let Some(stroke) = &mut el.style.stroke {
            if stroke != "none" && !canonical(stroke) {
                *stroke = primary.clone();
                recolored += 1;
            }
        }
    }
    if recolored > 0 {
        diag.warning(format!(
            "Normalized {recolored} colors to the canonical palette"
        ));
    }

    // Consistency check only: mixing is a style smell, not a defect.
    let has_fill = icon
        .elements
        .iter()
        .any(|el| el.style.fill.as_deref().is_some_and(|f| f != "none"));
    let has_stroke = icon
        .elements
        .iter()
        .any(|el| el.style.stroke.as_deref().is_some_and(|s| s != "none"));
    if has_fill && has_stroke {
        diag.warning("Icon mixes filled and stroked elements; commit to one approach");
    }

    for (i, el) in icon.elements.iter().enumerate() {
        if el.style.fill.as_deref() == Some("none") && el.style.stroke.as_deref() == Some("none") {
            diag.warning(format!(
                "Element {i} is invisible (fill and stroke are both none)"
            ));
        }
    }

    for (i, el) in icon.elements.iter().enumerate() {
        let Shape::Path { d } = &el.shape else {
            continue;
        };
        if d.trim().is_empty() {
            diag.error(format!("Path element {i} is missing path data"));
            continue;
        }
        // A failed numeric computation upstream serializes straight into d.
        if d.contains("NaN") || d.contains("undefined") {
            diag.error(format!("Path element {i} contains invalid path data"));
        }
        let commands = d.chars().filter(|c| PATH_COMMANDS.contains(*c)).count();
        if commands > config.max_path_commands {
            diag.warning(format!(
                "Path element {i} has {commands} commands; consider simplifying"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Element, Style};

    fn icon_of(elements: Vec<Element>) -> IconDescription {
        IconDescription {
            name: Some("t".to_string()),
            width: 400.0,
            height: 400.0,
            elements,
        }
    }

    fn circle(style: Style) -> Element {
        Element {
            shape: Shape::Circle {
                cx: 200.0,
                cy: 200.0,
                r: 60.0,
            },
            style,
        }
    }

    fn path(d: &str) -> Element {
        Element {
            shape: Shape::Path { d: d.to_string() },
            style: Style::default(),
        }
    }

    #[test]
    fn non_canonical_colors_collapse_to_primary() {
        let mut icon = icon_of(vec![circle(Style {
            fill: Some("#123456".to_string()),
            ..Style::default()
        })]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &ValidatorConfig::default(), &mut diag);

        assert_eq!(icon.elements[0].style.fill.as_deref(), Some("#000000"));
        assert!(diag.warnings.iter().any(|w| w.contains("Normalized 1")));
    }

    #[test]
    fn accent_palette_entries_survive() {
        let config = ValidatorConfig {
            palette: vec![
                "#000000".to_string(),
                "#ffffff".to_string(),
                "#ff4136".to_string(),
            ],
            ..ValidatorConfig::default()
        };
        let mut icon = icon_of(vec![circle(Style {
            fill: Some("#FF4136".to_string()),
            ..Style::default()
        })]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &config, &mut diag);
        assert_eq!(icon.elements[0].style.fill.as_deref(), Some("#FF4136"));
        assert!(diag.is_clean());
    }

    #[test]
    fn monochrome_overrides_a_widened_palette() {
        let config = ValidatorConfig {
            palette: vec!["#000000".to_string(), "#ff4136".to_string()],
            enforce_monochrome: true,
            ..ValidatorConfig::default()
        };
        let mut icon = icon_of(vec![circle(Style {
            fill: Some("#ff4136".to_string()),
            ..Style::default()
        })]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &config, &mut diag);
        assert_eq!(icon.elements[0].style.fill.as_deref(), Some("#000000"));
    }

    #[test]
    fn mixed_fill_and_stroke_warns_without_fixing() {
        let mut icon = icon_of(vec![
            circle(Style {
                fill: Some("#000000".to_string()),
                ..Style::default()
            }),
            circle(Style {
                stroke: Some("#000000".to_string()),
                stroke_width: Some(4.0),
                ..Style::default()
            }),
        ]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert!(diag.warnings.iter().any(|w| w.contains("mixes")));
        assert!(icon.elements[1].style.stroke.is_some(), "never auto-fixed");
    }

    #[test]
    fn invisible_element_is_flagged() {
        let mut icon = icon_of(vec![circle(Style {
            fill: Some("none".to_string()),
            stroke: Some("none".to_string()),
            ..Style::default()
        })]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert!(diag.warnings.iter().any(|w| w.contains("invisible")));
        assert!(diag.errors.is_empty());
    }

    #[test]
    fn broken_path_data_is_an_error() {
        let mut icon = icon_of(vec![path(""), path("M NaN 20 L 30 undefined")]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert_eq!(diag.errors.len(), 2);
    }

    #[test]
    fn long_paths_warn_on_command_count() {
        let d = "M0 0 ".to_string() + &"L10 10 ".repeat(21);
        let mut icon = icon_of(vec![path(&d)]);
        let mut diag = Diagnostics::new();
        normalize_style(&mut icon, &ValidatorConfig::default(), &mut diag);
        assert!(diag.warnings.iter().any(|w| w.contains("commands")));
        assert!(diag.errors.is_empty());
    }
}
