/// All validation parameters in one struct.
/// Designed to be adjustable per call site (generation pipeline, manual
/// upload checks, editors) while keeping the canonical defaults in one place.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    // -- Canvas --
    /// Canonical canvas dimension in logical units. Icons with any other
    /// width/height are coerced to this value.
    pub canvas_size: f64,
    /// Safe-zone border margin. Content should stay inside
    /// `[padding, canvas_size - padding]` on both axes for breathing room.
    pub padding: f64,

    // -- Correction --
    /// Grid unit for coordinate snapping. Every coordinate-bearing field
    /// is rounded to a multiple of this (path data strings excepted).
    pub grid: f64,
    /// Maximum tolerated deviation of the content midpoint from canvas
    /// center before the recentering translate kicks in.
    pub center_threshold: f64,

    // -- Complexity --
    /// Element count above which a simplification warning is emitted.
    /// Never auto-fixed: dropping elements is not safe to automate.
    pub max_elements: usize,
    /// Path command count above which a complexity warning is emitted.
    pub max_path_commands: usize,

    // -- Palette --
    /// Canonical colors. Any explicit fill/stroke outside this set is
    /// collapsed to the first entry. Widen with an accent color to relax
    /// the default two-color collapse.
    pub palette: Vec<String>,
    /// Force the effective palette to black/white regardless of `palette`.
    /// Caller-intent switch for strictly monochrome icon sets.
    pub enforce_monochrome: bool,

    // -- Severity --
    /// When true, out-of-canvas geometry is recorded as an error even
    /// though the fit pass still corrects it. The default reports it as a
    /// warning, since the returned geometry is already repaired.
    pub strict_bounds: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            padding: 20.0,
            grid: 10.0,
            center_threshold: 20.0,
            max_elements: 15,
            max_path_commands: 20,
            palette: vec!["#000000".to_string(), "#ffffff".to_string()],
            enforce_monochrome: false,
            strict_bounds: false,
        }
    }
}

impl ValidatorConfig {
    /// Usable content extent inside the safe zone, per axis.
    pub fn available(&self) -> f64 {
        self.canvas_size - 2.0 * self.padding
    }

    /// The palette actually enforced, honoring `enforce_monochrome`.
    pub fn effective_palette(&self) -> Vec<String> {
        if self.enforce_monochrome {
            vec!["#000000".to_string(), "#ffffff".to_string()]
        } else {
            self.palette.clone()
        }
    }
}
