use thiserror::Error;

/// Errors surfaced by the fallible entry points.
///
/// The validator itself never fails: malformed icon *values* come back as
/// diagnostics in the [`crate::ValidationResult`]. Only unreadable input
/// (bad JSON text, file I/O in the CLI) is an `IconError`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IconError {
    #[error("failed to parse icon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read icon file: {0}")]
    Io(#[from] std::io::Error),
}
