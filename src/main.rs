use clap::Parser;
use iconfix::ValidatorConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "iconfix",
    about = "Validate and auto-correct generated vector icon descriptions"
)]
struct Cli {
    /// Input icon description (JSON)
    input: PathBuf,

    /// Print the corrected icon JSON to stdout
    #[arg(long)]
    emit: bool,

    /// Force all colors to black/white
    #[arg(long)]
    monochrome: bool,

    /// Record out-of-canvas geometry as an error even after correction
    #[arg(long)]
    strict: bool,

    /// Grid size for coordinate snapping (0 = off)
    #[arg(long, default_value = "10")]
    grid: f64,

    /// Safe-zone padding inside the canvas
    #[arg(long, default_value = "20")]
    padding: f64,

    /// Extra allowed colors (hex) on top of black/white
    #[arg(long)]
    accent: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut palette = vec!["#000000".to_string(), "#ffffff".to_string()];
    palette.extend(cli.accent.iter().cloned());
    let config = ValidatorConfig {
        grid: cli.grid,
        padding: cli.padding,
        palette,
        enforce_monochrome: cli.monochrome,
        strict_bounds: cli.strict,
        ..ValidatorConfig::default()
    };

    // Header
    eprintln!();
    eprintln!("  iconfix \u{00b7} {}", cli.input.display());
    eprintln!();

    let json = match std::fs::read_to_string(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("  \u{2717} {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = match iconfix::validate_str(&json, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("  \u{2717} {e}");
            return ExitCode::FAILURE;
        }
    };

    let name = result.fixed.name.as_deref().unwrap_or("(unnamed)");
    eprintln!(
        "  Icon        {} \u{00b7} {} elements",
        name,
        result.fixed.elements.len()
    );
    for error in &result.errors {
        eprintln!("  Error       {error}");
    }
    for warning in &result.warnings {
        eprintln!("  Warning     {warning}");
    }
    eprintln!("  Score       {} / 100", result.score());
    eprintln!();

    if cli.emit {
        match serde_json::to_string_pretty(&result.fixed) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("  \u{2717} {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if result.is_valid {
        eprintln!("  \u{2713} valid");
        ExitCode::SUCCESS
    } else {
        eprintln!("  \u{2717} rejected");
        ExitCode::FAILURE
    }
}
