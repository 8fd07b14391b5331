//! # Cantilever CLI
//!
//! Runs one cantilever point-load analysis, prints a report, and writes the
//! result JSON and SVG diagrams.
//!
//! ```text
//! cantilever_cli [INPUT.json] [--out DIR]
//! ```
//!
//! Without an input file the parameters are prompted for, with defaults
//! that reproduce the reference run. Set `RUST_LOG=debug` to trace each
//! evaluation stage.

mod diagrams;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use cantilever_core::calculations::{analyze, CantileverInput, CantileverResult};
use cantilever_core::errors::{CalcError, CalcResult};
use cantilever_core::file_io::load_input;
use cantilever_core::materials::Material;
use cantilever_core::model::{BeamSpec, LoadCase, Section, DEFAULT_SAMPLE_POINTS};
use cantilever_core::units::{Megapascals, Meters, Millimeters, Mm4, Pascals, M4};

const USAGE: &str = "Usage: cantilever_cli [INPUT.json] [--out DIR]";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    out_dir: PathBuf,
}

/// `Ok(None)` means help was requested.
fn parse_args<I>(args: I) -> Result<Option<Args>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut out_dir = PathBuf::from(".");
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--out" | "-o" => {
                let dir = args.next().ok_or("--out requires a directory")?;
                out_dir = PathBuf::from(dir);
            }
            s if s.starts_with("--out=") => out_dir = PathBuf::from(&s["--out=".len()..]),
            s if s.starts_with('-') => return Err(format!("Unknown option: {}", s)),
            _ if input.is_none() => input = Some(PathBuf::from(&arg)),
            _ => return Err(format!("Unexpected argument: {}", arg)),
        }
    }

    Ok(Some(Args { input, out_dir }))
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return default;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("could not parse {:?}, using {}", trimmed, default);
            default
        }
    }
}

fn prompt_input() -> CantileverInput {
    let defaults = CantileverInput::default();

    let length_m = prompt_f64("Beam length L (m)", defaults.beam.length_m);
    let magnitude_n = prompt_f64("Point load F (N, downward)", defaults.load.magnitude_n);
    let position_m = prompt_f64("Load position a from support (m)", defaults.load.position_m);
    let modulus_pa = prompt_f64("Young's modulus E (Pa)", defaults.material.modulus_pa);
    let width_m = prompt_f64("Section width b (m)", defaults.section.width_m);
    let height_m = prompt_f64("Section height h (m)", defaults.section.height_m);

    let material = if modulus_pa == defaults.material.modulus_pa {
        defaults.material
    } else {
        Material::new(modulus_pa)
    };

    CantileverInput {
        label: "CLI".to_string(),
        beam: BeamSpec::new(length_m),
        section: Section::rectangular(width_m, height_m),
        material,
        load: LoadCase::new(magnitude_n, position_m),
        sample_points: DEFAULT_SAMPLE_POINTS,
    }
}

fn print_report(input: &CantileverInput, result: &CantileverResult) {
    let s = &result.summary;
    let i_mm4: Mm4 = M4(result.section.moment_of_inertia_m4).into();
    let sigma_mpa: Megapascals = Pascals(s.fixed_end_stress_pa).into();
    let tau_mpa: Megapascals = Pascals(s.max_shear_stress_pa).into();
    let tip_mm: Millimeters = Meters(s.tip_deflection_m).into();
    let load_pt_mm: Millimeters = Meters(s.load_point_deflection_m).into();

    println!("═══════════════════════════════════════");
    println!("  CANTILEVER POINT-LOAD ANALYSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:     L = {:.3} m", input.beam.length_m);
    println!(
        "  Load:     F = {:.1} N at a = {:.3} m{}",
        input.load.magnitude_n,
        input.load.position_m,
        if input.is_tip_load() { " (tip)" } else { "" }
    );
    println!(
        "  Section:  {:.1} x {:.1} mm",
        Millimeters::from(Meters(input.section.width_m)).value(),
        Millimeters::from(Meters(input.section.height_m)).value()
    );
    println!("  Material: {}", input.material.label());
    println!();
    println!("Section:");
    println!(
        "  I = {:.4e} m⁴ ({:.0} mm⁴)",
        result.section.moment_of_inertia_m4,
        i_mm4.value()
    );
    println!("  c = {:.4} m", result.section.outer_fiber_m);
    println!();
    println!("Response:");
    println!("  Reaction   R    = {:.1} N", s.reaction_n);
    println!("  Moment     M(0) = {:.1} N·m", s.fixed_end_moment_nm);
    println!("  Stress     σ(0) = {:.2} MPa", sigma_mpa.value());
    println!("  Shear      τmax = {:.3} MPa", tau_mpa.value());
    println!("  Deflection y(a) = {:.3} mm", load_pt_mm.value());
    println!("  Deflection y(L) = {:.3} mm", tip_mm.value());
    println!("  Slope      θ(L) = {:.4e} rad", s.tip_slope_rad);
    if let Some(closed_form) = s.tip_load_deflection_m {
        let mm: Millimeters = Meters(closed_form).into();
        println!("  FL³/3EI          = {:.3} mm", mm.value());
    }
    println!("═══════════════════════════════════════");
}

fn write_file(path: &Path, contents: &str) -> CalcResult<()> {
    fs::write(path, contents)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))
}

fn write_outputs(
    out_dir: &Path,
    input: &CantileverInput,
    result: &CantileverResult,
) -> CalcResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| {
        CalcError::file_error("create directory", out_dir.display().to_string(), e.to_string())
    })?;

    let mut written = Vec::new();
    for (name, svg) in diagrams::render_all(input, result) {
        let path = out_dir.join(name);
        write_file(&path, &svg)?;
        written.push(path);
    }

    let json = serde_json::to_string_pretty(result)
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    let path = out_dir.join("results.json");
    write_file(&path, &json)?;
    written.push(path);

    Ok(written)
}

fn run(args: &Args) -> CalcResult<()> {
    let input = match &args.input {
        Some(path) => {
            log::info!("reading input from {}", path.display());
            load_input(path)?
        }
        None => {
            println!("Cantilever Beam - Point Load Analysis");
            println!("=====================================");
            println!("Press Enter to accept the default.");
            println!();
            let input = prompt_input();
            println!();
            input
        }
    };

    let result = analyze(&input)?;

    print_report(&input, &result);

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&result.summary) {
        println!("{}", json);
    }

    let written = write_outputs(&args.out_dir, &input, &result)?;
    println!();
    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
