//! Write EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! Defaults to `cantilever_core/src/equations/EQUATIONS.md`, relative to the
//! workspace root.

use std::fs;
use std::path::PathBuf;

use cantilever_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "cantilever_core/src/equations/EQUATIONS.md";

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();

    if let Err(e) = fs::write(&output_path, &markdown) {
        eprintln!("Error writing {}: {}", output_path.display(), e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} equations ({} bytes) to {}",
        ALL_EQUATIONS.len(),
        markdown.len(),
        output_path.display()
    );
}
