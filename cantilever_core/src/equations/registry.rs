//! # Equation Registry
//!
//! Every closed-form expression the analysis evaluates, described once: its
//! formula, where it comes from, what its symbols mean, and which function
//! in `equations/` implements it. A [`CantileverResult`] lists the entries it
//! used, and the `gen-equations` binary renders the whole table as markdown.
//!
//! ```rust
//! use cantilever_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::CantileverPointDeflection.metadata();
//! assert_eq!(meta.category, EquationCategory::Deflections);
//! assert!(meta.formula_plain.contains("6EI"));
//! ```
//!
//! [`CantileverResult`]: crate::calculations::CantileverResult

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Where a formula is published.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Gere & Goodno, *Mechanics of Materials*
    GereGoodno {
        edition: u8,
        location: &'static str,
    },
    /// Statics or strength-of-materials identity
    Mechanics,
}

impl CodeReference {
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::GereGoodno { edition, location } => {
                format!("Gere & Goodno {}ed, {}", edition, location)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

/// Heading an equation is filed under in `EQUATIONS.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    SectionProperties,
    Reactions,
    InternalForces,
    Stresses,
    /// Slope and deflection of the elastic curve
    Deflections,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Reactions => "Reactions",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Deflections => "Deflections",
        }
    }

    /// Position in the generated document, geometry first
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::Reactions => 2,
            EquationCategory::InternalForces => 3,
            EquationCategory::Stresses => 4,
            EquationCategory::Deflections => 5,
        }
    }
}

/// One symbol of a formula, with its SI unit.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    /// One sentence on what the formula yields
    pub description: &'static str,
    /// ASCII rendering, e.g. `I = b * h^3 / 12`
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Conditions under which the formula holds
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// File under `src/` holding the implementation
    pub source_module: &'static str,
    pub source_function: &'static str,
}

/// All equations used by the cantilever analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Section Properties
    /// A = bh
    RectangularArea,
    /// I = bh^3/12
    RectangularMomentOfInertia,
    /// c = h/2
    OuterFiberDistance,
    /// S = bh^2/6
    RectangularSectionModulus,

    // Cantilever Point Load
    /// R = P, M_A = -Pa
    CantileverPointReactions,
    /// V(x) = -P for x <= a
    CantileverPointShear,
    /// M(x) = -P(a - x) for x <= a
    CantileverPointMoment,
    /// Two-segment slope of the elastic curve
    CantileverPointSlope,
    /// Two-segment deflection of the elastic curve
    CantileverPointDeflection,
    /// |y(L)| = PL^3/(3EI)
    CantileverTipLoadMaxDeflection,

    // Stresses
    /// σ = Mc/I
    BendingStress,
    /// τ_max = 3V/(2bh)
    ShearStressRectangular,
}

impl Equation {
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::RectangularArea => EquationMetadata {
                name: "Rectangular Area",
                description: "Cross-sectional area of a solid rectangle",
                formula_plain: "A = b * h",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A", "Cross-sectional area", "m²"),
                    Variable::new("b", "Section width", "m"),
                    Variable::new("h", "Section height", "m"),
                ],
                assumptions: vec!["Solid rectangular section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_area",
            },

            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Second Moment of Area",
                description: "Second moment of area about the centroidal axis parallel to b",
                formula_plain: "I = b * h^3 / 12",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "4" },
                variables: vec![
                    Variable::new("I", "Second moment of area", "m⁴"),
                    Variable::new("b", "Section width", "m"),
                    Variable::new("h", "Section height (plane of bending)", "m"),
                ],
                assumptions: vec!["Bending about the strong axis", "Homogeneous section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_moment_of_inertia",
            },

            Equation::OuterFiberDistance => EquationMetadata {
                name: "Outer Fiber Distance",
                description: "Distance from the neutral axis to the extreme fiber",
                formula_plain: "c = h / 2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("c", "Outer fiber distance", "m"),
                    Variable::new("h", "Section height", "m"),
                ],
                assumptions: vec!["Section symmetric about the neutral axis"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "outer_fiber_distance",
            },

            Equation::RectangularSectionModulus => EquationMetadata {
                name: "Rectangular Section Modulus",
                description: "Elastic section modulus relating moment to outer-fiber stress",
                formula_plain: "S = I / c = b * h^2 / 6",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "4" },
                variables: vec![
                    Variable::new("S", "Elastic section modulus", "m³"),
                    Variable::new("b", "Section width", "m"),
                    Variable::new("h", "Section height", "m"),
                ],
                assumptions: vec!["Symmetric section (S_top = S_bottom)"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_section_modulus",
            },

            Equation::CantileverPointReactions => EquationMetadata {
                name: "Cantilever Point Load Reactions",
                description: "Wall reaction and fixed-end moment for a point load at distance a",
                formula_plain: "R = P, M_A = -P * a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load magnitude (positive downward)", "N"),
                    Variable::new("a", "Distance from fixed support to load", "m"),
                    Variable::new("R", "Vertical reaction (positive upward)", "N"),
                    Variable::new("M_A", "Fixed-end moment", "N·m"),
                ],
                assumptions: vec!["Fixed at x = 0, free at x = L", "Static equilibrium"],
                category: EquationCategory::Reactions,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_point_reactions",
            },

            Equation::CantileverPointShear => EquationMetadata {
                name: "Cantilever Point Load Shear",
                description: "Shear at x: constant between support and load, zero beyond",
                formula_plain: "V(x) = -P for x <= a, V(x) = 0 for x > a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("V", "Shear force", "N"),
                    Variable::new("x", "Position from fixed support", "m"),
                ],
                assumptions: vec!["x = a belongs to the support-side segment"],
                category: EquationCategory::InternalForces,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_point_shear",
            },

            Equation::CantileverPointMoment => EquationMetadata {
                name: "Cantilever Point Load Moment",
                description: "Bending moment at position x; tip load is the case a = L",
                formula_plain: "M(x) = -P(a - x) for x <= a, M(x) = 0 for x > a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("M", "Bending moment", "N·m"),
                    Variable::new("x", "Position from fixed support", "m"),
                ],
                assumptions: vec!["Hogging moment negative", "M(L) = 0 at the free end"],
                category: EquationCategory::InternalForces,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_point_moment",
            },

            Equation::CantileverPointSlope => EquationMetadata {
                name: "Cantilever Point Load Slope",
                description: "Rotation of the elastic curve at position x",
                formula_plain: "theta(x) = -Px(2a - x) / (2EI) for x <= a, -Pa^2 / (2EI) for x > a",
                reference: CodeReference::GereGoodno {
                    edition: 9,
                    location: "Appendix G, Table G-1, Case 5",
                },
                variables: vec![
                    Variable::new("theta", "Slope (negative downward)", "rad"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: vec!["Linear elastic material", "Small rotations"],
                category: EquationCategory::Deflections,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_point_slope",
            },

            Equation::CantileverPointDeflection => EquationMetadata {
                name: "Cantilever Point Load Deflection",
                description: "Euler–Bernoulli deflection at position x for a load at distance a",
                formula_plain: "y(x) = -Px^2(3a - x) / (6EI) for x <= a, y(x) = -Pa^2(3x - a) / (6EI) for x > a",
                reference: CodeReference::GereGoodno {
                    edition: 9,
                    location: "Appendix G, Table G-1, Case 5",
                },
                variables: vec![
                    Variable::new("y", "Deflection (negative downward)", "m"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                    Variable::new("a", "Distance from fixed support to load", "m"),
                ],
                assumptions: vec![
                    "Linear elastic material",
                    "Small deflections",
                    "Plane sections remain plane (no shear deformation)",
                ],
                category: EquationCategory::Deflections,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_point_deflection",
            },

            Equation::CantileverTipLoadMaxDeflection => EquationMetadata {
                name: "Cantilever Tip Load Maximum Deflection",
                description: "Free-end deflection magnitude for a load at the tip",
                formula_plain: "|y(L)| = PL^3 / (3EI)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("L", "Span length", "m"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: vec!["Load at the free end (a = L)"],
                category: EquationCategory::Deflections,
                source_module: "equations/cantilever.rs",
                source_function: "cantilever_tip_load_max_deflection",
            },

            Equation::BendingStress => EquationMetadata {
                name: "Outer Fiber Bending Stress",
                description: "Flexure formula evaluated at the extreme fiber",
                formula_plain: "sigma = M * c / I",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma", "Bending stress", "Pa"),
                    Variable::new("M", "Bending moment", "N·m"),
                    Variable::new("c", "Outer fiber distance", "m"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: vec![
                    "Linear elastic material",
                    "Stress proportional to distance from neutral axis",
                ],
                category: EquationCategory::Stresses,
                source_module: "equations/cantilever.rs",
                source_function: "outer_fiber_stress",
            },

            Equation::ShearStressRectangular => EquationMetadata {
                name: "Rectangular Maximum Shear Stress",
                description: "Transverse shear stress at the neutral axis of a rectangle",
                formula_plain: "tau_max = 3V / (2bh)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("tau_max", "Maximum shear stress", "Pa"),
                    Variable::new("V", "Shear force", "N"),
                    Variable::new("b", "Section width", "m"),
                    Variable::new("h", "Section height", "m"),
                ],
                assumptions: vec!["Parabolic shear stress distribution"],
                category: EquationCategory::Stresses,
                source_module: "equations/cantilever.rs",
                source_function: "rectangular_max_shear_stress",
            },
        }
    }

    /// All equations in a category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Categories that have at least one equation, sorted for documentation
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> =
            ALL_EQUATIONS.iter().map(|eq| eq.metadata().category).collect();
        categories.sort_by_key(|c| c.sort_order());
        categories.dedup();
        categories
    }
}

/// Every registered equation
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::OuterFiberDistance,
    Equation::RectangularSectionModulus,
    Equation::CantileverPointReactions,
    Equation::CantileverPointShear,
    Equation::CantileverPointMoment,
    Equation::CantileverPointSlope,
    Equation::CantileverPointDeflection,
    Equation::CantileverTipLoadMaxDeflection,
    Equation::BendingStress,
    Equation::ShearStressRectangular,
];

/// Equations applied by one cantilever analysis.
///
/// The tip-load check only applies when the load sits at the free end.
pub fn cantilever_analysis_equations(tip_load: bool) -> Vec<Equation> {
    let mut equations = vec![
        Equation::RectangularArea,
        Equation::RectangularMomentOfInertia,
        Equation::OuterFiberDistance,
        Equation::RectangularSectionModulus,
        Equation::CantileverPointReactions,
        Equation::CantileverPointShear,
        Equation::CantileverPointMoment,
        Equation::BendingStress,
        Equation::ShearStressRectangular,
        Equation::CantileverPointSlope,
        Equation::CantileverPointDeflection,
    ];
    if tip_load {
        equations.push(Equation::CantileverTipLoadMaxDeflection);
    }
    equations
}

const MARKDOWN_PREAMBLE: &str = "\
# Cantilever Equations Reference

> Generated by `cargo run --bin gen-equations` from the equation registry.
> Edit the registry, not this file.

Every formula used by the cantilever point-load analysis. Quantities are SI
(m, N, Pa, N·m).

| Quantity | Sign |
|----------|------|
| Load | + downward |
| Shear | -P between the fixed support and the load |
| Moment | hogging -, M(0) = -Pa |
| Deflection, slope | - downward |
| Reactions | + upward |
";

fn write_equation(out: &mut String, equation: Equation) -> std::fmt::Result {
    let meta = equation.metadata();

    writeln!(out, "### {}\n", meta.name)?;
    writeln!(out, "{}\n", meta.description)?;
    writeln!(out, "```text\n{}\n```\n", meta.formula_plain)?;

    for var in &meta.variables {
        writeln!(out, "- `{}` {} [{}]", var.symbol, var.description, var.units)?;
    }
    if !meta.variables.is_empty() {
        out.push('\n');
    }

    if !meta.assumptions.is_empty() {
        writeln!(out, "Assumes: {}.\n", meta.assumptions.join("; "))?;
    }

    writeln!(
        out,
        "*{}* | `{}::{}`\n",
        meta.reference.citation(),
        meta.source_module,
        meta.source_function
    )
}

/// Render the full EQUATIONS.md document from the registry.
///
/// # Example
///
/// ```rust
/// use cantilever_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Cantilever Equations Reference"));
/// assert!(markdown.contains("Section Properties"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut out = String::with_capacity(12_000);
    out.push_str(MARKDOWN_PREAMBLE);

    let categories = Equation::all_categories();
    for category in &categories {
        // Writing into a String cannot fail
        let _ = writeln!(out, "\n## {}\n", category.display_name());
        for equation in Equation::in_category(*category) {
            let _ = write_equation(&mut out, equation);
        }
    }

    let _ = writeln!(
        out,
        "---\n\n**Total Equations:** {} in {} categories",
        ALL_EQUATIONS.len(),
        categories.len()
    );
    out
}
