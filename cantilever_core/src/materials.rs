//! # Materials
//!
//! Elastic material definitions. Euler–Bernoulli deflection only needs
//! Young's modulus, so a [`Material`] is a modulus with an optional name.
//! Common structural materials are available as [`MaterialPreset`]s.
//!
//! ## Example
//!
//! ```rust
//! use cantilever_core::materials::{Material, MaterialPreset};
//!
//! let steel = Material::from_preset(MaterialPreset::StructuralSteel);
//! assert_eq!(steel.modulus_pa, 210e9);
//!
//! let custom = Material::new(70e9);
//! assert!(custom.name.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Gigapascals, Pascals};

/// Named structural materials with typical room-temperature moduli
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialPreset {
    /// Carbon structural steel
    StructuralSteel,
    /// Austenitic stainless steel (304/316)
    StainlessSteel,
    /// Aluminum alloy 6061-T6
    #[serde(rename = "aluminum-6061-t6")]
    Aluminum6061T6,
    /// Titanium alloy Ti-6Al-4V
    #[serde(rename = "titanium-ti-6al-4v")]
    TitaniumTi6Al4V,
    /// Douglas fir, parallel to grain
    DouglasFir,
}

impl MaterialPreset {
    /// All presets for selection lists
    pub const ALL: [MaterialPreset; 5] = [
        MaterialPreset::StructuralSteel,
        MaterialPreset::StainlessSteel,
        MaterialPreset::Aluminum6061T6,
        MaterialPreset::TitaniumTi6Al4V,
        MaterialPreset::DouglasFir,
    ];

    /// Young's modulus as quoted on datasheets
    pub fn modulus(&self) -> Gigapascals {
        match self {
            MaterialPreset::StructuralSteel => Gigapascals(210.0),
            MaterialPreset::StainlessSteel => Gigapascals(193.0),
            MaterialPreset::Aluminum6061T6 => Gigapascals(68.9),
            MaterialPreset::TitaniumTi6Al4V => Gigapascals(113.8),
            MaterialPreset::DouglasFir => Gigapascals(12.4),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialPreset::StructuralSteel => "Structural Steel",
            MaterialPreset::StainlessSteel => "Stainless Steel",
            MaterialPreset::Aluminum6061T6 => "Aluminum 6061-T6",
            MaterialPreset::TitaniumTi6Al4V => "Titanium Ti-6Al-4V",
            MaterialPreset::DouglasFir => "Douglas Fir",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "steel" | "structural-steel" => Ok(MaterialPreset::StructuralSteel),
            "stainless" | "stainless-steel" => Ok(MaterialPreset::StainlessSteel),
            "aluminum" | "aluminium" | "6061" | "aluminum-6061-t6" => {
                Ok(MaterialPreset::Aluminum6061T6)
            }
            "titanium" | "ti-6al-4v" | "titanium-ti-6al-4v" => Ok(MaterialPreset::TitaniumTi6Al4V),
            "douglas-fir" | "fir" | "df" => Ok(MaterialPreset::DouglasFir),
            _ => Err(CalcError::invalid_input("material", s, "Unknown material preset")),
        }
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Linear elastic material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Optional display name (e.g. "Structural Steel")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Young's modulus E (Pa)
    pub modulus_pa: f64,
}

impl Material {
    /// Create an unnamed material from its modulus in pascals
    pub fn new(modulus_pa: f64) -> Self {
        Material {
            name: None,
            modulus_pa,
        }
    }

    /// Create a material from a named preset
    pub fn from_preset(preset: MaterialPreset) -> Self {
        let modulus: Pascals = preset.modulus().into();
        Material {
            name: Some(preset.display_name().to_string()),
            modulus_pa: modulus.0,
        }
    }

    /// Validate the modulus (finite and strictly positive)
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("modulus_pa", self.modulus_pa, "Young's modulus must be positive")
    }

    /// Name for reports, falling back to the modulus
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("E = {:.1} GPa", Gigapascals::from(Pascals(self.modulus_pa)).0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::from_preset(MaterialPreset::StructuralSteel)
    }
}
