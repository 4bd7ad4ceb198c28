//! Static material table.
//!
//! Materials are fixed at process start and never mutated. The
//! coefficients drive only the collision split decision; they are not
//! constrained to sum to 1 and are never chained into a multi-bounce
//! attenuation model.

use serde::Serialize;

use crate::errors::ConfigError;

/// Surface material bound to an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Table key, uppercase.
    pub name: &'static str,
    /// Fraction of incident energy absorbed (implicit: never spawns anything).
    pub absorption: f64,
    /// Fraction reflected; above the split epsilon this spawns a reflected wave.
    pub reflection: f64,
    /// Fraction transmitted; above the split epsilon this spawns a transmitted wave.
    pub transmission: f64,
    /// Display color (RGB), owned by the rendering layer.
    pub color: [u8; 3],
}

/// All materials available to the input layer.
pub static MATERIALS: &[Material] = &[
    Material {
        name: "RAM",
        absorption: 0.95,
        reflection: 0.05,
        transmission: 0.0,
        color: [20, 20, 20],
    },
    Material {
        name: "BRICK",
        absorption: 0.7,
        reflection: 0.3,
        transmission: 0.0,
        color: [139, 69, 19],
    },
    Material {
        name: "PAPER",
        absorption: 0.1,
        reflection: 0.1,
        transmission: 0.8,
        color: [255, 248, 220],
    },
    Material {
        name: "GLASS",
        absorption: 0.05,
        reflection: 0.15,
        transmission: 0.8,
        color: [173, 216, 230],
    },
    Material {
        name: "MIRROR",
        absorption: 0.02,
        reflection: 0.98,
        transmission: 0.0,
        color: [192, 192, 192],
    },
    Material {
        name: "WATER",
        absorption: 0.3,
        reflection: 0.1,
        transmission: 0.6,
        color: [64, 164, 223],
    },
    Material {
        name: "METAL",
        absorption: 0.1,
        reflection: 0.9,
        transmission: 0.0,
        color: [169, 169, 169],
    },
];

/// Look up a material by key.
pub fn lookup(key: &str) -> Result<&'static Material, ConfigError> {
    MATERIALS
        .iter()
        .find(|m| m.name == key)
        .ok_or_else(|| ConfigError::UnknownMaterial(key.to_string()))
}
