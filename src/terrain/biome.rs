//! # Biome Module
//!
//! A biome is a named bundle of terrain-shaping parameters, loaded once and
//! shared by every terrain classification call.

use serde::Deserialize;

use crate::error::ConfigError;

/// Immutable terrain parameters for one biome.
#[derive(Debug, Clone, Deserialize)]
pub struct BiomeProfile {
    /// Human-readable biome name.
    pub name: String,
    /// The height every column reaches regardless of noise; terrain only
    /// varies above this line.
    pub solid_ground_height: i32,
    /// Maximum noise-driven height on top of `solid_ground_height`.
    pub terrain_height: i32,
    /// Horizontal noise scale, in units of chunks.
    pub terrain_scale: f64,
}

impl BiomeProfile {
    /// Loads a biome from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for BiomeProfile {
    /// The compiled-in grassland biome: gentle hills on a 42-block plateau,
    /// peaking well below the chunk ceiling.
    fn default() -> Self {
        BiomeProfile {
            name: "grasslands".to_string(),
            solid_ground_height: 42,
            terrain_height: 42,
            terrain_scale: 0.25,
        }
    }
}
