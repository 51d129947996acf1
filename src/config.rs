//! # Configuration Module
//!
//! World configuration: the seed, the active biome, and the block table.
//!
//! Everything here is fixed at world creation and never reloaded at
//! runtime. There is no persisted state anywhere in the engine: the world
//! regenerates deterministically from the seed and biome on every run, so
//! the configuration *is* the save file.

use crate::error::ConfigError;
use crate::terrain::biome::BiomeProfile;
use crate::voxels::block::BlockRegistry;

/// Everything needed to build a world.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Seed for the noise field; two worlds with equal seed and biome are
    /// identical.
    pub seed: u32,
    /// The active biome, shared by all terrain generation calls.
    pub biome: BiomeProfile,
    /// The static block definition table.
    pub blocks: BlockRegistry,
}

impl WorldConfig {
    /// Builds a configuration from JSON definition strings, validating the
    /// block table against the engine's known block names.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] on malformed JSON or an inconsistent block
    /// table; a world is never built from a partially valid configuration.
    pub fn from_json(seed: u32, biome_json: &str, blocks_json: &str) -> Result<Self, ConfigError> {
        Ok(WorldConfig {
            seed,
            biome: BiomeProfile::from_json(biome_json)?,
            blocks: BlockRegistry::from_json(blocks_json)?,
        })
    }
}

impl Default for WorldConfig {
    /// The compiled-in configuration: grassland biome, default block table,
    /// seed 0.
    fn default() -> Self {
        WorldConfig {
            seed: 0,
            biome: BiomeProfile::default(),
            blocks: BlockRegistry::default_table(),
        }
    }
}
