//! # Terrain Module
//!
//! This module provides the pure terrain classification function: a mapping
//! from an absolute world coordinate to a block-type id, combining the
//! seeded noise field with the active biome and the fixed layering rules.
//!
//! Classification is deliberately independent of any chunk's grid. That is
//! what lets the mesher resolve face culling across chunk boundaries: when
//! an adjacency check leaves the current chunk, the answer is re-derived
//! from world coordinates instead of read from a neighbor that may not be
//! populated yet.

use cgmath::Point3;

use crate::voxels::block::{block_type::BlockType, BlockTypeSize};
use crate::voxels::chunk::CHUNK_HEIGHT;
use crate::voxels::world::WORLD_SIZE_IN_VOXELS;

pub mod biome;
pub mod noise;

use self::biome::BiomeProfile;
use self::noise::NoiseField;

/// Anything that can answer "what block occupies this world coordinate".
///
/// The mesher takes one of these for cross-chunk adjacency lookups. The
/// canonical implementation is [`TerrainGenerator`] itself, which re-derives
/// the answer deterministically; tests substitute fixed-answer samplers.
pub trait BlockSampler {
    /// Returns the block-type id at an absolute world coordinate.
    ///
    /// Out-of-world coordinates answer air; this is a sentinel, not an
    /// error, and is what makes world edges render as open sky.
    fn block_at(&self, pos: Point3<i32>) -> BlockTypeSize;
}

/// The pure, deterministic world-coordinate -> block-id function.
///
/// Given the same seed and biome, two generators classify every coordinate
/// identically; the entire world is reproducible from those two inputs.
pub struct TerrainGenerator {
    noise: NoiseField,
    biome: BiomeProfile,
}

impl TerrainGenerator {
    /// Creates a generator for the given world seed and biome.
    pub fn new(seed: u32, biome: BiomeProfile) -> Self {
        TerrainGenerator {
            noise: NoiseField::new(seed),
            biome,
        }
    }

    /// Classifies the block at an absolute world coordinate.
    ///
    /// The rules run in order; the first match wins:
    ///
    /// 1. Outside the world bounds: air.
    /// 2. `y == 0`: bedrock, unconditionally.
    /// 3. At the noise-derived terrain height: grass.
    /// 4. Within four blocks below the surface: dirt.
    /// 5. Anywhere deeper: stone.
    /// 6. Above the surface: air.
    pub fn classify(&self, pos: Point3<i32>) -> BlockTypeSize {
        // Immutable pass.
        if !Self::is_voxel_in_world(pos) {
            return BlockType::AIR.id();
        }
        if pos.y == 0 {
            return BlockType::BEDROCK.id();
        }

        // Basic terrain pass.
        let height_fraction = self
            .noise
            .sample_2d(pos.x, pos.z, 0.0, self.biome.terrain_scale);
        let terrain_height = (self.biome.terrain_height as f64 * height_fraction).floor() as i32
            + self.biome.solid_ground_height;

        if pos.y == terrain_height {
            return BlockType::GRASS.id();
        }
        if pos.y < terrain_height && pos.y > terrain_height - 4 {
            return BlockType::DIRT.id();
        }
        if pos.y < terrain_height {
            return BlockType::STONE.id();
        }

        BlockType::AIR.id()
    }

    /// The biome this generator was built with.
    pub fn biome(&self) -> &BiomeProfile {
        &self.biome
    }

    /// Whether a world coordinate lies inside the generated world volume.
    ///
    /// Coordinates outside are classified as air rather than rejected.
    pub fn is_voxel_in_world(pos: Point3<i32>) -> bool {
        pos.x >= 0
            && pos.x < WORLD_SIZE_IN_VOXELS
            && pos.y >= 0
            && pos.y < CHUNK_HEIGHT as i32
            && pos.z >= 0
            && pos.z < WORLD_SIZE_IN_VOXELS
    }
}

impl BlockSampler for TerrainGenerator {
    fn block_at(&self, pos: Point3<i32>) -> BlockTypeSize {
        self.classify(pos)
    }
}
