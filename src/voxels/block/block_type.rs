//! # Block Type Module
//!
//! This module defines the block types the terrain generator can emit and
//! the conversions between block ids and the rich enum type.

use num_derive::FromPrimitive;

use crate::error::ConfigError;

use super::BlockTypeSize;

/// Enumerates all block types in the voxel world.
///
/// The discriminants are the block ids stored in every [`VoxelGrid`] and are
/// part of the terrain generator's contract: id 0 is always air, id 1 is the
/// unconditional bedrock floor, and ids 2/3/6 are the deep, surface and
/// subsurface layers of the basic terrain pass.
///
/// [`VoxelGrid`]: crate::voxels::chunk::voxel_grid::VoxelGrid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, non-solid and never rendered.
    AIR = 0,

    /// The indestructible floor emitted at `y == 0`.
    BEDROCK = 1,

    /// Deep terrain, more than four blocks below the surface.
    STONE = 2,

    /// The surface block at exactly the computed terrain height.
    GRASS = 3,

    /// A sand block, available to loaded block tables.
    SAND = 4,

    /// A wood block with bark sides and ring ends.
    WOOD = 5,

    /// Subsurface filler in the four blocks directly under the grass.
    DIRT = 6,
}

/// Maps block names, as they appear in JSON block tables, to block types.
///
/// Names are matched exactly; a miss is a fatal configuration error because
/// it means the loaded table and the engine disagree about what exists.
pub static BLOCK_NAME_TO_TYPE: phf::Map<&'static str, BlockType> = phf::phf_map! {
    "air" => BlockType::AIR,
    "bedrock" => BlockType::BEDROCK,
    "stone" => BlockType::STONE,
    "grass" => BlockType::GRASS,
    "sand" => BlockType::SAND,
    "wood" => BlockType::WOOD,
    "dirt" => BlockType::DIRT,
};

impl BlockType {
    /// Converts a raw block id to a `BlockType`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownBlockType`] if the id has no variant,
    /// which is fatal: an id can only appear in a grid if the generator or a
    /// loaded table produced it, so a miss means broken configuration.
    pub fn from_id(id: BlockTypeSize) -> Result<Self, ConfigError> {
        num::FromPrimitive::from_u8(id).ok_or(ConfigError::UnknownBlockType(id))
    }

    /// Looks up a block type by its table name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        BLOCK_NAME_TO_TYPE
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownBlockName(name.to_string()))
    }

    /// The raw id stored in voxel grids for this block type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }
}
