//! # Block Module
//!
//! This module provides the static block definition table: one entry per
//! block id describing the block's name, solidity, and the atlas texture
//! assigned to each of its six faces.
//!
//! The table is the single authority both the terrain pass and the mesher
//! consult. An id without an entry is a fatal configuration error, never a
//! recoverable per-voxel condition.

use serde::Deserialize;

use crate::error::ConfigError;

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is what every voxel grid cell stores.
pub type BlockTypeSize = u8;

/// The static definition of one block type.
///
/// `face_textures` holds one atlas texture id per face, in the fixed face
/// order `[back, front, top, bottom, left, right]`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDef {
    /// Human-readable block name, matched against the known-name table when
    /// definitions are loaded from JSON.
    pub name: String,
    /// Whether the block occludes neighboring faces. Air is the only
    /// non-solid block in the default table.
    pub is_solid: bool,
    /// Atlas texture id per face, in `BlockSide` order.
    pub face_textures: [usize; 6],
}

impl BlockDef {
    /// Returns the atlas texture id for the given face index.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidFaceIndex`] for indices outside `0..6`.
    pub fn texture_id(&self, face_index: usize) -> Result<usize, ConfigError> {
        self.face_textures
            .get(face_index)
            .copied()
            .ok_or(ConfigError::InvalidFaceIndex(face_index))
    }
}

/// The block definition table, indexed by block id.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    defs: Vec<BlockDef>,
}

impl BlockRegistry {
    /// Builds the compiled-in default table.
    ///
    /// The entries line up with the [`BlockType`] discriminants; texture ids
    /// address a 4x4 atlas laid out top-to-bottom.
    pub fn default_table() -> Self {
        let def = |name: &str, is_solid: bool, face_textures: [usize; 6]| BlockDef {
            name: name.to_string(),
            is_solid,
            face_textures,
        };
        let registry = BlockRegistry {
            defs: vec![
                def("air", false, [0; 6]),
                def("bedrock", true, [4; 6]),
                def("stone", true, [0; 6]),
                // Grass: dirt on the bottom, turf on top, blended sides.
                def("grass", true, [2, 2, 3, 1, 2, 2]),
                def("sand", true, [5; 6]),
                def("wood", true, [6, 6, 7, 7, 6, 6]),
                def("dirt", true, [1; 6]),
            ],
        };
        debug_assert!(
            registry.validate().is_ok(),
            "compiled-in block table violates the table invariants"
        );
        registry
    }

    /// Loads a block table from a JSON array of [`BlockDef`] entries.
    ///
    /// Every entry must carry a name the engine knows, the entry's position
    /// must match the id that name maps to, and id 0 must be non-solid.
    ///
    /// # Errors
    /// Any violation is a [`ConfigError`]; a partially valid table is never
    /// returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let defs: Vec<BlockDef> = serde_json::from_str(json)?;
        let registry = BlockRegistry { defs };
        registry.validate()?;
        Ok(registry)
    }

    /// Checks the table invariants shared by loaded and compiled-in tables.
    fn validate(&self) -> Result<(), ConfigError> {
        for (id, def) in self.defs.iter().enumerate() {
            let btype = BlockType::from_name(&def.name)?;
            if btype.id() as usize != id {
                return Err(ConfigError::UnknownBlockType(id as BlockTypeSize));
            }
        }
        match self.defs.first() {
            Some(air) if !air.is_solid => Ok(()),
            Some(_) => Err(ConfigError::SolidAir),
            None => Err(ConfigError::UnknownBlockType(0)),
        }
    }

    /// Returns the definition for a block id.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownBlockType`] for ids outside the table.
    pub fn def(&self, id: BlockTypeSize) -> Result<&BlockDef, ConfigError> {
        self.defs
            .get(id as usize)
            .ok_or(ConfigError::UnknownBlockType(id))
    }

    /// Whether the block with the given id occludes its neighbors.
    pub fn is_solid(&self, id: BlockTypeSize) -> Result<bool, ConfigError> {
        Ok(self.def(id)?.is_solid)
    }

    /// The number of defined block types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the table has no entries. Only possible for loaded tables
    /// that failed validation, kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::default_table()
    }
}

#[cfg(test)]
mod tests {
    use super::block_side::BlockSide;
    use super::*;

    #[test]
    fn air_is_never_solid() {
        let registry = BlockRegistry::default_table();
        assert!(!registry.is_solid(BlockType::AIR.id()).unwrap());
    }

    #[test]
    fn default_table_satisfies_the_loaded_table_invariants() {
        assert!(BlockRegistry::default_table().validate().is_ok());
    }

    #[test]
    fn every_default_entry_resolves() {
        let registry = BlockRegistry::default_table();
        for id in 0..registry.len() as BlockTypeSize {
            let def = registry.def(id).unwrap();
            for side in BlockSide::all() {
                assert!(def.texture_id(side as usize).is_ok());
            }
        }
    }

    #[test]
    fn unknown_id_and_face_are_fatal() {
        let registry = BlockRegistry::default_table();
        assert!(matches!(
            registry.def(200),
            Err(ConfigError::UnknownBlockType(200))
        ));
        let stone = registry.def(BlockType::STONE.id()).unwrap();
        assert!(matches!(
            stone.texture_id(6),
            Err(ConfigError::InvalidFaceIndex(6))
        ));
    }

    #[test]
    fn loaded_table_must_keep_air_non_solid() {
        let json = r#"[
            {"name": "air", "is_solid": true, "face_textures": [0, 0, 0, 0, 0, 0]}
        ]"#;
        assert!(matches!(
            BlockRegistry::from_json(json),
            Err(ConfigError::SolidAir)
        ));
    }

    #[test]
    fn loaded_table_rejects_unknown_names() {
        let json = r#"[
            {"name": "air", "is_solid": false, "face_textures": [0, 0, 0, 0, 0, 0]},
            {"name": "obsidian", "is_solid": true, "face_textures": [1, 1, 1, 1, 1, 1]}
        ]"#;
        assert!(matches!(
            BlockRegistry::from_json(json),
            Err(ConfigError::UnknownBlockName(_))
        ));
    }

    #[test]
    fn loaded_table_round_trips_the_default() {
        let json = r#"[
            {"name": "air", "is_solid": false, "face_textures": [0, 0, 0, 0, 0, 0]},
            {"name": "bedrock", "is_solid": true, "face_textures": [4, 4, 4, 4, 4, 4]},
            {"name": "stone", "is_solid": true, "face_textures": [0, 0, 0, 0, 0, 0]},
            {"name": "grass", "is_solid": true, "face_textures": [2, 2, 3, 1, 2, 2]}
        ]"#;
        let registry = BlockRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.is_solid(3).unwrap());
    }
}
