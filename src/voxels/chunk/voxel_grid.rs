//! # Voxel Grid Module
//!
//! Dense per-chunk block storage: one block id per cell, plus a bit-vector
//! solidity mask maintained alongside it.
//!
//! The mask is derived from the block table at population time so that the
//! mesher's inner loop can answer "does this cell occlude a face" with a
//! single bit read instead of a table lookup per adjacency check.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use crate::voxels::block::BlockTypeSize;

use super::{CHUNK_HEIGHT, CHUNK_WIDTH};

/// A dense `CHUNK_WIDTH x CHUNK_HEIGHT x CHUNK_WIDTH` array of block ids.
///
/// Indices are chunk-local and 0-based; the owning chunk's origin converts
/// them to world space.
pub struct VoxelGrid {
    blocks: Vec<BlockTypeSize>,
    solid: BitVec,
}

/// Total number of cells in one chunk's volume.
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH;

impl VoxelGrid {
    /// Creates a grid filled with air.
    pub fn new() -> Self {
        VoxelGrid {
            blocks: vec![0; CHUNK_VOLUME],
            solid: BitVec::repeat(false, CHUNK_VOLUME),
        }
    }

    /// Flat index for a chunk-local cell. Row-major within a Y plane, planes
    /// stacked bottom to top.
    ///
    /// Callers must pass in-range coordinates; an out-of-range component
    /// would alias another cell, so it trips an assertion in debug builds.
    fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(
            x < CHUNK_WIDTH && y < CHUNK_HEIGHT && z < CHUNK_WIDTH,
            "chunk-local coordinate ({x}, {y}, {z}) out of range"
        );
        x + CHUNK_WIDTH * (z + CHUNK_WIDTH * y)
    }

    /// Writes one cell, keeping the solidity mask in step with the block id.
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: BlockTypeSize, is_solid: bool) {
        let i = Self::index(x, y, z);
        self.blocks[i] = id;
        self.solid.set(i, is_solid);
    }

    /// The block id stored at a chunk-local cell.
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> BlockTypeSize {
        self.blocks[Self::index(x, y, z)]
    }

    /// Whether the cell at a chunk-local coordinate is solid. O(1).
    pub fn is_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.solid[Self::index(x, y, z)]
    }

    /// Whether a signed chunk-local coordinate lies inside this grid.
    ///
    /// Adjacency checks step one cell past the boundary; a `false` here is
    /// the signal to re-derive the answer from world coordinates instead.
    pub fn in_bounds(pos: Point3<i32>) -> bool {
        pos.x >= 0
            && pos.x < CHUNK_WIDTH as i32
            && pos.y >= 0
            && pos.y < CHUNK_HEIGHT as i32
            && pos.z >= 0
            && pos.z < CHUNK_WIDTH as i32
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}
