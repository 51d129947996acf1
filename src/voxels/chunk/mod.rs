//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one fixed-size vertical column
//! of the world, the unit of generation, meshing and streaming.
//!
//! ## Lifecycle
//!
//! A chunk moves through `Uninitialized -> Populated -> Meshed -> Active`
//! inside [`Chunk::build`], and afterward only toggles between `Active` and
//! `Inactive`. There is no destroyed state: once built, a chunk keeps its
//! grid and mesh for the life of the process, trading memory for never
//! paying the population/meshing cost again when the observer re-enters its
//! view window.

use cgmath::Point3;

use crate::error::ConfigError;
use crate::rendering::meshing::mesh::MeshData;
use crate::rendering::meshing::ChunkMesher;
use crate::rendering::RenderSink;
use crate::terrain::{BlockSampler, TerrainGenerator};
use crate::voxels::block::BlockRegistry;

pub mod voxel_grid;

use voxel_grid::VoxelGrid;

/// Horizontal extent of a chunk, in voxels. World-wide constant shared by
/// every chunk.
pub const CHUNK_WIDTH: usize = 16;

/// Vertical extent of a chunk, in voxels. Chunks span the full world height;
/// there is no vertical chunk split.
pub const CHUNK_HEIGHT: usize = 128;

/// The 2D integer key identifying one chunk column.
///
/// Value type: two coordinates compare and hash field-wise, and this is the
/// sole key into the world's chunk table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a coordinate from chunk-grid components.
    pub fn new(x: i32, z: i32) -> Self {
        ChunkCoord { x, z }
    }

    /// The chunk containing a world-space position.
    pub fn containing(pos: Point3<f32>) -> Self {
        ChunkCoord {
            x: (pos.x / CHUNK_WIDTH as f32).floor() as i32,
            z: (pos.z / CHUNK_WIDTH as f32).floor() as i32,
        }
    }

    /// The world-space origin of this chunk: local `(0, 0, 0)` sits here.
    pub fn origin(self) -> Point3<i32> {
        Point3::new(self.x * CHUNK_WIDTH as i32, 0, self.z * CHUNK_WIDTH as i32)
    }
}

/// Where a chunk is in its lifecycle.
///
/// `Populated` and `Meshed` are only observable mid-build; a chunk handed
/// out by the world is always `Active` or `Inactive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkState {
    /// Grid filled, mesh not yet built.
    Populated,
    /// Mesh built, not yet handed to the renderer.
    Meshed,
    /// Visible: inside the observer's view window.
    Active,
    /// Hidden: outside the view window, data retained.
    Inactive,
}

/// One generated chunk column: its grid, its derived mesh, and its
/// activation state.
///
/// The grid is only reachable read-only once the chunk is built; all
/// mutation after meshing is limited to the activation flag.
pub struct Chunk {
    coord: ChunkCoord,
    grid: VoxelGrid,
    mesh: MeshData,
    state: ChunkState,
}

impl Chunk {
    /// Runs the full creation lifecycle: populate the grid from the terrain
    /// generator, build the mesh, hand the buffers to the renderer, and
    /// come up `Active`.
    ///
    /// Creation runs to completion before returning; a chunk is never
    /// observable partially built.
    ///
    /// # Errors
    /// Fails only on configuration errors (unknown block id, bad face or
    /// texture index), which abort world generation.
    pub fn build<S: RenderSink>(
        coord: ChunkCoord,
        generator: &TerrainGenerator,
        registry: &BlockRegistry,
        sink: &mut S,
    ) -> Result<Self, ConfigError> {
        let mut chunk = Chunk {
            coord,
            grid: Self::populate(coord, generator, registry)?,
            mesh: MeshData::new(),
            state: ChunkState::Populated,
        };

        let mesher = ChunkMesher::new(registry, generator);
        chunk.mesh = mesher.build_mesh(&chunk.grid, coord.origin())?;
        chunk.state = ChunkState::Meshed;
        log::debug!(
            "chunk ({}, {}) built: {} faces, {} bytes",
            coord.x,
            coord.z,
            chunk.mesh.face_count(),
            chunk.mesh.byte_len()
        );

        sink.upload_chunk_mesh(coord, &chunk.mesh);
        sink.set_chunk_visible(coord, true);
        chunk.state = ChunkState::Active;

        Ok(chunk)
    }

    /// Fills a fresh grid by classifying every cell at its absolute world
    /// coordinate.
    fn populate(
        coord: ChunkCoord,
        generator: &TerrainGenerator,
        registry: &BlockRegistry,
    ) -> Result<VoxelGrid, ConfigError> {
        let origin = coord.origin();
        let mut grid = VoxelGrid::new();

        for y in 0..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                for z in 0..CHUNK_WIDTH {
                    let world = Point3::new(
                        origin.x + x as i32,
                        origin.y + y as i32,
                        origin.z + z as i32,
                    );
                    let id = generator.block_at(world);
                    grid.set(x, y, z, id, registry.is_solid(id)?);
                }
            }
        }

        Ok(grid)
    }

    /// Toggles visibility without touching grid or mesh.
    ///
    /// Only the world streamer calls this; re-activation reuses the buffers
    /// already held by the renderer.
    pub fn set_active<S: RenderSink>(&mut self, active: bool, sink: &mut S) {
        let target = if active {
            ChunkState::Active
        } else {
            ChunkState::Inactive
        };
        if self.state == target {
            return;
        }
        self.state = target;
        sink.set_chunk_visible(self.coord, active);
    }

    /// Whether the chunk is currently visible.
    pub fn is_active(&self) -> bool {
        self.state == ChunkState::Active
    }

    /// The chunk's current lifecycle state.
    pub fn state(&self) -> ChunkState {
        self.state
    }

    /// This chunk's grid key.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Read-only view of the populated grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Read-only view of the built mesh buffers.
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coords_compare_and_hash_by_value() {
        let a = ChunkCoord::new(3, -7);
        let b = ChunkCoord::new(3, -7);
        assert_eq!(a, b);
        assert_ne!(a, ChunkCoord::new(-7, 3));

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn containing_floors_toward_negative_infinity() {
        assert_eq!(
            ChunkCoord::containing(Point3::new(0.5, 70.0, 15.9)),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::containing(Point3::new(16.0, 70.0, 31.9)),
            ChunkCoord::new(1, 1)
        );
        assert_eq!(
            ChunkCoord::containing(Point3::new(-0.1, 70.0, -16.1)),
            ChunkCoord::new(-1, -2)
        );
    }

    #[test]
    fn origin_scales_by_chunk_width() {
        assert_eq!(ChunkCoord::new(5, 6).origin(), Point3::new(80, 0, 96));
    }
}
