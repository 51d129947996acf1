//! # Meshing Module
//!
//! Converts a populated voxel grid into a triangulated surface mesh.
//!
//! The algorithm is per-voxel face culling: every solid cell contributes a
//! quad for each of its six faces, but only when the cell across that face
//! is not solid. Faces buried between two solid cells are never emitted.
//!
//! Adjacency has two paths:
//! * inside the chunk, the grid's solidity mask answers directly;
//! * across a chunk boundary, the answer is re-derived from absolute world
//!   coordinates through a [`BlockSampler`], so a chunk meshes identically
//!   whether or not its neighbors are populated.
//!
//! Quads are emitted whole and wound consistently, which gives the two mesh
//! invariants downstream code relies on: the vertex count is a multiple of
//! four, and the index count is exactly 1.5x the vertex count.

use cgmath::Point3;

use crate::error::ConfigError;
use crate::terrain::BlockSampler;
use crate::voxels::block::{block_side::BlockSide, BlockRegistry};
use crate::voxels::chunk::voxel_grid::VoxelGrid;
use crate::voxels::chunk::{CHUNK_HEIGHT, CHUNK_WIDTH};

pub mod mesh;

use mesh::{atlas_uvs, MeshData};

/// The eight corners of a unit cube, in a fixed order the face table indexes
/// into.
pub const VOXEL_VERTS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// For each face (in `BlockSide` order), the four cube corners forming its
/// quad, ordered lower-left, upper-left, lower-right, upper-right.
///
/// Combined with the `0 1 2 / 2 1 3` index pattern this winds every face so
/// its normal points out of the cube.
pub const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 3, 1, 2], // back
    [5, 6, 4, 7], // front
    [3, 7, 2, 6], // top
    [1, 5, 0, 4], // bottom
    [4, 7, 0, 3], // left
    [1, 2, 5, 6], // right
];

/// Builds chunk meshes against a block table and a world sampler.
///
/// The mesher assumes a fully populated grid. An id in the grid with no
/// table entry is a fatal configuration error and aborts the build.
pub struct ChunkMesher<'a> {
    registry: &'a BlockRegistry,
    sampler: &'a dyn BlockSampler,
}

impl<'a> ChunkMesher<'a> {
    /// Creates a mesher borrowing the block table and the cross-chunk
    /// sampler for the duration of the build.
    pub fn new(registry: &'a BlockRegistry, sampler: &'a dyn BlockSampler) -> Self {
        ChunkMesher { registry, sampler }
    }

    /// Meshes every solid cell of the grid.
    ///
    /// `origin` is the chunk's world-space origin, used only when an
    /// adjacency check crosses the chunk boundary.
    pub fn build_mesh(
        &self,
        grid: &VoxelGrid,
        origin: Point3<i32>,
    ) -> Result<MeshData, ConfigError> {
        let mut mesh = MeshData::new();

        for y in 0..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                for z in 0..CHUNK_WIDTH {
                    if grid.is_solid(x, y, z) {
                        let local = Point3::new(x as i32, y as i32, z as i32);
                        self.add_block_faces(grid, origin, local, &mut mesh)?;
                    }
                }
            }
        }

        Ok(mesh)
    }

    /// Emits the visible faces of one solid cell.
    fn add_block_faces(
        &self,
        grid: &VoxelGrid,
        origin: Point3<i32>,
        local: Point3<i32>,
        mesh: &mut MeshData,
    ) -> Result<(), ConfigError> {
        let id = grid.block_at(local.x as usize, local.y as usize, local.z as usize);
        let def = self.registry.def(id)?;

        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            let neighbor = Point3::new(
                local.x + offset.x,
                local.y + offset.y,
                local.z + offset.z,
            );
            if self.is_neighbor_solid(grid, origin, neighbor)? {
                continue;
            }

            let corners = FACE_CORNERS[side as usize].map(|ci| {
                let v = VOXEL_VERTS[ci];
                [
                    local.x as f32 + v[0],
                    local.y as f32 + v[1],
                    local.z as f32 + v[2],
                ]
            });
            let face_uvs = atlas_uvs(def.texture_id(side as usize)?)?;
            mesh.push_face(corners, face_uvs);
        }

        Ok(())
    }

    /// Occupancy of the cell a face is checked against.
    ///
    /// Inside the chunk this is one bit read; outside, the block id is
    /// re-derived at the world coordinate, which crosses into neighboring
    /// chunks (or open sky at the world edge) without touching their grids.
    fn is_neighbor_solid(
        &self,
        grid: &VoxelGrid,
        origin: Point3<i32>,
        neighbor: Point3<i32>,
    ) -> Result<bool, ConfigError> {
        if VoxelGrid::in_bounds(neighbor) {
            return Ok(grid.is_solid(
                neighbor.x as usize,
                neighbor.y as usize,
                neighbor.z as usize,
            ));
        }

        let world = Point3::new(
            origin.x + neighbor.x,
            origin.y + neighbor.y,
            origin.z + neighbor.z,
        );
        self.registry.is_solid(self.sampler.block_at(world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;

    struct AirSampler;

    impl BlockSampler for AirSampler {
        fn block_at(&self, _pos: Point3<i32>) -> u8 {
            BlockType::AIR.id()
        }
    }

    #[test]
    fn face_corner_table_covers_every_cube_corner() {
        let mut seen = [0usize; 8];
        for face in FACE_CORNERS {
            for ci in face {
                seen[ci] += 1;
            }
        }
        // Each cube corner belongs to exactly three faces.
        assert!(seen.iter().all(|&count| count == 3));
    }

    #[test]
    fn every_face_normal_points_outward() {
        let registry = BlockRegistry::default_table();
        let sampler = AirSampler;
        let mesher = ChunkMesher::new(&registry, &sampler);

        let mut grid = VoxelGrid::new();
        grid.set(8, 64, 8, BlockType::STONE.id(), true);
        let mesh = mesher.build_mesh(&grid, Point3::new(0, 0, 0)).unwrap();
        assert_eq!(mesh.face_count(), 6);

        for (face, side) in BlockSide::all().iter().enumerate() {
            let v = |i: usize| {
                let p = mesh.vertices[face * 4 + i];
                cgmath::Vector3::new(p[0], p[1], p[2])
            };
            // First triangle of the face is (0, 1, 2).
            let normal = (v(1) - v(0)).cross(v(2) - v(0));
            let out = side.neighbor_offset();
            let dot = normal.x * out.x as f32 + normal.y * out.y as f32 + normal.z * out.z as f32;
            assert!(dot > 0.0, "face {face} ({side:?}) winds inward");
        }
    }
}
