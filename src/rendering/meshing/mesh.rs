//! Mesh buffer types and texture-atlas UV mapping.
//!
//! A chunk mesh is three parallel buffers: vertex positions, triangle
//! indices, and per-vertex UVs. Exactly this triple crosses the rendering
//! boundary; normals are recomputed from winding on the other side, so no
//! other metadata is carried here.

use crate::error::ConfigError;

/// Number of block textures along one edge of the square atlas.
pub const TEXTURE_ATLAS_SIZE_IN_BLOCKS: usize = 4;

/// The side length of one block texture in normalized `[0, 1]` UV space.
pub const NORMALIZED_BLOCK_TEXTURE_SIZE: f32 = 1.0 / TEXTURE_ATLAS_SIZE_IN_BLOCKS as f32;

/// Vertex, index and UV buffers for one chunk.
///
/// Invariants maintained by the mesher: the vertex count is always a
/// multiple of 4 (faces are emitted whole) and the index count is always
/// 1.5x the vertex count (two triangles per four-vertex face).
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions in chunk-local space.
    pub vertices: Vec<[f32; 3]>,
    /// Triangle indices into `vertices`, wound so normals face outward.
    pub triangles: Vec<u32>,
    /// Per-vertex atlas UV coordinates.
    pub uvs: Vec<[f32; 2]>,
}

impl MeshData {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad face: four vertices, four UVs, and the six indices
    /// forming its two triangles in the fixed `0 1 2 / 2 1 3` pattern.
    pub fn push_face(&mut self, corners: [[f32; 3]; 4], face_uvs: [[f32; 2]; 4]) {
        let vi = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&face_uvs);
        self.triangles
            .extend_from_slice(&[vi, vi + 1, vi + 2, vi + 2, vi + 1, vi + 3]);
    }

    /// The number of emitted quad faces.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Total buffer size in bytes, as a renderer would upload it.
    pub fn byte_len(&self) -> usize {
        bytemuck::cast_slice::<_, u8>(&self.vertices).len()
            + bytemuck::cast_slice::<_, u8>(&self.triangles).len()
            + bytemuck::cast_slice::<_, u8>(&self.uvs).len()
    }
}

/// Maps an atlas texture id to the four UV corners of its tile.
///
/// The atlas is laid out in rows top-to-bottom, but UV space has its origin
/// at the bottom-left, so the row coordinate is flipped vertically. The
/// returned corners are ordered to match the face vertex order: lower-left,
/// upper-left, lower-right, upper-right.
///
/// # Errors
/// A texture id outside the atlas is a fatal configuration error.
pub fn atlas_uvs(texture_id: usize) -> Result<[[f32; 2]; 4], ConfigError> {
    if texture_id >= TEXTURE_ATLAS_SIZE_IN_BLOCKS * TEXTURE_ATLAS_SIZE_IN_BLOCKS {
        return Err(ConfigError::TextureOutOfAtlas(
            texture_id,
            TEXTURE_ATLAS_SIZE_IN_BLOCKS,
        ));
    }

    let row = texture_id / TEXTURE_ATLAS_SIZE_IN_BLOCKS;
    let col = texture_id - row * TEXTURE_ATLAS_SIZE_IN_BLOCKS;

    let n = NORMALIZED_BLOCK_TEXTURE_SIZE;
    let x = col as f32 * n;
    let y = 1.0 - row as f32 * n - n;

    Ok([[x, y], [x, y + n], [x + n, y], [x + n, y + n]])
}
