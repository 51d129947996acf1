//! # Rendering Module
//!
//! The narrow boundary between the core and whatever actually draws pixels.
//!
//! Exactly two things cross it per chunk: the vertex/index/UV buffer triple
//! (once, at build time) and an activation boolean (whenever streaming
//! toggles visibility). The collaborator on the other side recomputes face
//! normals from triangle winding and renders only active chunks; no other
//! mesh metadata is exchanged.

use std::collections::HashSet;

use crate::voxels::chunk::ChunkCoord;

pub mod meshing;

use meshing::mesh::MeshData;

/// The render collaborator interface.
///
/// Implementations receive each chunk's buffers exactly once and visibility
/// toggles thereafter. They must not assume a chunk is re-uploaded on
/// re-activation: the streamer reuses buffers for the process lifetime.
pub trait RenderSink {
    /// Accepts a freshly built chunk mesh.
    fn upload_chunk_mesh(&mut self, coord: ChunkCoord, mesh: &MeshData);

    /// Shows or hides a previously uploaded chunk.
    fn set_chunk_visible(&mut self, coord: ChunkCoord, visible: bool);
}

/// A render sink that only keeps the books.
///
/// Used by the demo binary and the test suite to observe exactly what the
/// streamer hands to a renderer: upload order, buffer bytes, and the set of
/// currently visible chunks.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    uploads: Vec<ChunkCoord>,
    uploaded_bytes: usize,
    visible: HashSet<ChunkCoord>,
    visibility_toggles: usize,
}

impl HeadlessRenderer {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every upload received, in order. A coord appearing twice here would
    /// mean a chunk was rebuilt, which the streamer never does.
    pub fn uploads(&self) -> &[ChunkCoord] {
        &self.uploads
    }

    /// Total bytes of buffer data received.
    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }

    /// The chunks a renderer would currently draw.
    pub fn visible_chunks(&self) -> &HashSet<ChunkCoord> {
        &self.visible
    }

    /// Number of visibility calls received, including the initial show on
    /// upload.
    pub fn visibility_toggles(&self) -> usize {
        self.visibility_toggles
    }
}

impl RenderSink for HeadlessRenderer {
    fn upload_chunk_mesh(&mut self, coord: ChunkCoord, mesh: &MeshData) {
        self.uploads.push(coord);
        self.uploaded_bytes += mesh.byte_len();
    }

    fn set_chunk_visible(&mut self, coord: ChunkCoord, visible: bool) {
        self.visibility_toggles += 1;
        if visible {
            self.visible.insert(coord);
        } else {
            self.visible.remove(&coord);
        }
    }
}
