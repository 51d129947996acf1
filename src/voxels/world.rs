//! # World Module
//!
//! This module provides the `World` struct: owner of the chunk table and the
//! active set, and the streaming logic that keeps them in step with a moving
//! observer.
//!
//! ## Streaming model
//!
//! The world is a fixed-extent grid of chunk columns. Each observer tick is
//! gated on a single equality check: if the observer is still in the chunk
//! it was in last tick, nothing happens. On a chunk crossing, one reconcile
//! pass runs synchronously to completion: chunks entering the view window
//! are created (population + meshing, all before control returns) or
//! re-activated, and chunks leaving it are hidden. Nothing is ever
//! destroyed: a chunk that falls out of range keeps its grid and mesh so
//! re-entry costs one visibility toggle.
//!
//! The view window is deliberately asymmetric: it spans `< view_distance`
//! on both sides of the observer's chunk, which is an open, uncentered
//! square. This mirrors the behavior the engine was built to reproduce and
//! is preserved as-is.

use std::collections::HashSet;

use cgmath::Point3;

use crate::config::WorldConfig;
use crate::error::ConfigError;
use crate::rendering::RenderSink;
use crate::terrain::TerrainGenerator;
use crate::voxels::block::BlockRegistry;
use crate::voxels::chunk::{Chunk, ChunkCoord, CHUNK_HEIGHT, CHUNK_WIDTH};

/// World extent along each horizontal axis, in chunks.
pub const WORLD_SIZE_IN_CHUNKS: i32 = 10;

/// Streaming window half-extent, in chunks. The window is open on both
/// sides: chunks strictly less than this far away (per axis) are in view.
pub const VIEW_DISTANCE_IN_CHUNKS: i32 = 5;

/// World extent along each horizontal axis, in voxels.
pub const WORLD_SIZE_IN_VOXELS: i32 = WORLD_SIZE_IN_CHUNKS * CHUNK_WIDTH as i32;

/// The voxel world: chunk table, active set, and observer tracking.
///
/// Chunks live in a slot arena indexed by their coordinate; a populated
/// slot is never cleared. The render collaborator is owned by the world and
/// notified of uploads and visibility changes as streaming decides them.
pub struct World<S: RenderSink> {
    generator: TerrainGenerator,
    registry: BlockRegistry,
    chunks: Vec<Option<Chunk>>,
    active_chunks: HashSet<ChunkCoord>,
    last_observer_coord: ChunkCoord,
    sink: S,
}

impl<S: RenderSink> World<S> {
    /// Creates the world and pre-warms the starting view.
    ///
    /// The initial population runs a reconcile pass for a window centered
    /// on the world midpoint, before any observer is placed, so the
    /// observer spawns into already-visible terrain.
    pub fn new(config: WorldConfig, sink: S) -> Result<Self, ConfigError> {
        let WorldConfig {
            seed,
            biome,
            blocks,
        } = config;

        let slots = (WORLD_SIZE_IN_CHUNKS * WORLD_SIZE_IN_CHUNKS) as usize;
        let mut world = World {
            generator: TerrainGenerator::new(seed, biome),
            registry: blocks,
            chunks: std::iter::repeat_with(|| None).take(slots).collect(),
            active_chunks: HashSet::new(),
            last_observer_coord: ChunkCoord::new(0, 0),
            sink,
        };

        let center = ChunkCoord::new(WORLD_SIZE_IN_CHUNKS / 2, WORLD_SIZE_IN_CHUNKS / 2);
        world.reconcile(center)?;
        world.last_observer_coord = ChunkCoord::containing(world.spawn_position());
        log::info!(
            "world pre-warmed: {} active chunks around ({}, {})",
            world.active_chunks.len(),
            center.x,
            center.z
        );

        Ok(world)
    }

    /// Where the observer should be placed at startup: the world's center
    /// column, above the terrain ceiling.
    pub fn spawn_position(&self) -> Point3<f32> {
        let center = WORLD_SIZE_IN_VOXELS as f32 / 2.0;
        Point3::new(center, (CHUNK_HEIGHT + 10) as f32, center)
    }

    /// The per-tick observer hook.
    ///
    /// Computes the observer's chunk and reconciles only when it changed;
    /// sub-chunk movement does no work at all.
    pub fn on_observer_moved(&mut self, pos: Point3<f32>) -> Result<(), ConfigError> {
        let coord = ChunkCoord::containing(pos);
        if coord != self.last_observer_coord {
            self.reconcile(coord)?;
            self.last_observer_coord = coord;
        }
        Ok(())
    }

    /// Rebuilds the active set for a view window around `coord`.
    ///
    /// Missing in-window chunks are created (running the full lifecycle and
    /// ending active), inactive ones are re-shown, and every chunk active
    /// before this call but outside the new window is hidden. Out-of-world
    /// coordinates are silently skipped, never created.
    fn reconcile(&mut self, coord: ChunkCoord) -> Result<(), ConfigError> {
        let mut target = HashSet::new();
        let mut created = 0usize;
        let mut reactivated = 0usize;

        // Saturating window bounds: float-to-int casts clamp an extreme
        // observer position to the i32 limits, and the window must not wrap
        // around them.
        let x_range = coord.x.saturating_sub(VIEW_DISTANCE_IN_CHUNKS)
            ..coord.x.saturating_add(VIEW_DISTANCE_IN_CHUNKS);
        let z_range = coord.z.saturating_sub(VIEW_DISTANCE_IN_CHUNKS)
            ..coord.z.saturating_add(VIEW_DISTANCE_IN_CHUNKS);
        for x in x_range {
            for z in z_range.clone() {
                let c = ChunkCoord::new(x, z);
                if !Self::is_chunk_in_world(c) {
                    continue;
                }
                target.insert(c);

                let slot = Self::slot(c);
                match self.chunks[slot].as_mut() {
                    None => {
                        let chunk =
                            Chunk::build(c, &self.generator, &self.registry, &mut self.sink)?;
                        self.chunks[slot] = Some(chunk);
                        created += 1;
                    }
                    Some(chunk) => {
                        if !chunk.is_active() {
                            chunk.set_active(true, &mut self.sink);
                            reactivated += 1;
                        }
                    }
                }
            }
        }

        let stale: Vec<ChunkCoord> = self
            .active_chunks
            .iter()
            .filter(|c| !target.contains(c))
            .copied()
            .collect();
        for c in &stale {
            if let Some(chunk) = self.chunks[Self::slot(*c)].as_mut() {
                chunk.set_active(false, &mut self.sink);
            }
        }

        log::debug!(
            "reconcile at ({}, {}): {} created, {} reactivated, {} deactivated, {} active",
            coord.x,
            coord.z,
            created,
            reactivated,
            stale.len(),
            target.len()
        );
        self.active_chunks = target;

        Ok(())
    }

    /// Whether a chunk coordinate lies inside the world's fixed extent.
    pub fn is_chunk_in_world(coord: ChunkCoord) -> bool {
        coord.x >= 0
            && coord.x < WORLD_SIZE_IN_CHUNKS
            && coord.z >= 0
            && coord.z < WORLD_SIZE_IN_CHUNKS
    }

    /// Arena slot for an in-world chunk coordinate.
    fn slot(coord: ChunkCoord) -> usize {
        (coord.x * WORLD_SIZE_IN_CHUNKS + coord.z) as usize
    }

    /// The set of currently visible chunk coordinates.
    pub fn active_chunks(&self) -> &HashSet<ChunkCoord> {
        &self.active_chunks
    }

    /// The chunk at a coordinate, if it has ever been created.
    pub fn chunk_at(&self, coord: ChunkCoord) -> Option<&Chunk> {
        if !Self::is_chunk_in_world(coord) {
            return None;
        }
        self.chunks[Self::slot(coord)].as_ref()
    }

    /// The chunk the observer was last seen in.
    pub fn observer_chunk(&self) -> ChunkCoord {
        self.last_observer_coord
    }

    /// The terrain generator driving this world.
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// The render collaborator, for inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
