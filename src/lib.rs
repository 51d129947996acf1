#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Blockgen
//!
//! A procedural voxel world generator and chunk streamer.
//!
//! The world is a fixed grid of chunk columns generated deterministically
//! from a seed and a biome profile. As an observer moves, chunks inside the
//! view window are populated, meshed with per-voxel face culling, and handed
//! to a render collaborator; chunks leaving the window are hidden but never
//! destroyed.
//!
//! ## Key Modules
//!
//! * `terrain` - Seeded noise field and the pure world-coordinate to
//!   block-id classification function
//! * `voxels` - Block definitions, per-chunk voxel grids, and the streaming
//!   world owner
//! * `rendering` - The meshing pipeline and the narrow render-collaborator
//!   interface
//! * `config` - Seed, biome and block-table configuration
//!
//! ## Architecture
//!
//! Everything runs single-threaded and cooperatively: the host loop feeds
//! observer positions to [`World::on_observer_moved`] once per tick, and
//! any chunk work that tick triggers runs to completion before the call
//! returns. Generation is pure, so the only fatal failures are
//! configuration errors; all out-of-bounds queries answer with air.
//!
//! ## Usage
//!
//! ```no_run
//! use blockgen::{HeadlessRenderer, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default(), HeadlessRenderer::new())?;
//! let mut pos = world.spawn_position();
//! pos.x += 24.0;
//! world.on_observer_moved(pos)?;
//! # Ok::<(), blockgen::ConfigError>(())
//! ```

use log::info;

pub mod config;
pub mod error;
pub mod rendering;
pub mod terrain;
pub mod voxels;

pub use config::WorldConfig;
pub use error::ConfigError;
pub use rendering::meshing::mesh::MeshData;
pub use rendering::meshing::ChunkMesher;
pub use rendering::{HeadlessRenderer, RenderSink};
pub use terrain::biome::BiomeProfile;
pub use terrain::noise::NoiseField;
pub use terrain::{BlockSampler, TerrainGenerator};
pub use voxels::block::block_side::BlockSide;
pub use voxels::block::block_type::BlockType;
pub use voxels::block::{BlockDef, BlockRegistry, BlockTypeSize};
pub use voxels::chunk::voxel_grid::VoxelGrid;
pub use voxels::chunk::{Chunk, ChunkCoord, ChunkState, CHUNK_HEIGHT, CHUNK_WIDTH};
pub use voxels::world::{
    World, VIEW_DISTANCE_IN_CHUNKS, WORLD_SIZE_IN_CHUNKS, WORLD_SIZE_IN_VOXELS,
};

/// Runs the headless streaming demo.
///
/// Builds the default world, places the observer at the spawn column, and
/// walks it to the world edge one step at a time, logging the active-chunk
/// count and renderer traffic along the way.
///
/// # Errors
/// Fails only on configuration errors, which abort generation immediately.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let world_start = std::time::Instant::now();
    let mut world = World::new(WorldConfig::default(), HeadlessRenderer::new())?;
    info!(
        "world ready in {:?}: {} chunks uploaded, {} KiB of buffers",
        world_start.elapsed(),
        world.sink().uploads().len(),
        world.sink().uploaded_bytes() / 1024
    );

    let mut pos = world.spawn_position();
    world.on_observer_moved(pos)?;

    // Walk east to the world edge, one quarter chunk per tick.
    while pos.x < WORLD_SIZE_IN_VOXELS as f32 {
        pos.x += CHUNK_WIDTH as f32 / 4.0;
        world.on_observer_moved(pos)?;
        info!(
            "observer at x={:.0}: chunk ({}, {}), {} active chunks",
            pos.x,
            world.observer_chunk().x,
            world.observer_chunk().z,
            world.active_chunks().len()
        );
    }

    info!(
        "walk complete: {} uploads, {} visibility toggles",
        world.sink().uploads().len(),
        world.sink().visibility_toggles()
    );

    Ok(())
}
