//! # Voxels Module
//!
//! Voxel data management: block definitions, per-chunk grids, and the
//! world-level chunk table with its streaming logic.

pub mod block;
pub mod chunk;
pub mod world;
