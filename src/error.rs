//! # Error Module
//!
//! Defines the error taxonomy for world generation and meshing.
//!
//! There are only two kinds of failure in this engine:
//!
//! * **Configuration errors** - an unknown block-type id, an out-of-range
//!   face index, or a malformed definition table. These are fatal: they mean
//!   the static configuration is inconsistent, and world generation aborts
//!   with a descriptive message.
//! * **Bounds violations** - coordinate queries outside the world or a
//!   chunk. These are *not* errors; they are answered with a sentinel (air,
//!   or "skip this chunk") and never surface to the caller.
//!
//! Generation is pure and deterministic, so there are no transient or
//! retryable failures anywhere in the core.

use thiserror::Error;

/// A fatal inconsistency in the static world configuration.
///
/// Any of these aborts world generation; none of them are recoverable
/// per-voxel conditions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A block-type id was referenced that has no entry in the block table.
    #[error("unknown block type id {0} (no entry in the block table)")]
    UnknownBlockType(u8),

    /// A face index outside the valid range `0..6` was used for a texture
    /// lookup.
    #[error("invalid face index {0}, expected a value in 0..6")]
    InvalidFaceIndex(usize),

    /// A block definition assigned a face a texture id outside the atlas.
    #[error("texture id {0} is outside the {1}x{1} atlas")]
    TextureOutOfAtlas(usize, usize),

    /// A loaded block table names a block this engine does not know.
    #[error("unknown block name \"{0}\" in block table")]
    UnknownBlockName(String),

    /// The block table marks id 0 as solid, violating the air invariant.
    #[error("block id 0 must be air (non-solid), but the table marks it solid")]
    SolidAir,

    /// A definition table could not be parsed from JSON.
    #[error("failed to parse definition table: {0}")]
    Parse(#[from] serde_json::Error),
}
