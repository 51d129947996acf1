//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the unit offsets
//! used to find the neighboring cell across each face.
//!
//! The face order is a fixed enumeration shared by the geometry tables, the
//! texture tables, and the mesher. Changing it would silently desynchronize
//! all three, so every table in the crate is written in this order:
//! `[BACK, FRONT, TOP, BOTTOM, LEFT, RIGHT]`.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned the integer used to index the per-face geometry
/// and texture tables.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The back face (facing negative Z)
    BACK = 0,

    /// The front face (facing positive Z)
    FRONT = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns all six block faces in table order.
    ///
    /// The order is: `[BACK, FRONT, TOP, BOTTOM, LEFT, RIGHT]`.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::BACK,
            BlockSide::FRONT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// Returns the unit offset from a cell to its neighbor across this face.
    ///
    /// Adding this vector to a cell's coordinate yields the cell whose
    /// occupancy decides whether this face is culled.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_order_matches_table_indices() {
        for (i, side) in BlockSide::all().into_iter().enumerate() {
            assert_eq!(side as usize, i);
        }
    }

    #[test]
    fn neighbor_offsets_are_unit_vectors() {
        for side in BlockSide::all() {
            let o = side.neighbor_offset();
            assert_eq!(o.x.abs() + o.y.abs() + o.z.abs(), 1);
        }
    }

    #[test]
    fn opposite_faces_cancel() {
        let pairs = [
            (BlockSide::BACK, BlockSide::FRONT),
            (BlockSide::TOP, BlockSide::BOTTOM),
            (BlockSide::LEFT, BlockSide::RIGHT),
        ];
        for (a, b) in pairs {
            assert_eq!(a.neighbor_offset() + b.neighbor_offset(), Vector3::new(0, 0, 0));
        }
    }
}
