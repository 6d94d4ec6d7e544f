//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the neighbour
//! offset each face looks through for face culling.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants follow the order in which the mesher emits quads:
/// [TOP, BOTTOM, RIGHT, LEFT, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The right face (facing positive X)
    RIGHT = 2,

    /// The left face (facing negative X)
    LEFT = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in meshing order.
    ///
    /// # Returns
    /// An array containing all `BlockSide` variants.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// The unit offset from a block to the neighbour that covers this face.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// Finds the side whose normal equals `normal`, if it is a unit axis vector.
    ///
    /// Raycast face deltas are converted with this; a zero or diagonal delta
    /// has no side.
    pub fn from_normal(normal: Vector3<i32>) -> Option<BlockSide> {
        BlockSide::all()
            .into_iter()
            .find(|side| side.normal() == normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normals_are_distinct_unit_axes() {
        let normals: Vec<Vector3<i32>> = BlockSide::all().iter().map(|s| s.normal()).collect();
        for (i, a) in normals.iter().enumerate() {
            assert_eq!(a.x.abs() + a.y.abs() + a.z.abs(), 1);
            for b in normals.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_normal_inverts_normal() {
        for side in BlockSide::all() {
            assert_eq!(BlockSide::from_normal(side.normal()), Some(side));
        }
        assert_eq!(BlockSide::from_normal(Vector3::new(0, 0, 0)), None);
        assert_eq!(BlockSide::from_normal(Vector3::new(1, 1, 0)), None);
    }
}
