use cgmath::Point3;

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::block_side::BlockSide;

/// Corner offsets of each side's quad inside the unit cell, indexed by
/// `BlockSide as usize`. Corners wind counter-clockwise seen from outside.
const CORNERS: [[[f32; 3]; 4]; 6] = [
    // TOP
    [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
    // BOTTOM
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
    // RIGHT
    [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    // LEFT
    [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
    // FRONT
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    // BACK
    [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
];

/// Texture coordinates of each side's corners, indexed like `CORNERS`.
const TEX_COORDS: [[[f32; 2]; 4]; 6] = [
    [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
];

/// Represents a single quad face of a voxel in the mesh.
///
/// The voxel at local position `p` occupies the cell `[p, p + 1)` on every
/// axis, so its faces lie on the cell boundary. This matches how world
/// positions are floored to blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Chunk-local position of the voxel the face belongs to
    pub position: Point3<i32>,
    /// Which side of the voxel this face covers
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the voxel at `position`.
    pub fn new(position: Point3<i32>, block_side: BlockSide) -> Self {
        Face {
            position,
            block_side,
        }
    }

    /// The four corner vertices of this face, in winding order.
    pub fn vertices(&self) -> [Vertex; 4] {
        let side = self.block_side as usize;
        let origin = [
            self.position.x as f32,
            self.position.y as f32,
            self.position.z as f32,
        ];

        std::array::from_fn(|corner| {
            let offset = CORNERS[side][corner];
            Vertex::new(
                [
                    origin[0] + offset[0],
                    origin[1] + offset[1],
                    origin[2] + offset[2],
                ],
                TEX_COORDS[side][corner],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    fn corner(v: &Vertex) -> Vector3<f32> {
        Vector3::new(v.position[0], v.position[1], v.position[2])
    }

    #[test]
    fn test_winding_faces_outward() {
        for side in BlockSide::all() {
            let vertices = Face::new(Point3::new(0, 0, 0), side).vertices();
            let a = corner(&vertices[1]) - corner(&vertices[0]);
            let b = corner(&vertices[2]) - corner(&vertices[0]);
            let normal = side.normal().cast::<f32>().unwrap_or(Vector3::new(0.0, 0.0, 0.0));
            assert!(a.cross(b).normalize().dot(normal) > 0.99, "{:?}", side);
        }
    }

    #[test]
    fn test_faces_lie_on_the_cell_boundary() {
        let position = Point3::new(3, 7, 15);
        for side in BlockSide::all() {
            let normal = side.normal();
            for vertex in Face::new(position, side).vertices() {
                for axis in 0..3 {
                    let low = position[axis] as f32;
                    let value = vertex.position[axis];
                    if normal[axis] > 0 {
                        assert_eq!(value, low + 1.0);
                    } else if normal[axis] < 0 {
                        assert_eq!(value, low);
                    } else {
                        assert!(value == low || value == low + 1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_texture_coordinates_cover_the_unit_square() {
        for side in BlockSide::all() {
            let mut uvs: Vec<[f32; 2]> = Face::new(Point3::new(9, 9, 9), side)
                .vertices()
                .iter()
                .map(|v| v.tex_coords)
                .collect();
            uvs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            assert_eq!(uvs, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
        }
    }
}
