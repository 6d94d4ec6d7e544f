//! Vertex and index buffers of a chunk mesh.

use super::face::Face;
use crate::engine_state::rendering::Vertex;

/// Index pattern of one quad: two triangles over its four corners.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// A triangle mesh of a chunk's visible faces, in chunk-local space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Four vertices per quad
    pub vertices: Vec<Vertex>,
    /// Six indices per quad
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Appends one quad.
    ///
    /// The quad's indices are offset by the number of vertices already in
    /// the mesh, so each quad addresses only its own four vertices.
    pub fn push_face(&mut self, face: &Face) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&face.vertices());
        self.indices
            .extend(QUAD_INDICES.iter().map(|index| index + offset));
    }

    /// Number of quads in the mesh.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Whether the mesh has no quads.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
