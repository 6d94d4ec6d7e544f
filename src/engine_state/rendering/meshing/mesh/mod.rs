//! Mesh data structures for chunk surfaces.
//!
//! A [`Face`] is one unit quad on one side of a voxel; a [`Mesh`] collects
//! faces into the vertex and index buffers handed to the backend.

mod face;
#[allow(clippy::module_inception)]
mod mesh;

pub use face::Face;
pub use mesh::Mesh;
