//! Rendering seam for the voxel engine.
//!
//! The engine never talks to a GPU API directly. Chunk meshes are handed to a
//! [`RenderBackend`], which uploads them however it likes and returns an
//! opaque [`MeshHandle`]; every frame the world asks the backend to draw each
//! handle with the chunk's model matrix.
//!
//! [`RecordingBackend`] is an in-memory backend that records every call. The
//! headless driver and the tests render through it.

use cgmath::Matrix4;

pub mod meshing;
mod recording_backend;
mod vertex;

// Re-export commonly used types
pub use meshing::Mesh;
pub use recording_backend::RecordingBackend;
pub use vertex::Vertex;

/// Opaque identifier for a mesh uploaded to a [`RenderBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

/// The presentation layer's side of the render contract.
pub trait RenderBackend {
    /// Uploads a chunk mesh and returns a handle for drawing it.
    ///
    /// Called once per rebuild of a dirty chunk. Empty meshes are uploaded
    /// too, so every loaded chunk has a handle after its first render pass.
    fn upload_mesh(&mut self, vertices: &[Vertex], indices: &[u32]) -> MeshHandle;

    /// Frees a mesh that has been superseded by a newer upload.
    fn release_mesh(&mut self, _handle: MeshHandle) {}

    /// Draws an uploaded mesh with the given model matrix.
    fn draw(&mut self, handle: MeshHandle, model: Matrix4<f32>);
}
