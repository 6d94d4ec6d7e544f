//! An in-memory [`RenderBackend`] that records every call made to it.

use cgmath::Matrix4;

use super::{MeshHandle, RenderBackend, Vertex};

/// A render backend that keeps the calls it receives instead of drawing.
///
/// Handles are issued sequentially starting at 1. Only the most recent
/// upload's buffers are kept.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_handle: u64,
    uploads: usize,
    last_vertices: Vec<Vertex>,
    last_indices: Vec<u32>,
    released: Vec<MeshHandle>,
    draws: Vec<(MeshHandle, Matrix4<f32>)>,
}

impl RecordingBackend {
    /// Number of meshes uploaded so far.
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    /// Number of draw calls so far, across all frames.
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    /// Number of handles released so far.
    pub fn released_count(&self) -> usize {
        self.released.len()
    }

    /// Every draw call in order.
    pub fn draws(&self) -> &[(MeshHandle, Matrix4<f32>)] {
        &self.draws
    }

    /// Every released handle in order.
    pub fn released(&self) -> &[MeshHandle] {
        &self.released
    }

    /// Vertex buffer of the most recent upload.
    pub fn last_vertices(&self) -> &[Vertex] {
        &self.last_vertices
    }

    /// Index buffer of the most recent upload.
    pub fn last_indices(&self) -> &[u32] {
        &self.last_indices
    }

    /// Forgets recorded draw calls, keeping upload and release history.
    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_mesh(&mut self, vertices: &[Vertex], indices: &[u32]) -> MeshHandle {
        self.uploads += 1;
        self.next_handle += 1;
        self.last_vertices = vertices.to_vec();
        self.last_indices = indices.to_vec();
        MeshHandle(self.next_handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) {
        self.released.push(handle);
    }

    fn draw(&mut self, handle: MeshHandle, model: Matrix4<f32>) {
        self.draws.push((handle, model));
    }
}
