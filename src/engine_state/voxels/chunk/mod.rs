//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size column of voxels
//! that is the unit of generation, storage and meshing.
//!
//! ## Storage
//!
//! Blocks are stored in a flat vector, one `BlockTypeSize` per voxel, using a
//! Y-major layout:
//!
//! `index = x + z * CHUNK_WIDTH + y * CHUNK_WIDTH * CHUNK_DEPTH`
//!
//! so a horizontal slice of the chunk is contiguous in memory.
//!
//! ## Derived mesh
//!
//! Each chunk also owns the surface mesh built from its blocks and the
//! backend handle of its last upload. `mesh_dirty` is set whenever blocks
//! change and cleared only by installing a freshly built mesh.

use cgmath::Point3;

use crate::engine_state::rendering::{meshing, Mesh, MeshHandle};

use super::block::{BlockTypeSize, AIR};
use super::coords::ChunkCoord;
use super::world::BlockAccess;

mod chunk_creation;
pub mod chunk_iteration;

/// The extent of a chunk along X, in blocks.
pub const CHUNK_WIDTH: i32 = 16;
/// The extent of a chunk along Y, in blocks. Also the terrain height scale.
pub const CHUNK_HEIGHT: i32 = 128;
/// The extent of a chunk along Z, in blocks.
pub const CHUNK_DEPTH: i32 = 16;
/// The number of blocks in one horizontal slice of a chunk.
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_WIDTH * CHUNK_DEPTH;
/// The total number of blocks in a chunk.
pub const CHUNK_SIZE: usize = (CHUNK_PLANE_SIZE * CHUNK_HEIGHT) as usize;

/// Represents a 16x128x16 column of voxel blocks in the world.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: ChunkCoord,

    /// Block ids in Y-major order, `CHUNK_SIZE` entries.
    blocks: Vec<BlockTypeSize>,

    /// Surface mesh from the last build, in chunk-local space.
    mesh: Mesh,

    /// Backend handle of the uploaded mesh, if one has been uploaded.
    mesh_handle: Option<MeshHandle>,

    /// Whether blocks changed since the last mesh build.
    mesh_dirty: bool,
}

impl Chunk {
    /// Wraps an already-filled block array. The chunk starts dirty.
    fn from_blocks(position: ChunkCoord, blocks: Vec<BlockTypeSize>) -> Self {
        debug_assert_eq!(blocks.len(), CHUNK_SIZE);
        Chunk {
            position,
            blocks,
            mesh: Mesh::new(),
            mesh_handle: None,
            mesh_dirty: true,
        }
    }

    /// Whether a local coordinate lies inside the chunk.
    #[inline]
    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        (0..CHUNK_WIDTH).contains(&x)
            && (0..CHUNK_HEIGHT).contains(&y)
            && (0..CHUNK_DEPTH).contains(&z)
    }

    /// Flat storage index of an in-bounds local coordinate.
    #[inline]
    fn index(x: i32, y: i32, z: i32) -> usize {
        (x + z * CHUNK_WIDTH + y * CHUNK_PLANE_SIZE) as usize
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// The stored block id, or `AIR` if any coordinate is outside the chunk.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockTypeSize {
        if !Self::in_bounds(x, y, z) {
            return AIR;
        }
        self.blocks[Self::index(x, y, z)]
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// Out-of-range coordinates are ignored. Any in-range write marks the
    /// mesh dirty, even if the id is unchanged.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockTypeSize) {
        if !Self::in_bounds(x, y, z) {
            return;
        }
        self.blocks[Self::index(x, y, z)] = block;
        self.mesh_dirty = true;
    }

    /// Convenience wrapper around [`Chunk::get_block`] for a point.
    pub fn get_block_at(&self, pos: Point3<i32>) -> BlockTypeSize {
        self.get_block(pos.x, pos.y, pos.z)
    }

    /// The raw block array in storage order.
    pub fn blocks(&self) -> &[BlockTypeSize] {
        &self.blocks
    }

    /// Whether the stored mesh is out of date with the blocks.
    pub fn is_mesh_dirty(&self) -> bool {
        self.mesh_dirty
    }

    /// Forces a rebuild on the next render, for edits next to this chunk.
    pub fn mark_mesh_dirty(&mut self) {
        self.mesh_dirty = true;
    }

    /// The mesh from the last build.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The backend handle of the last uploaded mesh.
    pub fn mesh_handle(&self) -> Option<MeshHandle> {
        self.mesh_handle
    }

    /// Builds a face-culled mesh of this chunk.
    ///
    /// Neighbours are looked up through `world` in world-block space, so
    /// faces on the chunk border are culled against adjacent chunks.
    /// This does not modify the chunk; install the result with
    /// [`Chunk::install_mesh`].
    pub fn build_mesh(&self, world: &dyn BlockAccess) -> Mesh {
        meshing::mesh_chunk(self, world)
    }

    /// Stores a freshly built mesh and its backend handle and clears the
    /// dirty flag.
    ///
    /// # Returns
    /// The handle of the mesh being replaced, so the caller can release it.
    pub fn install_mesh(&mut self, mesh: Mesh, handle: MeshHandle) -> Option<MeshHandle> {
        self.mesh = mesh;
        self.mesh_dirty = false;
        self.mesh_handle.replace(handle)
    }
}
