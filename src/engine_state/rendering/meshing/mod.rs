//! Face-culled meshing of chunks.
//!
//! Every solid voxel is tested against its six neighbours and a quad is
//! emitted for each side that borders air. Neighbours are resolved in world
//! block space through a [`BlockAccess`], so voxels on a chunk border are
//! culled against the adjacent chunk. An unloaded neighbour reads as air and
//! its border faces are kept.
//!
//! Faces are emitted per voxel; coplanar quads are never merged.

mod mesh;

pub use mesh::{Face, Mesh};

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, is_solid},
    chunk::Chunk,
    coords::local_to_world,
    world::BlockAccess,
};

/// Builds the face-culled surface mesh of `chunk`.
///
/// Quads are emitted voxel by voxel in storage order, and for each voxel in
/// [`BlockSide::all`] order. Vertex positions are chunk-local.
pub fn mesh_chunk(chunk: &Chunk, world: &dyn BlockAccess) -> Mesh {
    let mut mesh = Mesh::new();

    for (local, _block) in chunk.solid_blocks() {
        let world_pos = local_to_world(chunk.position, local);
        for side in BlockSide::all() {
            if !is_solid(world.get_block(world_pos + side.normal())) {
                mesh.push_face(&Face::new(local, side));
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::{BlockTypeSize, AIR, SOLID};
    use crate::engine_state::voxels::coords::ChunkCoord;
    use cgmath::{EuclideanSpace, Point3};

    /// No other chunks are loaded.
    struct Void;

    impl BlockAccess for Void {
        fn get_block(&self, _pos: Point3<i32>) -> BlockTypeSize {
            AIR
        }
    }

    /// Everything outside the chunk under test is solid.
    struct Buried<'a>(&'a Chunk);

    impl BlockAccess for Buried<'_> {
        fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize {
            let origin = self.0.position.origin();
            let local = pos - origin.to_vec();
            if Chunk::in_bounds(local.x, local.y, local.z) {
                self.0.get_block_at(local)
            } else {
                SOLID
            }
        }
    }

    /// The chunk under test reads through itself.
    struct Alone<'a>(&'a Chunk);

    impl BlockAccess for Alone<'_> {
        fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize {
            let local = pos - self.0.position.origin().to_vec();
            self.0.get_block_at(local)
        }
    }

    #[test]
    fn test_isolated_voxel_has_six_quads() {
        let mut chunk = Chunk::empty(ChunkCoord::new(0, 0));
        chunk.set_block(5, 5, 5, SOLID);

        let mesh = mesh_chunk(&chunk, &Alone(&chunk));
        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_buried_voxel_has_no_quads() {
        let chunk = Chunk::solid(ChunkCoord::new(0, 0));
        let mesh = mesh_chunk(&chunk, &Buried(&chunk));
        assert!(mesh.is_empty());
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn test_adjacent_voxels_share_no_face() {
        let mut chunk = Chunk::empty(ChunkCoord::new(0, 0));
        chunk.set_block(5, 5, 5, SOLID);
        chunk.set_block(6, 5, 5, SOLID);

        let mesh = mesh_chunk(&chunk, &Alone(&chunk));
        assert_eq!(mesh.quad_count(), 10);
    }

    #[test]
    fn test_unloaded_neighbours_read_as_air() {
        let chunk = Chunk::solid(ChunkCoord::new(0, 0));
        let mesh = mesh_chunk(&chunk, &Void);
        assert_eq!(mesh.quad_count(), Chunk::solid_blocks(&chunk).count() * 6);
    }

    #[test]
    fn test_solid_chunk_alone_shows_only_its_hull() {
        let chunk = Chunk::solid(ChunkCoord::new(-1, 2));
        let mesh = mesh_chunk(&chunk, &Alone(&chunk));
        // Two 16x16 caps plus four 16x128 walls.
        assert_eq!(mesh.quad_count(), 2 * 16 * 16 + 4 * 16 * 128);
    }

    #[test]
    fn test_vertices_are_chunk_local() {
        let mut chunk = Chunk::empty(ChunkCoord::new(4, -4));
        chunk.set_block(0, 0, 0, SOLID);
        let mesh = mesh_chunk(&chunk, &Void);
        for vertex in &mesh.vertices {
            for value in vertex.position {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}
