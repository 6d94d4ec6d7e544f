//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid blocks of a chunk. Air is
//! skipped, so the mesher only visits voxels that can produce faces.

use cgmath::Point3;

use crate::engine_state::voxels::block::{is_solid, BlockTypeSize};

use super::{Chunk, CHUNK_PLANE_SIZE, CHUNK_WIDTH};

/// An iterator over all non-air blocks in a chunk, in storage order
/// (X fastest, then Z, then Y).
///
/// Yields the chunk-local position of each solid block together with its id.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next position in the block array
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first block.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }

    /// Recovers a local position from a flat storage offset.
    fn position_of(offset: usize) -> Point3<i32> {
        let offset = offset as i32;
        let y = offset / CHUNK_PLANE_SIZE;
        let in_plane = offset % CHUNK_PLANE_SIZE;
        Point3::new(in_plane % CHUNK_WIDTH, y, in_plane / CHUNK_WIDTH)
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, BlockTypeSize);

    fn next(&mut self) -> Option<Self::Item> {
        let blocks = self.chunk_ref.blocks();
        while self.current_offset < blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let block = blocks[offset];
            if is_solid(block) {
                return Some((Self::position_of(offset), block));
            }
        }
        None
    }
}

impl Chunk {
    /// Iterates over the solid blocks of this chunk.
    pub fn solid_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }
}
