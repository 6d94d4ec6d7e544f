//! # Chunk Creation Module
//!
//! Constructors for chunks. Terrain chunks fill each column from the bottom
//! up to the height reported by a [`HeightSampler`]; the remaining
//! constructors produce uniform chunks for tests and tooling.
//!
//! Generation happens once, synchronously, inside the constructor. The
//! sampler is a pure function of the world column, so generating the same
//! chunk coordinate twice gives bit-identical block arrays.

use crate::engine_state::voxels::block::{BlockTypeSize, AIR, SOLID};
use crate::engine_state::voxels::coords::ChunkCoord;
use crate::engine_state::voxels::height_sampler::HeightSampler;

use super::{Chunk, CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_PLANE_SIZE, CHUNK_SIZE, CHUNK_WIDTH};

/// A builder that fills a chunk's block array column by column.
struct ChunkColumnBuilder {
    position: ChunkCoord,
    blocks: Vec<BlockTypeSize>,
}

impl ChunkColumnBuilder {
    fn new(position: ChunkCoord) -> Self {
        ChunkColumnBuilder {
            position,
            blocks: vec![AIR; CHUNK_SIZE],
        }
    }

    /// Fills `0 <= y < height` of column `(x, z)` with `block`.
    ///
    /// `height` is compared as a float, so a column of height `63.7` gets
    /// 64 blocks (`y = 0..=63`). Heights above the chunk are clipped.
    fn fill_column(&mut self, x: i32, z: i32, height: f32, block: BlockTypeSize) {
        let mut y = 0;
        while y < CHUNK_HEIGHT && (y as f32) < height {
            self.blocks[(x + z * CHUNK_WIDTH + y * CHUNK_PLANE_SIZE) as usize] = block;
            y += 1;
        }
    }

    fn return_chunk(self) -> Chunk {
        Chunk::from_blocks(self.position, self.blocks)
    }
}

impl Chunk {
    /// Generates terrain for the chunk at `position`.
    ///
    /// For every column the sampler is evaluated at the world column
    /// `(position.x * CHUNK_WIDTH + x, position.z * CHUNK_DEPTH + z)` and the
    /// resulting fraction is scaled by `CHUNK_HEIGHT`.
    pub fn generate(position: ChunkCoord, sampler: &dyn HeightSampler) -> Self {
        let mut builder = ChunkColumnBuilder::new(position);

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_DEPTH {
                let world_x = position.x * CHUNK_WIDTH + x;
                let world_z = position.z * CHUNK_DEPTH + z;
                let height = sampler.sample(world_x as f32, world_z as f32) * CHUNK_HEIGHT as f32;
                builder.fill_column(x, z, height, SOLID);
            }
        }

        builder.return_chunk()
    }

    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: ChunkCoord) -> Self {
        ChunkColumnBuilder::new(position).return_chunk()
    }

    /// Creates a new chunk filled with solid blocks.
    pub fn solid(position: ChunkCoord) -> Self {
        Chunk::from_blocks(position, vec![SOLID; CHUNK_SIZE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::height_sampler::SineHeightSampler;

    #[test]
    fn test_sine_terrain_column_at_origin() {
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), &SineHeightSampler);
        assert_eq!(chunk.get_block(0, 63, 0), SOLID);
        assert_eq!(chunk.get_block(0, 64, 0), AIR);
        assert_eq!(chunk.get_block(0, 0, 0), SOLID);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let coord = ChunkCoord::new(-3, 5);
        let a = Chunk::generate(coord, &SineHeightSampler);
        let b = Chunk::generate(coord, &SineHeightSampler);
        assert_eq!(a.blocks(), b.blocks());
    }

    #[test]
    fn test_generation_samples_world_columns() {
        // Sampler that only reports height at world column (-1, -1).
        let spike = |x: f32, z: f32| if x == -1.0 && z == -1.0 { 0.5 } else { 0.0 };
        let chunk = Chunk::generate(ChunkCoord::new(-1, -1), &spike);
        assert_eq!(chunk.get_block(15, 63, 15), SOLID);
        assert_eq!(chunk.get_block(15, 64, 15), AIR);
        assert_eq!(chunk.get_block(0, 0, 0), AIR);
        assert_eq!(chunk.blocks().iter().filter(|b| **b != AIR).count(), 64);
    }

    #[test]
    fn test_fractional_heights_round_up_to_whole_blocks() {
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), &|_x: f32, _z: f32| 10.5 / 128.0);
        assert_eq!(chunk.get_block(4, 10, 4), SOLID);
        assert_eq!(chunk.get_block(4, 11, 4), AIR);
    }

    #[test]
    fn test_heights_are_clipped_to_the_chunk() {
        let chunk = Chunk::generate(ChunkCoord::new(2, 2), &|_x: f32, _z: f32| 2.0);
        assert!(chunk.blocks().iter().all(|b| *b == SOLID));

        let flat = Chunk::generate(ChunkCoord::new(2, 2), &|_x: f32, _z: f32| 0.0);
        assert!(flat.blocks().iter().all(|b| *b == AIR));
    }
}
