//! # Block Module
//!
//! This module provides the block-related definitions for the voxel engine:
//! the raw voxel id stored in chunks, the named block catalogue and the six
//! block faces used by the mesher.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent a voxel in memory.
///
/// `0` is air, any other value is a solid block. Ids without a `BlockType`
/// name are still valid solid voxels.
pub type BlockTypeSize = u8;

/// The id stored for empty space.
pub const AIR: BlockTypeSize = BlockType::AIR as BlockTypeSize;

/// The id used by terrain generation for every filled voxel.
pub const SOLID: BlockTypeSize = BlockType::DIRT as BlockTypeSize;

/// Returns `true` for any non-air voxel id.
#[inline]
pub fn is_solid(block: BlockTypeSize) -> bool {
    block != AIR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_the_only_non_solid_id() {
        assert!(!is_solid(AIR));
        assert!(is_solid(SOLID));
        assert!(is_solid(200));
    }
}
