//! # Block Type Module
//!
//! This module defines the named block types of the voxel world and the
//! conversion between them and the raw ids stored in chunks.

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;

/// Enumerates the named block types in the voxel world.
///
/// The discriminant of each variant is the id stored in a chunk. The
/// `FromPrimitive` derive allows conversion back from raw ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent.
    AIR = 0,

    /// A basic dirt block. Terrain generation fills columns with it.
    DIRT = 1,

    /// A grass block.
    GRASS = 2,

    /// A wooden block.
    WOOD = 3,

    /// A plain white block, often used for testing and markers.
    WHITE = 4,
}

impl BlockType {
    /// Converts a raw voxel id to a `BlockType`.
    ///
    /// # Returns
    /// `None` for ids that have no named block type.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(id)
    }

    /// The raw id written into chunk storage for this type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether this block type occupies its cell.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::DIRT
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_the_catalogue() {
        for block_type in [
            BlockType::AIR,
            BlockType::DIRT,
            BlockType::GRASS,
            BlockType::WOOD,
            BlockType::WHITE,
        ] {
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
    }

    #[test]
    fn test_unknown_ids_have_no_name() {
        assert_eq!(BlockType::from_id(5), None);
        assert_eq!(BlockType::from_id(255), None);
    }

    #[test]
    fn test_only_air_is_not_solid() {
        assert!(!BlockType::AIR.is_solid());
        assert!(BlockType::WOOD.is_solid());
    }

    #[test]
    fn test_deserializes_from_variant_name() {
        let block_type: BlockType = serde_json::from_str("\"GRASS\"").unwrap();
        assert_eq!(block_type, BlockType::GRASS);
    }
}
