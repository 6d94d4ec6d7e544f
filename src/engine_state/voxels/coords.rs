//! # Coordinate Module
//!
//! Conversions between world block coordinates, chunk coordinates and
//! chunk-local coordinates.
//!
//! Chunking is columnar: a chunk spans the full world height, so only the
//! X and Z axes are split. Block-to-chunk conversion is a floor division, so
//! world block `-1` lives in chunk `-1` at local coordinate `CHUNK_WIDTH - 1`.

use std::fmt;

use cgmath::{Point3, Vector3};

use super::chunk::{CHUNK_DEPTH, CHUNK_WIDTH};

/// Key of a chunk in the chunk grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// Chunk index along world X.
    pub x: i32,
    /// Chunk index along world Z.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a chunk coordinate.
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk that owns the world block column `(block_x, block_z)`.
    #[inline]
    pub fn from_block_pos(block_x: i32, block_z: i32) -> Self {
        Self {
            x: floor_div(block_x, CHUNK_WIDTH),
            z: floor_div(block_z, CHUNK_DEPTH),
        }
    }

    /// The chunk containing a continuous world position.
    #[inline]
    pub fn from_world_pos(world_x: f32, world_z: f32) -> Self {
        Self::from_block_pos(world_x.floor() as i32, world_z.floor() as i32)
    }

    /// World block coordinate of this chunk's local origin `(0, 0, 0)`.
    #[inline]
    pub fn origin(self) -> Point3<i32> {
        Point3::new(self.x * CHUNK_WIDTH, 0, self.z * CHUNK_DEPTH)
    }

    /// Translation applied to this chunk's mesh when drawing it.
    #[inline]
    pub fn world_offset(self) -> Vector3<f32> {
        Vector3::new(
            (self.x * CHUNK_WIDTH) as f32,
            0.0,
            (self.z * CHUNK_DEPTH) as f32,
        )
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Floor division for a positive divisor.
///
/// Written out as `bx >= 0 ? bx / d : (bx - (d - 1)) / d`, which equals
/// `i32::div_euclid` for positive `d`.
#[inline]
pub fn floor_div(value: i32, divisor: i32) -> i32 {
    if value >= 0 {
        value / divisor
    } else {
        (value - (divisor - 1)) / divisor
    }
}

/// Splits a world block position into its chunk and the chunk-local position.
///
/// The local Y coordinate is the world Y coordinate unchanged; range checks
/// against the chunk height are left to the chunk.
#[inline]
pub fn world_to_local(pos: Point3<i32>) -> (ChunkCoord, Point3<i32>) {
    let coord = ChunkCoord::from_block_pos(pos.x, pos.z);
    let origin = coord.origin();
    (
        coord,
        Point3::new(pos.x - origin.x, pos.y, pos.z - origin.z),
    )
}

/// Inverse of [`world_to_local`].
#[inline]
pub fn local_to_world(coord: ChunkCoord, local: Point3<i32>) -> Point3<i32> {
    let origin = coord.origin();
    Point3::new(origin.x + local.x, local.y, origin.z + local.z)
}

/// Floors a continuous position to the block that contains it.
#[inline]
pub fn block_containing(pos: Point3<f32>) -> Point3<i32> {
    Point3::new(
        pos.x.floor() as i32,
        pos.y.floor() as i32,
        pos.z.floor() as i32,
    )
}
