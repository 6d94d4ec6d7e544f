//! # Raycast Module
//!
//! Fixed-step ray marching over the world's voxel field, used to pick the
//! block a break or place action targets.
//!
//! The ray is sampled every [`RAYCAST_STEP`] world units. Each sample is
//! floored to a block and the first solid block is the hit. The step is
//! coarse next to the block size, so a ray that grazes an edge or corner
//! can report a face delta that touches two axes, and a ray can pass
//! through a block whose intersection with it is shorter than one step.

use cgmath::{InnerSpace, Point3, Vector3};

use super::block::{block_side::BlockSide, is_solid};
use super::coords::block_containing;
use super::world::BlockAccess;

/// Distance between consecutive ray samples, in world units.
pub const RAYCAST_STEP: f32 = 0.05;

/// Longest distance a ray is marched, whatever the caller asks for.
pub const MAX_RAYCAST_DISTANCE: f32 = 1024.0;

/// The block a ray hit and the face it entered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastResult {
    /// World position of the first solid block along the ray.
    pub block_pos: Point3<i32>,
    /// Delta from the hit block to the block of the previous sample,
    /// i.e. pointing back toward the ray origin. A unit axis vector except
    /// for edge and corner crossings.
    pub face: Vector3<i32>,
}

impl RaycastResult {
    /// The block on the struck side of the hit, where a placed block goes.
    pub fn adjacent(&self) -> Point3<i32> {
        self.block_pos + self.face
    }

    /// The struck face, if `face` is a unit axis vector.
    pub fn side(&self) -> Option<BlockSide> {
        BlockSide::from_normal(self.face)
    }
}

/// Casts a ray through `world` and returns the first solid block hit.
///
/// Samples are taken at distances `0, RAYCAST_STEP, 2 * RAYCAST_STEP, ...`
/// while the distance is below `max_distance`, which is capped at
/// [`MAX_RAYCAST_DISTANCE`]. `direction` is normalized here; a zero or
/// non-finite direction never hits anything.
///
/// # Returns
/// `None` if no solid block was sampled before `max_distance`.
pub fn raycast(
    world: &dyn BlockAccess,
    start: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RaycastResult> {
    let length = direction.magnitude();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    let direction = direction / length;
    if !(max_distance > 0.0) {
        return None;
    }

    let max_distance = max_distance.min(MAX_RAYCAST_DISTANCE);
    let max_steps = (max_distance / RAYCAST_STEP).ceil() as u32 + 1;

    for step in 0..max_steps {
        let distance = step as f32 * RAYCAST_STEP;
        if !(distance < max_distance) {
            return None;
        }

        let block_pos = block_containing(start + direction * distance);
        if is_solid(world.get_block(block_pos)) {
            let previous = block_containing(start + direction * (distance - RAYCAST_STEP));
            return Some(RaycastResult {
                block_pos,
                face: previous - block_pos,
            });
        }
    }
    None
}
