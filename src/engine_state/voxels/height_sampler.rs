//! # Height Sampler Module
//!
//! Terrain generation reads column heights from a [`HeightSampler`]. A
//! sampler maps a world column `(x, z)` to a height fraction in `[0, 1]` and
//! must be a pure function of its inputs, so regenerating a chunk always
//! yields the same blocks.

use noise::{NoiseFn, Perlin};

/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Deterministic column-height source for terrain generation.
pub trait HeightSampler {
    /// Height fraction of the column at `(world_x, world_z)`, in `[0, 1]`.
    fn sample(&self, world_x: f32, world_z: f32) -> f32;
}

impl<F> HeightSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, world_x: f32, world_z: f32) -> f32 {
        self(world_x, world_z)
    }
}

/// Rolling sine/cosine hills with a period of roughly 63 blocks.
///
/// `((sin(x * 0.1) * cos(z * 0.1)) + 1) * 0.5`
#[derive(Debug, Default, Clone, Copy)]
pub struct SineHeightSampler;

impl HeightSampler for SineHeightSampler {
    fn sample(&self, world_x: f32, world_z: f32) -> f32 {
        ((world_x * 0.1).sin() * (world_z * 0.1).cos() + 1.0) * 0.5
    }
}

/// Perlin-noise terrain.
///
/// Perlin output in `[-1, 1]` is remapped to `[0, 1]` and clamped, since
/// the noise crate can slightly overshoot its nominal range.
#[derive(Clone, Copy)]
pub struct PerlinHeightSampler {
    perlin: Perlin,
    scale: f64,
}

impl PerlinHeightSampler {
    /// Creates a sampler for the given seed and coordinate scale.
    pub fn new(seed: u32, scale: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            scale,
        }
    }

    /// The seed this sampler was built with.
    pub fn seed(&self) -> u32 {
        use noise::Seedable;
        self.perlin.seed()
    }
}

impl HeightSampler for PerlinHeightSampler {
    fn sample(&self, world_x: f32, world_z: f32) -> f32 {
        let value = self.perlin.get([
            world_x as f64 * self.scale,
            world_z as f64 * self.scale,
        ]);
        (((value + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
    }
}
