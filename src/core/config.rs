//! # Engine Configuration
//!
//! Tunables of the engine and the headless driver, read from a JSON file.
//! Every field has a default, so a partial file (or `{}`) is valid:
//!
//! ```json
//! {
//!     "render_distance": 3,
//!     "terrain": { "kind": "perlin", "seed": 42 },
//!     "place_block": "WOOD"
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::height_sampler::{
    HeightSampler, PerlinHeightSampler, SineHeightSampler, PERLIN_SCALE_FACTOR,
};

/// Which height sampler fills new chunks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerrainConfig {
    /// Rolling sine/cosine hills.
    Sine,
    /// Perlin noise.
    Perlin {
        /// Noise seed. A missing or `null` seed picks a random one.
        #[serde(default)]
        seed: Option<u32>,
        /// Multiplier applied to world coordinates before sampling.
        #[serde(default = "default_perlin_scale")]
        scale: f64,
    },
}

fn default_perlin_scale() -> f64 {
    PERLIN_SCALE_FACTOR
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig::Sine
    }
}

impl TerrainConfig {
    /// Builds the sampler this configuration describes.
    pub fn build_sampler(&self) -> Box<dyn HeightSampler> {
        match *self {
            TerrainConfig::Sine => Box::new(SineHeightSampler),
            TerrainConfig::Perlin { seed, scale } => {
                let seed = seed.unwrap_or_else(|| fastrand::u32(..));
                info!("Perlin terrain with seed {}", seed);
                Box::new(PerlinHeightSampler::new(seed, scale))
            }
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chunks loaded in every direction around the viewer's chunk.
    pub render_distance: i32,
    /// Maximum distance of break and place rays, in blocks.
    pub reach_distance: f32,
    /// Terrain generator.
    pub terrain: TerrainConfig,
    /// Block written by the place action.
    pub place_block: BlockType,
    /// Seconds between frame statistics reports.
    pub stats_interval: f64,
    /// Camera movement speed, in blocks per second.
    pub camera_speed: f32,
    /// Camera rotation per unit of look delta, in radians.
    pub camera_sensitivity: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_distance: 2,
            reach_distance: 8.0,
            terrain: TerrainConfig::default(),
            place_block: BlockType::DIRT,
            stats_interval: 1.0,
            camera_speed: 10.0,
            camera_sensitivity: 0.005,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.render_distance < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "render_distance must be non-negative, got {}",
                self.render_distance
            )));
        }
        if !(self.reach_distance > 0.0 && self.reach_distance.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "reach_distance must be positive, got {}",
                self.reach_distance
            )));
        }
        if !self.place_block.is_solid() {
            return Err(EngineError::InvalidConfig(
                "place_block must be a solid block".to_string(),
            ));
        }
        if !(self.stats_interval > 0.0 && self.stats_interval.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "stats_interval must be positive, got {}",
                self.stats_interval
            )));
        }
        if !(self.camera_speed >= 0.0 && self.camera_sensitivity >= 0.0) {
            return Err(EngineError::InvalidConfig(
                "camera_speed and camera_sensitivity must be non-negative".to_string(),
            ));
        }
        if let TerrainConfig::Perlin { scale, .. } = self.terrain {
            if !(scale > 0.0 && scale.is_finite()) {
                return Err(EngineError::InvalidConfig(format!(
                    "perlin scale must be positive, got {}",
                    scale
                )));
            }
        }
        Ok(())
    }

    /// The render distance as the radius `World::update` takes.
    pub fn render_radius(&self) -> u32 {
        self.render_distance.max(0) as u32
    }
}
