//! # Core Module
//!
//! Ambient services shared by the engine and the driver.
//!
//! ## Key Components
//! - `config`: `EngineConfig`, loaded from JSON and validated
//! - `error`: `EngineError`, the error type of every fallible operation
//! - `logging`: `env_logger` setup

pub mod config;
pub mod error;
pub mod logging;

// Re-export types for easier access
pub use config::{EngineConfig, TerrainConfig};
pub use error::EngineError;
