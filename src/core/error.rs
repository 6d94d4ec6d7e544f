//! Error types for the voxel world engine.
//!
//! World access, meshing and raycasting never fail; out-of-range and
//! unloaded positions read as air. Only loading configuration can.

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file is not valid JSON for `EngineConfig`.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A config field is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used by fallible engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
