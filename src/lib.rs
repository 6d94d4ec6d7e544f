#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A minimal voxel-world engine: a sparse grid of 16x128x16 block chunks
//! filled from a height function, face-culled surface meshes handed to a
//! pluggable render backend, and fixed-step raycasting for breaking and
//! placing blocks.
//!
//! ## Key Modules
//!
//! * `application_state` - Per-frame input and the headless driver
//! * `core` - Configuration, errors and logging
//! * `engine_state` - The world, meshing, camera and periodic tasks
//!
//! ## Architecture
//!
//! The engine is single-threaded and synchronous. Each frame the camera
//! moves, edits are applied, chunks around the camera are generated, dirty
//! chunks are remeshed and every chunk is drawn through a
//! [`RenderBackend`](engine_state::rendering::RenderBackend). Windowing and
//! GPU work belong to the backend, so the engine runs unchanged in tests
//! and headless.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_world::run();
//! }
//! ```

use log::info;

pub mod application_state;
pub mod core;
pub mod engine_state;

/// Runs a headless session.
///
/// The first command-line argument, if any, is the path of a JSON
/// configuration file. Logging goes to stdout and honours `RUST_LOG`.
pub fn run() {
    crate::core::logging::init();
    info!("Logger initialized");

    let config_path = std::env::args().nth(1);
    let config = application_state::load_config(config_path.as_deref());
    application_state::run_headless(config, application_state::DEFAULT_FRAMES);
}
