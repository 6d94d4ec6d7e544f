//! # Voxel World Entry Point
//!
//! Runs the headless driver. Pass a JSON config path as the first argument
//! to override the defaults.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- config.json
//! ```

fn main() {
    voxel_world::run();
}
