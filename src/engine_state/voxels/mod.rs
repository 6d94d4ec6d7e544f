//! # Voxel World
//!
//! This module contains the voxel data model: block ids, chunks, the
//! coordinate mapping between world and chunk space, terrain sampling and
//! the world that ties them together.
//!
//! ## Architecture
//!
//! * **Block**: block ids, the air/solid split and block faces
//! * **Chunk**: fixed-size 16x128x16 block columns with a cached surface mesh
//! * **Coords**: world block position to chunk coordinate and back
//! * **Height sampler**: the terrain height function used to fill chunks
//! * **World**: the sparse map of loaded chunks and world-space block access
//! * **Raycast**: fixed-step block picking along a ray
//!
//! ## Data Flow
//!
//! 1. `World::update` loads every chunk within the render radius of the viewer
//! 2. Block edits go through `World::set_block` and mark the owning chunk dirty
//! 3. `World::render` remeshes dirty chunks, uploads them and draws every chunk
//!
//! Everything here runs on the caller's thread; chunks are generated and
//! meshed synchronously when requested.

pub mod block;
pub mod chunk;
pub mod coords;
pub mod height_sampler;
pub mod raycast;
pub mod world;
