//! # World Module
//!
//! This module provides the `World` struct which owns every loaded chunk and
//! answers block queries in world coordinates.
//!
//! ## Architecture
//!
//! The world uses sparse storage: only chunks that have been requested are
//! kept, keyed by their 2D chunk coordinate. Chunks are generated
//! synchronously the first time a coordinate is needed and are never
//! removed afterwards, so memory grows with the explored area.
//!
//! ## Unloaded space
//!
//! Queries against a coordinate whose chunk is not loaded read as air, and
//! edits there are dropped. Callers cannot distinguish "not loaded" from
//! "empty" through [`World::get_block`]; use [`World::is_loaded`] when that
//! matters.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use cgmath::{Matrix4, Point3, Vector3};
use log::{debug, info};

use crate::engine_state::rendering::RenderBackend;
use crate::engine_state::voxels::block::{is_solid, BlockTypeSize, AIR};
use crate::engine_state::voxels::chunk::{Chunk, CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::engine_state::voxels::coords::{world_to_local, ChunkCoord};
use crate::engine_state::voxels::height_sampler::HeightSampler;
use crate::engine_state::voxels::raycast::{self, RaycastResult};

/// Read-only block lookup in world-block space.
///
/// The mesher receives the world through this trait so that a chunk can
/// query its neighbours without holding a reference back to its owner.
pub trait BlockAccess {
    /// The block at a world position; air for anything not loaded.
    fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize;
}

/// Counters describing what the last [`World::render`] call did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Chunks whose mesh was rebuilt and uploaded.
    pub meshes_rebuilt: usize,
    /// Draw calls issued.
    pub chunks_drawn: usize,
}

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::engine_state::voxels::{height_sampler::SineHeightSampler, world::World};
///
/// let mut world = World::new(Box::new(SineHeightSampler));
/// world.update(Point3::new(0.0, 80.0, 0.0), 1);
/// assert_eq!(world.chunk_count(), 9);
/// assert_ne!(world.get_block(Point3::new(0, 63, 0)), 0);
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Terrain source for newly loaded chunks.
    sampler: Box<dyn HeightSampler>,
}

impl World {
    /// Creates a new, empty world that generates terrain from `sampler`.
    pub fn new(sampler: Box<dyn HeightSampler>) -> Self {
        World {
            chunks: HashMap::new(),
            sampler,
        }
    }

    /// Generates the chunk at `position` if it is not loaded yet.
    ///
    /// # Returns
    /// `true` if a new chunk was generated.
    pub fn load_chunk(&mut self, position: ChunkCoord) -> bool {
        if self.chunks.contains_key(&position) {
            return false;
        }

        debug!("Loading chunk at {}", position);
        let chunk = Chunk::generate(position, self.sampler.as_ref());
        self.chunks.insert(position, chunk);
        true
    }

    /// Ensures every chunk within `radius` (Chebyshev distance, in chunks)
    /// of the viewer's chunk is loaded.
    ///
    /// The viewer's chunk is found by flooring the position to a block and
    /// floor-dividing by the chunk extent, the same rule block lookups use.
    /// Chunks outside the radius are kept.
    ///
    /// # Returns
    /// The number of chunks generated by this call.
    pub fn update(&mut self, viewer_position: Point3<f32>, radius: u32) -> usize {
        let center = ChunkCoord::from_world_pos(viewer_position.x, viewer_position.z);
        let (xs, zs) = ring_bounds(center, radius);

        let mut loaded = 0;
        for x in xs {
            for z in zs.clone() {
                if self.load_chunk(ChunkCoord::new(x, z)) {
                    loaded += 1;
                }
            }
        }

        if loaded > 0 {
            info!(
                "Loaded {} chunk(s) around {}; {} chunk(s) resident",
                loaded,
                center,
                self.chunks.len()
            );
        }
        loaded
    }

    /// Retrieves a reference to the chunk at the specified chunk coordinates.
    pub fn get_chunk_at(&self, position: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Whether the chunk at `position` is loaded.
    pub fn is_loaded(&self, position: ChunkCoord) -> bool {
        self.chunks.contains_key(&position)
    }

    /// The number of loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the coordinates of every loaded chunk, in no particular order.
    pub fn chunk_positions(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    /// The block at a world position.
    ///
    /// # Returns
    /// The block id, or `AIR` if the chunk is not loaded or `y` is outside
    /// the chunk height.
    pub fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize {
        let (coord, local) = world_to_local(pos);
        match self.chunks.get(&coord) {
            Some(chunk) => chunk.get_block_at(local),
            None => AIR,
        }
    }

    /// The height of the highest solid block in the column at `(x, z)`.
    ///
    /// # Returns
    /// `None` if the column is unloaded or entirely air.
    pub fn column_top(&self, x: i32, z: i32) -> Option<i32> {
        (0..CHUNK_HEIGHT)
            .rev()
            .find(|&y| is_solid(self.get_block(Point3::new(x, y, z))))
    }

    /// Writes a block at a world position.
    ///
    /// Edits in unloaded chunks or outside the chunk height are dropped.
    /// An edit on a chunk border also marks the loaded chunk across that
    /// border dirty, since the edited block's face toward it may change.
    pub fn set_block(&mut self, pos: Point3<i32>, block: BlockTypeSize) {
        let (coord, local) = world_to_local(pos);
        if !Chunk::in_bounds(local.x, local.y, local.z) {
            return;
        }
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            debug!(
                "Dropping edit at ({}, {}, {}): chunk {} is not loaded",
                pos.x, pos.y, pos.z, coord
            );
            return;
        };
        chunk.set_block(local.x, local.y, local.z, block);

        let mut touched = Vec::with_capacity(2);
        if local.x == 0 {
            touched.push(ChunkCoord::new(coord.x - 1, coord.z));
        } else if local.x == CHUNK_WIDTH - 1 {
            touched.push(ChunkCoord::new(coord.x + 1, coord.z));
        }
        if local.z == 0 {
            touched.push(ChunkCoord::new(coord.x, coord.z - 1));
        } else if local.z == CHUNK_DEPTH - 1 {
            touched.push(ChunkCoord::new(coord.x, coord.z + 1));
        }
        for neighbour in touched {
            if let Some(chunk) = self.chunks.get_mut(&neighbour) {
                chunk.mark_mesh_dirty();
            }
        }
    }

    /// Casts a ray through the world and returns the first solid block hit.
    ///
    /// See [`raycast::raycast`] for the marching rules.
    pub fn raycast(
        &self,
        start: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RaycastResult> {
        raycast::raycast(self, start, direction, max_distance)
    }

    /// Rebuilds dirty chunk meshes and draws every loaded chunk.
    ///
    /// Meshing is pull-based: a chunk edited since its last build is
    /// remeshed here, the first time a render pass visits it. Each chunk is
    /// drawn with a translation to its world-space origin.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> RenderStats {
        let mut stats = RenderStats::default();

        let dirty: Vec<ChunkCoord> = self
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_mesh_dirty())
            .map(|(position, _)| *position)
            .collect();

        for position in dirty {
            let Some(chunk) = self.chunks.get(&position) else {
                continue;
            };
            let mesh = chunk.build_mesh(&*self);
            debug!(
                "Meshed chunk {}: {} quads",
                position,
                mesh.quad_count()
            );

            let handle = backend.upload_mesh(&mesh.vertices, &mesh.indices);
            if let Some(chunk) = self.chunks.get_mut(&position) {
                if let Some(old_handle) = chunk.install_mesh(mesh, handle) {
                    backend.release_mesh(old_handle);
                }
            }
            stats.meshes_rebuilt += 1;
        }

        for (position, chunk) in &self.chunks {
            if let Some(handle) = chunk.mesh_handle() {
                backend.draw(handle, Matrix4::from_translation(position.world_offset()));
                stats.chunks_drawn += 1;
            }
        }

        stats
    }
}

/// Chunk x and z ranges within `radius` of `center`, saturating at the
/// edges of the coordinate space.
fn ring_bounds(center: ChunkCoord, radius: u32) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    (
        center.x.saturating_sub(radius)..=center.x.saturating_add(radius),
        center.z.saturating_sub(radius)..=center.z.saturating_add(radius),
    )
}

impl BlockAccess for World {
    fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize {
        World::get_block(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::rendering::RecordingBackend;
    use crate::engine_state::voxels::block::SOLID;
    use crate::engine_state::voxels::height_sampler::SineHeightSampler;

    fn flat_world(height: f32) -> World {
        World::new(Box::new(move |_x: f32, _z: f32| height / 128.0))
    }

    #[test]
    fn test_radius_one_loads_nine_chunks() {
        let mut world = World::new(Box::new(SineHeightSampler));
        assert_eq!(world.update(Point3::new(0.0, 70.0, 0.0), 1), 9);

        let mut positions: Vec<_> = world.chunk_positions().map(|c| (c.x, c.z)).collect();
        positions.sort();
        let mut expected = Vec::new();
        for x in -1..=1 {
            for z in -1..=1 {
                expected.push((x, z));
            }
        }
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_repeated_update_neither_duplicates_nor_resets() {
        let mut world = World::new(Box::new(SineHeightSampler));
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        world.set_block(Point3::new(0, 120, 0), 4);

        assert_eq!(world.update(Point3::new(0.0, 0.0, 0.0), 1), 0);
        assert_eq!(world.chunk_count(), 9);
        assert_eq!(world.get_block(Point3::new(0, 120, 0)), 4);
    }

    #[test]
    fn test_radius_zero_loads_only_the_viewer_chunk() {
        let mut world = flat_world(4.0);
        world.update(Point3::new(40.0, 0.0, -3.0), 0);
        assert_eq!(world.chunk_count(), 1);
        assert!(world.is_loaded(ChunkCoord::new(2, -1)));
    }

    #[test]
    fn test_negative_viewer_uses_floor_division() {
        let mut world = flat_world(4.0);
        world.update(Point3::new(-0.5, 0.0, -15.9), 0);
        assert!(world.is_loaded(ChunkCoord::new(-1, -1)));
        assert!(!world.is_loaded(ChunkCoord::new(0, 0)));
    }

    #[test]
    fn test_moving_away_keeps_old_chunks() {
        let mut world = flat_world(4.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        world.update(Point3::new(160.0, 0.0, 0.0), 1);
        assert_eq!(world.chunk_count(), 18);
        assert!(world.is_loaded(ChunkCoord::new(0, 0)));
    }

    #[test]
    fn test_unloaded_space_reads_air_and_drops_edits() {
        let mut world = flat_world(10.0);
        assert_eq!(world.get_block(Point3::new(0, 0, 0)), AIR);
        world.set_block(Point3::new(0, 0, 0), SOLID);
        assert_eq!(world.chunk_count(), 0);

        world.load_chunk(ChunkCoord::new(0, 0));
        assert_eq!(world.get_block(Point3::new(0, 0, 0)), SOLID);
        assert_eq!(world.get_block(Point3::new(-1, 0, 0)), AIR);
    }

    #[test]
    fn test_world_edits_round_trip_across_negative_chunks() {
        let mut world = flat_world(0.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        for pos in [
            Point3::new(-1, 0, -1),
            Point3::new(-16, 5, 15),
            Point3::new(-9, 127, -16),
            Point3::new(31, 64, -16),
        ] {
            world.set_block(pos, 3);
            assert_eq!(world.get_block(pos), 3);
        }
        assert_eq!(world.get_chunk_at(ChunkCoord::new(-1, -1)).map(|c| c.get_block(15, 0, 15)), Some(3));
        assert_eq!(world.get_chunk_at(ChunkCoord::new(-1, -1)).map(|c| c.get_block(7, 127, 0)), Some(3));

        // x = -17 belongs to chunk -2, just outside the loaded ring.
        world.set_block(Point3::new(-17, 127, 0), 3);
        assert_eq!(world.get_block(Point3::new(-17, 127, 0)), AIR);
        assert!(!world.is_loaded(ChunkCoord::new(-2, 0)));
    }

    #[test]
    fn test_ring_bounds_saturate_for_huge_radii() {
        let (xs, zs) = ring_bounds(ChunkCoord::new(3, -4), 2);
        assert_eq!((xs, zs), (1..=5, -6..=-2));

        let (xs, zs) = ring_bounds(ChunkCoord::new(3, -4), u32::MAX);
        assert_eq!(xs, (3 - i32::MAX)..=i32::MAX);
        assert_eq!(zs, i32::MIN..=(-4 + i32::MAX));
        assert!(!xs.is_empty() && !zs.is_empty());
    }

    #[test]
    fn test_border_edit_dirties_the_adjacent_chunk() {
        let mut world = flat_world(10.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        let mut backend = RecordingBackend::default();
        world.render(&mut backend);
        let before = world.get_chunk_at(ChunkCoord::new(-1, 0)).map(|c| c.mesh().quad_count());

        // Local (0, 5, 5) in chunk (0, 0); its left face looks into chunk (-1, 0).
        world.set_block(Point3::new(0, 5, 5), AIR);
        assert!(world.get_chunk_at(ChunkCoord::new(-1, 0)).is_some_and(|c| c.is_mesh_dirty()));
        assert!(world.get_chunk_at(ChunkCoord::new(0, -1)).is_some_and(|c| !c.is_mesh_dirty()));

        let stats = world.render(&mut backend);
        assert_eq!(stats.meshes_rebuilt, 2);
        let after = world.get_chunk_at(ChunkCoord::new(-1, 0)).map(|c| c.mesh().quad_count());
        assert_eq!(after, before.map(|quads| quads + 1));
    }

    #[test]
    fn test_corner_edit_dirties_both_adjacent_chunks() {
        let mut world = flat_world(10.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        world.render(&mut RecordingBackend::default());

        world.set_block(Point3::new(15, 5, 15), AIR);
        for (x, z) in [(0, 0), (1, 0), (0, 1)] {
            assert!(world.get_chunk_at(ChunkCoord::new(x, z)).is_some_and(|c| c.is_mesh_dirty()));
        }
        assert!(world.get_chunk_at(ChunkCoord::new(1, 1)).is_some_and(|c| !c.is_mesh_dirty()));
    }

    #[test]
    fn test_column_top_finds_the_surface() {
        let mut world = flat_world(10.0);
        assert_eq!(world.column_top(3, 3), None);

        world.load_chunk(ChunkCoord::new(0, 0));
        assert_eq!(world.column_top(3, 3), Some(9));
        world.set_block(Point3::new(3, 50, 3), SOLID);
        assert_eq!(world.column_top(3, 3), Some(50));
    }

    #[test]
    fn test_out_of_height_world_access_is_air() {
        let mut world = flat_world(128.0);
        world.load_chunk(ChunkCoord::new(0, 0));
        assert_eq!(world.get_block(Point3::new(0, 127, 0)), SOLID);
        assert_eq!(world.get_block(Point3::new(0, 128, 0)), AIR);
        assert_eq!(world.get_block(Point3::new(0, -1, 0)), AIR);
        world.set_block(Point3::new(0, 200, 0), 2);
        assert_eq!(world.get_block(Point3::new(0, 200, 0)), AIR);
    }

    #[test]
    fn test_render_meshes_once_and_draws_every_frame() {
        let mut world = flat_world(1.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        let mut backend = RecordingBackend::default();

        let first = world.render(&mut backend);
        assert_eq!(first, RenderStats { meshes_rebuilt: 9, chunks_drawn: 9 });

        let second = world.render(&mut backend);
        assert_eq!(second, RenderStats { meshes_rebuilt: 0, chunks_drawn: 9 });
        assert_eq!(backend.upload_count(), 9);
        assert_eq!(backend.draw_count(), 18);
    }

    #[test]
    fn test_edit_dirties_only_the_owning_chunk() {
        let mut world = flat_world(1.0);
        world.update(Point3::new(0.0, 0.0, 0.0), 1);
        let mut backend = RecordingBackend::default();
        world.render(&mut backend);

        world.set_block(Point3::new(-3, 5, 7), SOLID);
        assert!(world.get_chunk_at(ChunkCoord::new(-1, 0)).is_some_and(|c| c.is_mesh_dirty()));
        assert!(world.get_chunk_at(ChunkCoord::new(0, 0)).is_some_and(|c| !c.is_mesh_dirty()));

        let stats = world.render(&mut backend);
        assert_eq!(stats.meshes_rebuilt, 1);
        assert_eq!(backend.released_count(), 1);
    }

    #[test]
    fn test_draws_are_translated_to_chunk_origins() {
        let mut world = flat_world(1.0);
        world.load_chunk(ChunkCoord::new(-2, 3));
        let mut backend = RecordingBackend::default();
        world.render(&mut backend);

        let (_, model) = backend.draws()[0];
        assert_eq!(model, Matrix4::from_translation(Vector3::new(-32.0, 0.0, 48.0)));
    }
}
