//! # Engine State Module
//!
//! The core engine module that ties the voxel world, the camera and the
//! periodic tasks into one per-frame contract.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `camera_state` - Handles camera positioning and movement
//! * `rendering` - The render backend seam and chunk meshing
//! * `task_management` - Fixed-interval tasks and the frame clock
//! * `voxels` - Handles voxel data, chunks, and world generation
//!
//! ## Frame Order
//!
//! [`EngineState::frame`] runs, in order: camera update, block edits,
//! chunk loading around the camera, rendering, periodic tasks. All chunk
//! loads of a frame therefore happen before that frame's render.

use cgmath::{Point3, Vector3};
use log::{debug, info};

use camera_state::CameraState;
use rendering::RenderBackend;
use task_management::{PeriodicTaskRunner, Task};
use voxels::{
    block::{BlockTypeSize, AIR},
    height_sampler::HeightSampler,
    raycast::RaycastResult,
    world::{RenderStats, World},
};

use crate::{
    application_state::input_state::{FrameInput, InputAction},
    core::EngineConfig,
};

pub mod camera_state;
pub mod rendering;
pub mod task_management;
pub mod voxels;

/// Where the camera starts before it is dropped onto the terrain.
pub const DEFAULT_SPAWN: Point3<f32> = Point3::new(0.5, 100.0, 0.5);

/// Distance kept between the surface and the camera when spawning on it.
const SPAWN_CLEARANCE: f32 = 2.5;

/// Player intent for one frame, derived from [`FrameInput`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlayerAction {
    /// Movement actions - true if the action is pressed or held
    pub move_forward: bool,
    /// Move backward
    pub move_backward: bool,
    /// Strafe left
    pub move_left: bool,
    /// Strafe right
    pub move_right: bool,
    /// Fly up
    pub move_up: bool,
    /// Fly down
    pub move_down: bool,

    /// View rotation - Some if look is pressed or held and the pointer moved
    pub rotate_view: Option<(f64, f64)>,

    /// Edit actions - only trigger on press, not hold
    pub break_block: bool,
    /// Place a block against the targeted face
    pub place_block: bool,
}

impl PlayerAction {
    /// Translates a frame's input into player actions.
    pub fn from_input(input: &FrameInput) -> Self {
        let mut player_action = PlayerAction {
            move_forward: input.get_action_state(InputAction::MoveForward).is_active(),
            move_backward: input.get_action_state(InputAction::MoveBackward).is_active(),
            move_left: input.get_action_state(InputAction::MoveLeft).is_active(),
            move_right: input.get_action_state(InputAction::MoveRight).is_active(),
            move_up: input.get_action_state(InputAction::MoveUp).is_active(),
            move_down: input.get_action_state(InputAction::MoveDown).is_active(),
            ..Default::default()
        };

        if input.look_delta.is_some() && input.get_action_state(InputAction::Look).is_active() {
            player_action.rotate_view = input.look_delta;
        }

        player_action.break_block = input
            .get_action_state(InputAction::BreakBlock)
            .is_just_pressed();
        player_action.place_block = input
            .get_action_state(InputAction::PlaceBlock)
            .is_just_pressed();

        player_action
    }
}

/// Running counters read by the frame statistics task.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameStats {
    /// Frames run since the engine was created.
    pub frames: u64,
    /// Frames run since the last statistics report.
    pub frames_since_report: u64,
    /// Meshes rebuilt since the last statistics report.
    pub meshes_since_report: usize,
    /// Chunks resident after the latest frame.
    pub chunks_loaded: usize,
    /// Time of the last statistics report, in seconds.
    pub last_report: f64,
    /// Statistics reports issued so far.
    pub reports: u64,
}

/// Logs frame rate and world size, then starts a new measurement window.
struct FrameStatsTask;

impl Task<FrameStats> for FrameStatsTask {
    fn process(&mut self, stats: &mut FrameStats, now: f64) {
        let elapsed = now - stats.last_report;
        let fps = if elapsed > 0.0 {
            stats.frames_since_report as f64 / elapsed
        } else {
            0.0
        };
        info!(
            "{:.1} fps, {} chunk(s) loaded, {} mesh(es) rebuilt",
            fps, stats.chunks_loaded, stats.meshes_since_report
        );

        stats.frames_since_report = 0;
        stats.meshes_since_report = 0;
        stats.last_report = now;
        stats.reports += 1;
    }
}

/// What one call to [`EngineState::frame`] did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameReport {
    /// Whether the camera moved or turned.
    pub camera_moved: bool,
    /// The block removed by a break action.
    pub broken: Option<RaycastResult>,
    /// Where a place action wrote a block.
    pub placed: Option<Point3<i32>>,
    /// Chunks generated by this frame's streaming update.
    pub chunks_loaded: usize,
    /// Meshing and drawing done by this frame's render.
    pub render: RenderStats,
    /// Periodic tasks fired at the end of the frame.
    pub tasks_fired: usize,
}

/// The main state container for the voxel engine
///
/// Owns the world, the camera and the periodic tasks. The presentation
/// layer drives it once per frame with [`EngineState::frame`], or calls the
/// individual operations directly.
///
/// # Examples
///
/// ```
/// use voxel_world::application_state::input_state::FrameInput;
/// use voxel_world::core::EngineConfig;
/// use voxel_world::engine_state::{rendering::RecordingBackend, EngineState};
///
/// let mut engine = EngineState::new(EngineConfig::default());
/// let mut backend = RecordingBackend::default();
///
/// let report = engine.frame(&FrameInput::new(1.0 / 60.0), &mut backend, 1.0 / 60.0);
/// assert_eq!(report.chunks_loaded, 25);
/// assert_eq!(backend.draw_count(), 25);
/// ```
pub struct EngineState {
    /// The voxel world containing all chunk data
    pub world: World,
    /// Camera state managing position, orientation and movement
    pub camera_state: CameraState,
    config: EngineConfig,
    scheduler: PeriodicTaskRunner<FrameStats>,
    stats: FrameStats,
}

impl EngineState {
    /// Creates an engine whose terrain comes from `config.terrain`.
    pub fn new(config: EngineConfig) -> Self {
        let sampler = config.terrain.build_sampler();
        Self::with_sampler(config, sampler)
    }

    /// Creates an engine with an explicit terrain sampler.
    ///
    /// The camera starts at [`DEFAULT_SPAWN`]; nothing is loaded until the
    /// first frame or [`EngineState::update`].
    pub fn with_sampler(config: EngineConfig, sampler: Box<dyn HeightSampler>) -> Self {
        let camera_state = CameraState::new(
            DEFAULT_SPAWN,
            config.camera_speed,
            config.camera_sensitivity,
        );

        let mut scheduler = PeriodicTaskRunner::new();
        scheduler.add_task(config.stats_interval, Box::new(FrameStatsTask));

        EngineState {
            world: World::new(sampler),
            camera_state,
            config,
            scheduler,
            stats: FrameStats::default(),
        }
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Running frame counters.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Loads every chunk within `radius` of `viewer_position`.
    pub fn update(&mut self, viewer_position: Point3<f32>, radius: u32) -> usize {
        self.world.update(viewer_position, radius)
    }

    /// Remeshes dirty chunks and draws every loaded chunk.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> RenderStats {
        self.world.render(backend)
    }

    /// Casts a ray through the world.
    pub fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RaycastResult> {
        self.world.raycast(origin, direction, max_distance)
    }

    /// The block at a world position.
    pub fn get_block(&self, pos: Point3<i32>) -> BlockTypeSize {
        self.world.get_block(pos)
    }

    /// Writes a block at a world position.
    pub fn set_block(&mut self, pos: Point3<i32>, block: BlockTypeSize) {
        self.world.set_block(pos, block)
    }

    /// Removes the first solid block within reach along a ray.
    ///
    /// # Returns
    /// The hit that was removed, or `None` if nothing was in reach.
    pub fn break_block(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
    ) -> Option<RaycastResult> {
        let hit = self.raycast(origin, direction, self.config.reach_distance)?;
        self.world.set_block(hit.block_pos, AIR);
        debug!(
            "Broke block at ({}, {}, {})",
            hit.block_pos.x, hit.block_pos.y, hit.block_pos.z
        );
        Some(hit)
    }

    /// Places the configured block against the face a ray hits.
    ///
    /// The block goes into the cell the ray passed through just before the
    /// hit. A ray starting inside a solid block has no such cell and places
    /// nothing. Placing into an unloaded chunk is dropped like any edit.
    ///
    /// # Returns
    /// The position written, or `None` if nothing was placed.
    pub fn place_block(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
    ) -> Option<Point3<i32>> {
        let hit = self.raycast(origin, direction, self.config.reach_distance)?;
        if hit.face == Vector3::new(0, 0, 0) {
            return None;
        }

        let target = hit.adjacent();
        self.world.set_block(target, self.config.place_block.id());
        debug!(
            "Placed {} at ({}, {}, {})",
            self.config.place_block, target.x, target.y, target.z
        );
        Some(target)
    }

    /// Moves the camera to just above the highest solid block of its column.
    ///
    /// # Returns
    /// `false` if the column is unloaded or empty; the camera stays put.
    pub fn spawn_on_surface(&mut self) -> bool {
        let position = self.camera_state.position();
        let x = position.x.floor() as i32;
        let z = position.z.floor() as i32;
        match self.world.column_top(x, z) {
            Some(top) => {
                self.camera_state.camera.position.y = top as f32 + 1.0 + SPAWN_CLEARANCE;
                true
            }
            None => false,
        }
    }

    /// Runs one frame.
    ///
    /// # Arguments
    /// * `input` - This frame's input
    /// * `backend` - Where meshes are uploaded and drawn
    /// * `now` - The frame time in seconds, used by periodic tasks
    pub fn frame(
        &mut self,
        input: &FrameInput,
        backend: &mut dyn RenderBackend,
        now: f64,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        let actions = PlayerAction::from_input(input);

        report.camera_moved = self.camera_state.update(&actions, input.dt);

        let eye = self.camera_state.position();
        let look = self.camera_state.look_direction();
        if actions.break_block {
            report.broken = self.break_block(eye, look);
        }
        if actions.place_block {
            report.placed = self.place_block(eye, look);
        }

        report.chunks_loaded = self.world.update(eye, self.config.render_radius());
        report.render = self.world.render(backend);

        self.stats.frames += 1;
        self.stats.frames_since_report += 1;
        self.stats.meshes_since_report += report.render.meshes_rebuilt;
        self.stats.chunks_loaded = self.world.chunk_count();
        report.tasks_fired = self.scheduler.update(now, &mut self.stats);

        report
    }
}
