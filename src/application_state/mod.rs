//! # Application State Management
//!
//! The headless driver: it feeds the engine scripted input, one frame at a
//! time, against an in-memory render backend. A windowed front end would
//! replace the script with real events and the backend with a GPU one; the
//! engine side stays the same.
//!
//! ## Script
//! 1. Load the chunks around the spawn point and drop the camera onto the terrain
//! 2. Walk forward, then drop onto the terrain again
//! 3. Look straight down, break the block underfoot, then place one back
//! 4. Idle for the remaining frames

pub mod input_manager;
pub mod input_state;

use cgmath::Point3;
use log::{info, warn};

use input_manager::InputManager;
use input_state::InputAction;

use crate::core::EngineConfig;
use crate::engine_state::{
    rendering::RecordingBackend, task_management::Clock, voxels::raycast::RaycastResult,
    EngineState,
};

/// Simulated seconds per frame.
pub const FRAME_TIME: f32 = 1.0 / 60.0;

/// Frames spent walking forward.
const WALK_FRAMES: u64 = 60;

/// Look delta that turns the camera straight down at any sensible sensitivity.
const LOOK_DOWN_DELTA: (f64, f64) = (0.0, 1.0e6);

/// What a scripted run did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Frames run.
    pub frames: u64,
    /// Chunks resident at the end.
    pub chunks_loaded: usize,
    /// Meshes uploaded to the backend.
    pub meshes_uploaded: usize,
    /// Draw calls issued.
    pub draws: usize,
    /// The block the script broke.
    pub broken: Option<RaycastResult>,
    /// Where the script placed a block.
    pub placed: Option<Point3<i32>>,
}

/// The running application: the engine, its input and its backend.
pub struct ApplicationState {
    /// The core engine state and logic
    pub engine_state: EngineState,
    /// Manages input state between frames
    pub input_manager: InputManager,
    /// Receives every mesh upload and draw call
    pub backend: RecordingBackend,
    frame: u64,
}

impl ApplicationState {
    /// Creates the application around an engine.
    pub fn new(engine_state: EngineState) -> Self {
        ApplicationState {
            engine_state,
            input_manager: InputManager::new(),
            backend: RecordingBackend::default(),
            frame: 0,
        }
    }

    /// Creates the application with terrain from `config`.
    pub fn from_config(config: EngineConfig) -> Self {
        Self::new(EngineState::new(config))
    }

    /// Runs one frame with whatever input has been reported since the last.
    fn step(&mut self) -> crate::engine_state::FrameReport {
        self.frame += 1;
        let input = self.input_manager.next_frame(FRAME_TIME);
        let now = self.frame as f64 * FRAME_TIME as f64;
        self.engine_state.frame(&input, &mut self.backend, now)
    }

    /// Presses `action` for one frame and releases it on the next.
    fn tap(&mut self, action: InputAction) -> crate::engine_state::FrameReport {
        self.input_manager.set_action(action, true);
        let report = self.step();
        self.input_manager.set_action(action, false);
        self.step();
        report
    }

    /// Runs the scripted session for at least `frames` frames.
    ///
    /// The script itself takes a fixed number of frames; `frames` only
    /// extends the idle tail.
    pub fn run_script(&mut self, frames: u64) -> RunSummary {
        let mut summary = RunSummary::default();

        self.step();
        if !self.engine_state.spawn_on_surface() {
            warn!("No terrain under the spawn point");
        }

        self.input_manager.set_action(InputAction::MoveForward, true);
        for _ in 0..WALK_FRAMES {
            self.step();
        }
        self.input_manager.set_action(InputAction::MoveForward, false);
        self.step();
        if !self.engine_state.spawn_on_surface() {
            warn!("No terrain under the camera after walking");
        }

        self.input_manager.set_action(InputAction::Look, true);
        self.input_manager.intake_look(LOOK_DOWN_DELTA);
        self.step();
        self.input_manager.set_action(InputAction::Look, false);

        summary.broken = self.tap(InputAction::BreakBlock).broken;
        match summary.broken {
            Some(hit) => info!(
                "Broke block at ({}, {}, {})",
                hit.block_pos.x, hit.block_pos.y, hit.block_pos.z
            ),
            None => warn!("Nothing in reach to break"),
        }

        summary.placed = self.tap(InputAction::PlaceBlock).placed;
        match summary.placed {
            Some(pos) => info!("Placed block at ({}, {}, {})", pos.x, pos.y, pos.z),
            None => warn!("Nothing in reach to place against"),
        }

        while self.frame < frames {
            self.step();
        }

        summary.frames = self.frame;
        summary.chunks_loaded = self.engine_state.world.chunk_count();
        summary.meshes_uploaded = self.backend.upload_count();
        summary.draws = self.backend.draw_count();
        summary
    }
}

/// Default number of frames in a headless run.
pub const DEFAULT_FRAMES: u64 = 300;

/// Loads the configuration at `config_path`, or the defaults without one.
///
/// A file that cannot be loaded is reported and the defaults are used.
pub fn load_config(config_path: Option<&str>) -> EngineConfig {
    let Some(path) = config_path else {
        info!("No config file given, using defaults");
        return EngineConfig::default();
    };

    match EngineConfig::load(path) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Failed to load config {}: {}", path, error);
            EngineConfig::default()
        }
    }
}

/// Runs a headless session with `config` and logs what it did.
pub fn run_headless(config: EngineConfig, frames: u64) -> RunSummary {
    let clock = Clock::new();
    let mut application = ApplicationState::from_config(config);
    let summary = application.run_script(frames);

    info!(
        "Ran {} frames in {:.3}s: {} chunk(s), {} mesh upload(s), {} draw call(s)",
        summary.frames,
        clock.now(),
        summary.chunks_loaded,
        summary.meshes_uploaded,
        summary.draws
    );
    summary
}
