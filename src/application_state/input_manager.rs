//! # Input Manager
//!
//! Tracks which [`InputAction`]s are down across frames and turns that into
//! the edge-aware [`FrameInput`] the engine consumes.

use std::collections::HashMap;

use super::input_state::{FrameInput, InputAction, RawInputState};

/// Accumulates input between frames.
///
/// The presentation layer reports action changes and pointer motion as they
/// happen; [`InputManager::next_frame`] then produces the frame's snapshot
/// and rolls the current state over into the previous one.
pub struct InputManager {
    actions_old: HashMap<InputAction, bool>,
    actions_new: HashMap<InputAction, bool>,
    look_delta: Option<(f64, f64)>,
}

impl InputManager {
    /// Creates a manager with every action released.
    pub fn new() -> Self {
        let mut actions_old = HashMap::new();
        let mut actions_new = HashMap::new();
        for action in InputAction::ALL {
            actions_old.insert(action, false);
            actions_new.insert(action, false);
        }

        Self {
            actions_old,
            actions_new,
            look_delta: None,
        }
    }

    /// Records whether `action` is currently down.
    pub fn set_action(&mut self, action: InputAction, down: bool) {
        self.actions_new.insert(action, down);
    }

    /// Adds pointer motion to this frame's look delta.
    pub fn intake_look(&mut self, delta: (f64, f64)) {
        let (x, y) = self.look_delta.unwrap_or((0.0, 0.0));
        self.look_delta = Some((x + delta.0, y + delta.1));
    }

    /// Produces this frame's input and starts the next frame.
    pub fn next_frame(&mut self, dt: f32) -> FrameInput {
        let mut actions = HashMap::new();
        for (action, &new_state) in self.actions_new.iter() {
            let old_state = self.actions_old.get(action).copied().unwrap_or(false);
            actions.insert(*action, RawInputState::from_raw_states(old_state, new_state));
        }

        for (action, new_state) in self.actions_new.iter() {
            self.actions_old.insert(*action, *new_state);
        }

        FrameInput {
            actions,
            look_delta: self.look_delta.take(),
            dt,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager::new()
    }
}
