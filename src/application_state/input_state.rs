//! # Input State
//!
//! This module defines the per-frame input types handed to the engine.
//! Inputs are named by engine-level [`InputAction`]s rather than device keys,
//! so any presentation layer can bind its own keys to them.

use std::collections::HashMap;

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    /// Determines if the input was just released this frame
    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    /// Derives the state from whether the input was down last frame and this frame
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// Everything the player can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move along the horizontal look direction
    MoveForward,
    /// Move against the horizontal look direction
    MoveBackward,
    /// Strafe left
    MoveLeft,
    /// Strafe right
    MoveRight,
    /// Rise along +Y
    MoveUp,
    /// Sink along -Y
    MoveDown,
    /// Hold to turn the look delta into camera rotation
    Look,
    /// Remove the targeted block
    BreakBlock,
    /// Place a block against the targeted face
    PlaceBlock,
}

impl InputAction {
    /// All actions, in declaration order.
    pub const ALL: [InputAction; 9] = [
        InputAction::MoveForward,
        InputAction::MoveBackward,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::MoveUp,
        InputAction::MoveDown,
        InputAction::Look,
        InputAction::BreakBlock,
        InputAction::PlaceBlock,
    ];
}

/// A snapshot of one frame's input.
///
/// Built fresh every frame and passed to the engine by value; the engine
/// keeps no input state between frames.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// State of each tracked action. Missing actions are `NotPressed`.
    pub actions: HashMap<InputAction, RawInputState>,

    /// Pointer movement since the last frame (x, y)
    pub look_delta: Option<(f64, f64)>,

    /// Seconds since the last frame
    pub dt: f32,
}

impl FrameInput {
    /// Creates an input snapshot with nothing pressed.
    pub fn new(dt: f32) -> Self {
        FrameInput {
            dt,
            ..Default::default()
        }
    }

    /// Builder-style setter for one action's state.
    pub fn with_action(mut self, action: InputAction, state: RawInputState) -> Self {
        self.actions.insert(action, state);
        self
    }

    /// Builder-style setter for the look delta.
    pub fn with_look_delta(mut self, delta: (f64, f64)) -> Self {
        self.look_delta = Some(delta);
        self
    }

    /// Gets the state of an action
    pub fn get_action_state(&self, action: InputAction) -> RawInputState {
        self.actions.get(&action).copied().unwrap_or_default()
    }
}
