//! # Camera State Management
//!
//! Owns the viewer: where it stands, where it looks, and how a frame's
//! player actions move it. The world streams chunks around the camera
//! position and edit rays start from it.

use cgmath::{Deg, Point3, Vector3};

use super::PlayerAction;

pub mod camera;

use camera::{Camera, CameraController};

/// The camera and its controller.
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: Camera,
    /// Handles player input and camera movement
    pub camera_controller: CameraController,
}

impl CameraState {
    /// Creates a camera at `position` looking along +X, level with the horizon.
    pub fn new(position: Point3<f32>, speed: f32, sensitivity: f32) -> Self {
        CameraState {
            camera: Camera::new(position, Deg(0.0), Deg(0.0)),
            camera_controller: CameraController::new(speed, sensitivity),
        }
    }

    /// Applies a frame's player actions.
    ///
    /// # Returns
    /// `true` if the camera moved or turned.
    pub fn update(&mut self, actions: &PlayerAction, dt: f32) -> bool {
        self.camera_controller.intake_actions(actions);
        if !self.camera_controller.has_updates() {
            return false;
        }
        self.camera
            .get_controller_updates_and_reset_controller(&mut self.camera_controller, dt);
        true
    }

    /// The viewer position in world space.
    pub fn position(&self) -> Point3<f32> {
        self.camera.position
    }

    /// The normalized look direction.
    pub fn look_direction(&self) -> Vector3<f32> {
        self.camera.look_direction()
    }
}
