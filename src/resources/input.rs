//! Per-frame input resource.
//!
//! Captures the subset of player input the cast cares about and exposes it
//! to systems via the [`InputState`] resource. Polling a real device is left
//! to the host; the headless runner drives these fields directly.
use bevy_ecs::prelude::*;
use glam::Vec3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state with edge flags.
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Record the button going down. Holding it again is not a new press.
    pub fn press(&mut self) {
        self.just_pressed = !self.active;
        self.just_released = false;
        self.active = true;
    }

    pub fn release(&mut self) {
        self.just_released = self.active;
        self.just_pressed = false;
        self.active = false;
    }

    /// Clear the edge flags at the end of a frame.
    pub fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame input relevant to casting.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Reel button. Held while fighting a fish; cancels a cast otherwise.
    pub reel: BoolState,
    /// Where the player is aiming. The idle angler faces it.
    pub aim_point: Vec3,
    /// Where the next cast lands. The bobber is moved here on CAST.
    pub cast_point: Vec3,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            reel: BoolState::default(),
            aim_point: Vec3::new(0.0, 0.0, 40.0),
            cast_point: Vec3::new(0.0, 0.0, 40.0),
        }
    }
}

impl InputState {
    /// Aim and cast at the same point.
    pub fn aim_at(&mut self, point: Vec3) {
        self.aim_point = point;
        self.cast_point = point;
    }

    pub fn end_frame(&mut self) {
        self.reel.end_frame();
    }
}
