//! Hooked fish position.
//!
//! The fish and its fight are simulated elsewhere; this resource is where that
//! subsystem publishes the fish's live position for the line and the angler
//! to follow.

use bevy_ecs::prelude::Resource;
use glam::Vec3;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FishTracker {
    pub position: Vec3,
    pub hooked: bool,
}

impl FishTracker {
    pub fn move_to(&mut self, position: Vec3) {
        self.position = position;
    }
}
