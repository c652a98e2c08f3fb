//! Screen size resource.
//!
//! Stores the viewport dimensions in pixels. Used to map projected world
//! positions to screen coordinates for overlay UI.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self { w: 1280, h: 720 }
    }
}

impl ScreenSize {
    pub fn aspect(&self) -> f32 {
        if self.h == 0 {
            1.0
        } else {
            self.w as f32 / self.h as f32
        }
    }
}
