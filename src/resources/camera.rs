//! Scene camera.
//!
//! Only the projection matters here: overlay UI asks where the bobber is on
//! screen, and [`Camera::project_to_screen`] answers with pixel coordinates
//! (origin top-left, y down).

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec3};

use crate::resources::screensize::ScreenSize;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view_projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(
            Vec3::new(0.0, 30.0, -40.0),
            Vec3::new(0.0, 0.0, 30.0),
            45f32.to_radians(),
            16.0 / 9.0,
        )
    }
}

impl Camera {
    /// Right-handed perspective camera at `eye` looking at `target`.
    pub fn perspective(eye: Vec3, target: Vec3, fov_y: f32, aspect: f32) -> Self {
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(fov_y, aspect, 0.1, 1000.0);
        Self {
            view_projection: projection * view,
        }
    }

    /// Normalized device coordinates of a world position.
    pub fn project(&self, world_pos: Vec3) -> Vec3 {
        self.view_projection.project_point3(world_pos)
    }

    /// Pixel coordinates of a world position. `z` is always 1.
    pub fn project_to_screen(&self, world_pos: Vec3, screen: &ScreenSize) -> Vec3 {
        let ndc = self.project(world_pos);
        Vec3::new(
            (ndc.x + 1.0) / 2.0 * screen.w as f32,
            (1.0 - ndc.y) / 2.0 * screen.h as f32,
            1.0,
        )
    }
}
