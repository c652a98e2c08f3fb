//! World transform of a drawable model.
//!
//! Holds position, orientation, scale, visibility and the named child nodes
//! ("anchors") the cast cares about, such as the rod's `string_pivot` or the
//! bobber's `top_bobber`. Anchor offsets are in model space and resolved
//! through the full transform.

use glam::{Mat3, Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub visible: bool,
    anchors: FxHashMap<String, Vec3>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visible: true,
            anchors: FxHashMap::default(),
        }
    }
}

impl Transform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_anchor(mut self, name: impl Into<String>, offset: Vec3) -> Self {
        self.anchors.insert(name.into(), offset);
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn set_anchor(&mut self, name: impl Into<String>, offset: Vec3) {
        self.anchors.insert(name.into(), offset);
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Model-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// World position of a named anchor, if the model has it.
    pub fn anchor_world_position(&self, name: &str) -> Option<Vec3> {
        self.anchors
            .get(name)
            .map(|offset| self.matrix().transform_point3(*offset))
    }

    /// Direction the model's +Z axis points to.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Turn the model so its +Z axis points at `target`, keeping +Y up.
    ///
    /// Does nothing when `target` coincides with the position.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let mut right = Vec3::Y.cross(forward);
        if right.length_squared() < 1e-8 {
            // looking straight up or down
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = forward.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward));
    }
}
