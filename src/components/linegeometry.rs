//! Polyline handed to the renderer.
//!
//! The fishing line publishes its shape as a point list plus a draw range
//! (how many leading points are currently drawn). The point storage is
//! reused between frames; setting new points overwrites it in place.

use glam::Vec3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    points: Vec<Vec3>,
    /// `None` draws every point.
    draw_range: Option<usize>,
    pub visible: bool,
}

impl LineGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the points, keeping the current draw range.
    pub fn set_from_points(&mut self, points: &[Vec3]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }

    pub fn set_draw_range(&mut self, count: Option<usize>) {
        self.draw_range = count;
    }

    pub fn draw_range(&self) -> Option<usize> {
        self.draw_range
    }

    /// Drop all points and draw everything again.
    pub fn clear(&mut self) {
        self.points.clear();
        self.draw_range = None;
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The prefix that is actually drawn.
    pub fn drawn_points(&self) -> &[Vec3] {
        let n = self.draw_range.map_or(self.points.len(), |n| n.min(self.points.len()));
        &self.points[..n]
    }
}
