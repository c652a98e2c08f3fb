//! The fishing line entity.
//!
//! Owns the line's state machine, the geometry handed to the renderer and the
//! point sequences of the current cast:
//!
//! - `launch`: the flight arc from the rod tip to the bobber's top
//! - `descended`: the resting sag between the same two endpoints
//! - `interpolated`: a pre-sized buffer overwritten in place every frame
//!
//! All three always have [`ARC_POINT_COUNT`] points once a cast has been
//! launched. The reveal count only grows within a cast.

use bevy_ecs::prelude::Resource;
use glam::Vec3;

use crate::components::linegeometry::LineGeometry;
use crate::components::statemachine::{MachineOwner, StateMachine, StateTag};
use crate::consts::{ARC_POINT_COUNT, CAST_HEIGHT, CAST_TIME_MS};
use crate::events::statechange::EntityKind;
use crate::trajectory::{arc_points, blend, sag_points, timestep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishingLineState {
    Hidden,
    Casting,
    Descending,
    AttachedToBobber,
    AttachedToFish,
}

impl StateTag for FishingLineState {
    fn name(self) -> &'static str {
        match self {
            FishingLineState::Hidden => "HIDDEN",
            FishingLineState::Casting => "CASTING",
            FishingLineState::Descending => "DESCENDING",
            FishingLineState::AttachedToBobber => "ATTACHED_TO_BOBBER",
            FishingLineState::AttachedToFish => "ATTACHED_TO_FISH",
        }
    }
}

#[derive(Resource, Debug)]
pub struct FishingLine {
    pub machine: StateMachine<FishingLineState>,
    pub geometry: LineGeometry,
    launch: Vec<Vec3>,
    descended: Vec<Vec3>,
    interpolated: Vec<Vec3>,
    reveal: usize,
}

impl Default for FishingLine {
    fn default() -> Self {
        Self::new()
    }
}

impl FishingLine {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new(FishingLineState::Hidden, None),
            geometry: LineGeometry::new(),
            launch: Vec::new(),
            descended: Vec::new(),
            interpolated: vec![Vec3::ZERO; ARC_POINT_COUNT],
            reveal: 0,
        }
    }

    /// Compute the flight arc and resting sag for a cast from `anchor` to
    /// `target`, and start with nothing revealed.
    pub fn plan_cast(&mut self, anchor: Vec3, target: Vec3) {
        self.launch = arc_points(anchor, target, CAST_HEIGHT, ARC_POINT_COUNT);
        self.descended = sag_points(anchor, target, ARC_POINT_COUNT);
        self.interpolated.resize(ARC_POINT_COUNT, Vec3::ZERO);
        blend(&self.launch, &self.descended, &mut self.interpolated, 0.0, None);
        self.reveal = 0;
        self.geometry.set_from_points(&self.launch);
        self.geometry.set_draw_range(Some(0));
    }

    pub fn launch_points(&self) -> &[Vec3] {
        &self.launch
    }

    pub fn descended_points(&self) -> &[Vec3] {
        &self.descended
    }

    pub fn interpolated_points(&self) -> &[Vec3] {
        &self.interpolated
    }

    /// Leading points currently revealed.
    pub fn reveal(&self) -> usize {
        self.reveal
    }

    /// Grow the reveal to match `elapsed_ms` of flight. Never shrinks.
    pub fn reveal_for(&mut self, elapsed_ms: f64) -> usize {
        let n = self.launch.len();
        let step = timestep(elapsed_ms, CAST_TIME_MS, n).min(n);
        self.reveal = self.reveal.max(step);
        self.geometry.set_draw_range(Some(self.reveal));
        self.reveal
    }

    /// Reveal the whole line.
    pub fn reveal_all(&mut self) {
        self.reveal = self.launch.len();
        self.geometry.set_draw_range(Some(self.reveal));
    }

    /// Blend the revealed part of the line from arc towards sag.
    ///
    /// One point past the reveal is blended as well, so the growing tip
    /// follows the settling line.
    ///
    /// # Panics
    ///
    /// If no cast has been planned.
    pub fn settle(&mut self, alpha: f32) {
        assert!(
            !self.launch.is_empty(),
            "line trajectory read before LAUNCH_BOBBER"
        );
        let limit = (self.reveal + 1).min(self.launch.len());
        blend(&self.launch, &self.descended, &mut self.interpolated, alpha, Some(limit));
        self.geometry.set_from_points(&self.interpolated);
    }

    /// Draw the resting sag with its end pinned to `tip`.
    ///
    /// The sag sequence itself is left as computed at launch.
    pub fn pin_to(&mut self, tip: Vec3) {
        assert!(
            !self.descended.is_empty(),
            "line trajectory read before LAUNCH_BOBBER"
        );
        self.interpolated.copy_from_slice(&self.descended);
        if let Some(last) = self.interpolated.last_mut() {
            *last = tip;
        }
        self.geometry.set_from_points(&self.interpolated);
        self.geometry.set_draw_range(None);
    }

    /// Draw a straight segment.
    pub fn draw_segment(&mut self, from: Vec3, to: Vec3) {
        self.geometry.set_from_points(&[from, to]);
        self.geometry.set_draw_range(None);
    }

    pub fn show(&mut self) {
        self.geometry.visible = true;
    }

    pub fn hide(&mut self) {
        self.geometry.visible = false;
    }

    /// Hide and forget the drawn points.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.geometry.visible = false;
        self.reveal = 0;
    }
}

impl MachineOwner for FishingLine {
    type State = FishingLineState;
    const KIND: EntityKind = EntityKind::FishingLine;

    fn machine(&self) -> &StateMachine<FishingLineState> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<FishingLineState> {
        &mut self.machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Vec3 = Vec3::new(0.0, 18.0, 9.0);
    const TARGET: Vec3 = Vec3::new(0.0, 1.0, 40.0);

    fn planned() -> FishingLine {
        let mut line = FishingLine::new();
        line.plan_cast(ANCHOR, TARGET);
        line
    }

    #[test]
    fn test_plan_cast_sizes_every_sequence() {
        let line = planned();
        assert_eq!(line.launch_points().len(), ARC_POINT_COUNT);
        assert_eq!(line.descended_points().len(), ARC_POINT_COUNT);
        assert_eq!(line.interpolated_points(), line.launch_points());
        assert_eq!(line.geometry.drawn_points().len(), 0);
    }

    #[test]
    fn test_reveal_is_monotonic_and_capped() {
        let mut line = planned();
        assert_eq!(line.reveal_for(100.0), 9);
        assert_eq!(line.reveal_for(50.0), 9);
        assert_eq!(line.reveal_for(10_000.0), ARC_POINT_COUNT);
    }

    #[test]
    fn test_settle_respects_reveal_limit() {
        let mut line = planned();
        line.reveal_for(0.0);
        line.settle(1.0);
        let points = line.interpolated_points();
        assert_eq!(points[0], line.descended_points()[0]);
        // nothing revealed: only the first point is blended
        assert_eq!(points[5], line.launch_points()[5]);

        line.reveal_all();
        line.settle(1.0);
        assert_eq!(line.interpolated_points(), line.descended_points());
    }

    #[test]
    fn test_pin_to_keeps_sag_intact() {
        let mut line = planned();
        let tip = TARGET + Vec3::new(0.0, 0.3, 0.0);
        line.pin_to(tip);
        assert_eq!(*line.geometry.points().last().unwrap(), tip);
        assert_eq!(*line.descended_points().last().unwrap(), TARGET);
        assert_eq!(line.geometry.drawn_points().len(), ARC_POINT_COUNT);
    }

    #[test]
    fn test_draw_segment() {
        let mut line = planned();
        line.draw_segment(ANCHOR, Vec3::new(1.0, 0.0, 30.0));
        assert_eq!(line.geometry.drawn_points(), &[ANCHOR, Vec3::new(1.0, 0.0, 30.0)]);
    }

    #[test]
    #[should_panic(expected = "before LAUNCH_BOBBER")]
    fn test_settle_before_launch_panics() {
        let mut line = FishingLine::new();
        line.settle(0.5);
    }
}
