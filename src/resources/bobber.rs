//! The bobber entity.
//!
//! A singleton resource owning the bobber's state machine, transform, plunk
//! animation, the flight arc of the current cast and the handle of the
//! pending bite timer. Its receivers and per-frame behaviors live in
//! [`crate::systems::bobber`].

use bevy_ecs::prelude::Resource;
use glam::{Quat, Vec3};

use crate::components::animationplayer::AnimationPlayer;
use crate::components::statemachine::{MachineOwner, StateMachine, StateTag};
use crate::components::transform::Transform;
use crate::consts::{
    ARC_POINT_COUNT, BOBBER_REST_POSITION, BOBBER_REST_SCALE, CAST_HEIGHT, CAST_TIME_MS,
    TOP_BOBBER_ANCHOR,
};
use crate::events::statechange::EntityKind;
use crate::resources::timers::TimerHandle;
use crate::trajectory::{arc_points, timestep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BobberState {
    Hidden,
    Casting,
    Bobbing,
    Plunking,
}

impl StateTag for BobberState {
    fn name(self) -> &'static str {
        match self {
            BobberState::Hidden => "HIDDEN",
            BobberState::Casting => "CASTING",
            BobberState::Bobbing => "BOBBING",
            BobberState::Plunking => "PLUNKING",
        }
    }
}

#[derive(Resource, Debug)]
pub struct Bobber {
    pub machine: StateMachine<BobberState>,
    pub transform: Transform,
    pub animation: AnimationPlayer,
    /// Flight arc of the current cast, empty before the first launch.
    trajectory: Vec<Vec3>,
    /// Pending bite timer.
    pub plunk_timer: Option<TimerHandle>,
}

impl Bobber {
    /// A hidden bobber in its resting pose.
    pub fn new(transform: Transform, animation: AnimationPlayer) -> Self {
        let mut bobber = Self {
            machine: StateMachine::new(BobberState::Hidden, None),
            transform,
            animation,
            trajectory: Vec::new(),
            plunk_timer: None,
        };
        bobber.rest_pose();
        bobber
    }

    /// Back to the canonical resting pose, hidden.
    pub fn rest_pose(&mut self) {
        self.transform.position = BOBBER_REST_POSITION;
        self.transform.rotation = Quat::IDENTITY;
        self.transform.set_uniform_scale(BOBBER_REST_SCALE);
        self.transform.hide();
    }

    /// Compute this cast's flight arc from the rod tip to where the bobber
    /// currently sits.
    pub fn plan_flight(&mut self, anchor: Vec3) {
        self.trajectory = arc_points(anchor, self.transform.position, CAST_HEIGHT, ARC_POINT_COUNT);
    }

    pub fn trajectory(&self) -> &[Vec3] {
        &self.trajectory
    }

    /// Arc index reached after `elapsed_ms` of flight, stopping at the last
    /// point.
    pub fn flight_index(&self, elapsed_ms: f64) -> usize {
        let n = self.trajectory.len();
        timestep(elapsed_ms, CAST_TIME_MS, n).min(n.saturating_sub(1))
    }

    /// Place the bobber on its arc for `elapsed_ms` of flight.
    ///
    /// # Panics
    ///
    /// If no flight has been planned for this cast.
    pub fn follow_flight(&mut self, elapsed_ms: f64) {
        assert!(
            !self.trajectory.is_empty(),
            "bobber flight read before LAUNCH_BOBBER"
        );
        let index = self.flight_index(elapsed_ms);
        self.transform.position = self.trajectory[index];
    }

    /// World position of the line attachment on top of the bobber.
    pub fn top_point(&self) -> Vec3 {
        self.transform
            .anchor_world_position(TOP_BOBBER_ANCHOR)
            .unwrap_or(self.transform.position)
    }
}

impl MachineOwner for Bobber {
    type State = BobberState;
    const KIND: EntityKind = EntityKind::Bobber;

    fn machine(&self) -> &StateMachine<BobberState> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<BobberState> {
        &mut self.machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bobber() -> Bobber {
        Bobber::new(
            Transform::default().with_anchor(TOP_BOBBER_ANCHOR, Vec3::new(0.0, 0.5, 0.0)),
            AnimationPlayer::default(),
        )
    }

    #[test]
    fn test_new_bobber_is_hidden_at_rest() {
        let b = bobber();
        assert!(b.machine.is(BobberState::Hidden));
        assert!(!b.transform.visible);
        assert_eq!(b.transform.position, BOBBER_REST_POSITION);
        assert_eq!(b.transform.scale, Vec3::splat(BOBBER_REST_SCALE));
        assert!(b.plunk_timer.is_none());
    }

    #[test]
    fn test_top_point_follows_scale() {
        let b = bobber();
        assert_eq!(b.top_point(), BOBBER_REST_POSITION + Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_flight_index_matches_timestep_formula() {
        let mut b = bobber();
        b.transform.position = Vec3::new(0.0, 0.0, 40.0);
        b.plan_flight(Vec3::new(0.0, 18.0, 9.0));
        let n = ARC_POINT_COUNT;
        let step = CAST_TIME_MS / n as f64;
        for ms in [0.0, 5.0, 10.9, 11.0, 100.0, 349.9, 350.0, 1000.0] {
            let expected = ((ms / step).floor() as usize).min(n - 1);
            assert_eq!(b.flight_index(ms), expected, "at {ms} ms");
        }
    }

    #[test]
    fn test_follow_flight_ends_at_cast_point() {
        let mut b = bobber();
        let target = Vec3::new(3.0, 0.0, 40.0);
        b.transform.position = target;
        b.plan_flight(Vec3::new(0.0, 18.0, 9.0));
        b.follow_flight(0.0);
        assert_eq!(b.transform.position, Vec3::new(0.0, 18.0, 9.0));
        b.follow_flight(CAST_TIME_MS);
        assert_eq!(b.transform.position, target);
    }

    #[test]
    #[should_panic(expected = "before LAUNCH_BOBBER")]
    fn test_follow_flight_without_plan_panics() {
        let mut b = bobber();
        b.follow_flight(10.0);
    }
}
