//! The angler entity.
//!
//! Owns the angler's state machine, transform (with the rod's
//! `string_pivot` anchor) and the cast animation player.

use bevy_ecs::prelude::Resource;
use glam::Vec3;

use crate::components::animationplayer::AnimationPlayer;
use crate::components::statemachine::{MachineOwner, StateMachine, StateTag};
use crate::components::transform::Transform;
use crate::consts::STRING_PIVOT_ANCHOR;
use crate::events::statechange::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnglerState {
    Idle,
    Casting,
    Fishing,
    FishOn,
    Reeling,
    HoldingPrize,
}

impl AnglerState {
    /// States a new cast may start from.
    pub fn accepts_cast(self) -> bool {
        matches!(
            self,
            AnglerState::Idle
                | AnglerState::Fishing
                | AnglerState::FishOn
                | AnglerState::HoldingPrize
        )
    }

    /// States the reel button cancels out of.
    pub fn cancellable(self) -> bool {
        !matches!(
            self,
            AnglerState::Idle | AnglerState::FishOn | AnglerState::Reeling
        )
    }
}

impl StateTag for AnglerState {
    fn name(self) -> &'static str {
        match self {
            AnglerState::Idle => "IDLE",
            AnglerState::Casting => "CASTING",
            AnglerState::Fishing => "FISHING",
            AnglerState::FishOn => "FISH_ON",
            AnglerState::Reeling => "REELING",
            AnglerState::HoldingPrize => "HOLDING_PRIZE",
        }
    }
}

#[derive(Resource, Debug)]
pub struct Angler {
    pub machine: StateMachine<AnglerState>,
    pub transform: Transform,
    pub animation: AnimationPlayer,
}

impl Angler {
    pub fn new(transform: Transform, animation: AnimationPlayer) -> Self {
        Self {
            machine: StateMachine::new(AnglerState::Idle, None),
            transform,
            animation,
        }
    }

    /// Where the line leaves the rod, in world space.
    ///
    /// Falls back to the angler's position for a model without the anchor.
    pub fn line_anchor(&self) -> Vec3 {
        self.transform
            .anchor_world_position(STRING_PIVOT_ANCHOR)
            .unwrap_or(self.transform.position)
    }
}

impl MachineOwner for Angler {
    type State = AnglerState;
    const KIND: EntityKind = EntityKind::Angler;

    fn machine(&self) -> &StateMachine<AnglerState> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<AnglerState> {
        &mut self.machine
    }
}
