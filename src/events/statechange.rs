//! Entity state transition event.
//!
//! [`StateChangeEvent`] is triggered whenever one of the cast entities swaps
//! its state/behavior pair (see
//! [`transition`](crate::systems::statemachine::transition)). It is purely
//! informational: the entities themselves coordinate through signals only.

use bevy_ecs::prelude::*;
use log::debug;

/// Which of the cooperating entities changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Angler,
    Bobber,
    FishingLine,
}

/// Event emitted after an entity transition.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChangeEvent {
    /// The entity that transitioned.
    pub entity: EntityKind,
    /// Tag name of the state it left.
    pub from: &'static str,
    /// Tag name of the state it entered.
    pub to: &'static str,
}

/// Observer that logs every transition at debug level.
pub fn log_state_change(trigger: On<StateChangeEvent>) {
    let event = trigger.event();
    debug!("{:?}: {} -> {}", event.entity, event.from, event.to);
}
