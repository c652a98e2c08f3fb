//! State machine helpers.
//!
//! Generic over any singleton resource implementing
//! [`MachineOwner`](crate::components::statemachine::MachineOwner):
//!
//! - [`transition`] – swap the state/behavior pair and announce it
//! - [`run_behavior`] – invoke the active per-frame behavior
//! - [`current_state`] – read-only query of the current tag

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::statemachine::{Behavior, MachineOwner, StateTag};
use crate::events::statechange::StateChangeEvent;

/// Move `T` to `state` with `behavior`, then trigger a [`StateChangeEvent`].
pub fn transition<T: MachineOwner>(world: &mut World, state: T::State, behavior: Option<Behavior>) {
    let from = world.resource_mut::<T>().machine_mut().set(state, behavior);
    debug!("{:?} {} -> {}", T::KIND, from.name(), state.name());
    world.trigger(StateChangeEvent {
        entity: T::KIND,
        from: from.name(),
        to: state.name(),
    });
}

/// Run the behavior of `T`'s current state, if any.
///
/// The function pointer is copied out first, so the behavior is free to
/// transition `T` or emit signals.
pub fn run_behavior<T: MachineOwner>(world: &mut World) {
    let behavior = world
        .get_resource::<T>()
        .and_then(|owner| owner.machine().behavior());
    if let Some(behavior) = behavior {
        behavior(world);
    }
}

pub fn current_state<T: MachineOwner>(world: &World) -> Option<T::State> {
    world.get_resource::<T>().map(|owner| owner.machine().get())
}
