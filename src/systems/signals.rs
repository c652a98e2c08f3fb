//! Signal delivery.
//!
//! [`emit`] runs every receiver registered for a signal on the
//! [`SignalBus`] synchronously, in priority order, before returning. A
//! receiver may emit further signals; those nested emissions are delivered
//! immediately, before the outer dispatch moves on to its next receiver.
//!
//! The receiver list is copied before the first receiver runs. Nesting is
//! capped at [`MAX_EMIT_DEPTH`]; an emission past the cap is dropped with an
//! error log instead of recursing forever.

use bevy_ecs::prelude::*;
use log::{debug, error, warn};

use crate::events::signal::{Signal, SignalEvent};
use crate::resources::signalbus::{MAX_EMIT_DEPTH, SignalBus};

/// Deliver `signal` to all its receivers, then trigger a [`SignalEvent`].
pub fn emit(world: &mut World, signal: Signal) {
    let receivers = {
        let Some(mut bus) = world.get_resource_mut::<SignalBus>() else {
            warn!("emit({}) without a SignalBus resource", signal.name());
            return;
        };
        if !bus.enter() {
            error!(
                "emit({}) refused: more than {} nested emissions, is there a signal cycle?",
                signal.name(),
                MAX_EMIT_DEPTH
            );
            return;
        }
        bus.snapshot(signal)
    };

    debug!("emit {} -> {} receiver(s)", signal.name(), receivers.len());
    for receiver in receivers {
        receiver(world);
    }

    if let Some(mut bus) = world.get_resource_mut::<SignalBus>() {
        bus.leave();
    }
    world.trigger(SignalEvent { signal });
}

/// Register a receiver on the world's bus, creating the bus if needed.
pub fn connect(world: &mut World, signal: Signal, priority: i32, receiver: fn(&mut World)) {
    world
        .get_resource_or_insert_with(SignalBus::new)
        .register(signal, priority, receiver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Log(Vec<&'static str>);

    fn first(world: &mut World) {
        world.resource_mut::<Log>().0.push("first");
    }
    fn second(world: &mut World) {
        world.resource_mut::<Log>().0.push("second");
    }
    fn third(world: &mut World) {
        world.resource_mut::<Log>().0.push("third");
    }

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(SignalBus::new());
        world.insert_resource(Log::default());
        world
    }

    #[test]
    fn test_emit_runs_in_priority_then_registration_order() {
        let mut world = make_world();
        connect(&mut world, Signal::Cast, 5, third);
        connect(&mut world, Signal::Cast, 1, first);
        connect(&mut world, Signal::Cast, 5, second);
        // ties keep registration order: third was registered before second
        emit(&mut world, Signal::Cast);
        assert_eq!(world.resource::<Log>().0, vec!["first", "third", "second"]);
    }

    #[test]
    fn test_emit_without_receivers_is_noop() {
        let mut world = make_world();
        emit(&mut world, Signal::Hook);
        assert!(world.resource::<Log>().0.is_empty());
        assert_eq!(world.resource::<SignalBus>().depth(), 0);
        assert_eq!(world.resource::<SignalBus>().emitted(), 1);
    }

    #[test]
    fn test_emit_without_bus_does_not_panic() {
        let mut world = World::new();
        emit(&mut world, Signal::Reset);
    }

    fn nested_outer(world: &mut World) {
        world.resource_mut::<Log>().0.push("outer-before");
        emit(world, Signal::Bite);
        world.resource_mut::<Log>().0.push("outer-after");
    }
    fn nested_inner(world: &mut World) {
        world.resource_mut::<Log>().0.push("inner");
    }

    #[test]
    fn test_nested_emission_is_immediate() {
        let mut world = make_world();
        connect(&mut world, Signal::Hook, 0, nested_outer);
        connect(&mut world, Signal::Bite, 0, nested_inner);
        emit(&mut world, Signal::Hook);
        assert_eq!(
            world.resource::<Log>().0,
            vec!["outer-before", "inner", "outer-after"]
        );
        assert_eq!(world.resource::<SignalBus>().depth(), 0);
    }

    fn self_cycle(world: &mut World) {
        world.resource_mut::<Log>().0.push("cycle");
        emit(world, Signal::StateChange);
    }

    #[test]
    fn test_cycle_is_cut_at_max_depth() {
        let mut world = make_world();
        connect(&mut world, Signal::StateChange, 0, self_cycle);
        emit(&mut world, Signal::StateChange);
        assert_eq!(world.resource::<Log>().0.len(), MAX_EMIT_DEPTH as usize);
        assert_eq!(world.resource::<SignalBus>().depth(), 0);
    }
}
