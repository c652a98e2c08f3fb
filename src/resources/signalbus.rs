//! Priority-ordered signal dispatcher.
//!
//! The [`SignalBus`] resource maps each [`Signal`] to an ordered list of
//! receivers. Receivers are plain function pointers taking the world, like
//! phase callbacks, so they can read any resource and emit further signals.
//!
//! # Ordering
//!
//! - Lower priority numbers run first.
//! - Equal priorities run in registration order (oldest first).
//! - Receivers registered without a priority use [`DEFAULT_PRIORITY`].
//!
//! Cross-entity read-after-write dependencies inside one signal's fan-out
//! are expressed with priorities: the fishing line computes the cast
//! trajectories and resets the cast clock at priority 1 on
//! `LaunchBobber`, before the bobber's priority-2 receiver runs.
//!
//! # Related
//!
//! - [`crate::systems::signals::emit`] – synchronous, reentrant delivery
//! - [`crate::events::signal::SignalEvent`] – observer event after delivery

use bevy_ecs::prelude::{Resource, World};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::signal::Signal;

/// A signal receiver.
pub type Receiver = fn(&mut World);

/// Priority given to receivers registered without one.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Nested emissions allowed before the bus refuses to go deeper.
pub const MAX_EMIT_DEPTH: u32 = 32;

#[derive(Clone, Copy)]
struct Registration {
    priority: i32,
    receiver: Receiver,
}

/// Receivers per signal, kept sorted by (priority, registration order).
#[derive(Resource, Default)]
pub struct SignalBus {
    receivers: FxHashMap<Signal, SmallVec<[Registration; 4]>>,
    depth: u32,
    emitted: u64,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a receiver. Duplicate registrations are allowed and each fires.
    pub fn register(&mut self, signal: Signal, priority: i32, receiver: Receiver) {
        let list = self.receivers.entry(signal).or_default();
        // after every receiver with priority <= ours, so ties keep registration order
        let at = list.partition_point(|r| r.priority <= priority);
        list.insert(at, Registration { priority, receiver });
    }

    /// Add a receiver at [`DEFAULT_PRIORITY`].
    pub fn register_default(&mut self, signal: Signal, receiver: Receiver) {
        self.register(signal, DEFAULT_PRIORITY, receiver);
    }

    pub fn receiver_count(&self, signal: Signal) -> usize {
        self.receivers.get(&signal).map_or(0, |list| list.len())
    }

    /// Priorities registered for `signal`, in delivery order.
    pub fn priorities(&self, signal: Signal) -> Vec<i32> {
        self.receivers
            .get(&signal)
            .map(|list| list.iter().map(|r| r.priority).collect())
            .unwrap_or_default()
    }

    /// Copy of the receivers for `signal`, in delivery order.
    ///
    /// Dispatch iterates this copy, so registrations made while a signal is
    /// being delivered only take effect on the next emission.
    pub fn snapshot(&self, signal: Signal) -> SmallVec<[Receiver; 8]> {
        self.receivers
            .get(&signal)
            .map(|list| list.iter().map(|r| r.receiver).collect())
            .unwrap_or_default()
    }

    /// Current nesting depth of emissions.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total emissions delivered since creation.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Enter one level of dispatch. Returns `false` when the depth limit is
    /// reached.
    pub(crate) fn enter(&mut self) -> bool {
        if self.depth >= MAX_EMIT_DEPTH {
            return false;
        }
        self.depth += 1;
        self.emitted += 1;
        true
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(_w: &mut World) {}
    fn b(_w: &mut World) {}

    #[test]
    fn test_register_sorts_by_priority() {
        let mut bus = SignalBus::new();
        bus.register(Signal::LaunchBobber, 2, a);
        bus.register(Signal::LaunchBobber, 1, b);
        bus.register_default(Signal::LaunchBobber, a);
        bus.register(Signal::LaunchBobber, -3, b);
        assert_eq!(bus.priorities(Signal::LaunchBobber), vec![-3, 0, 1, 2]);
    }

    #[test]
    fn test_snapshot_has_every_receiver() {
        let mut bus = SignalBus::new();
        bus.register(Signal::Cast, 1, a);
        bus.register(Signal::Cast, 3, b);
        bus.register(Signal::Reset, 3, b);
        assert_eq!(bus.snapshot(Signal::Cast).len(), 2);
        assert_eq!(bus.snapshot(Signal::Reset).len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut bus = SignalBus::new();
        bus.register_default(Signal::Bite, a);
        bus.register_default(Signal::Bite, a);
        assert_eq!(bus.receiver_count(Signal::Bite), 2);
    }

    #[test]
    fn test_unregistered_signal_is_empty() {
        let bus = SignalBus::new();
        assert_eq!(bus.receiver_count(Signal::Hook), 0);
        assert!(bus.snapshot(Signal::Hook).is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let mut bus = SignalBus::new();
        for _ in 0..MAX_EMIT_DEPTH {
            assert!(bus.enter());
        }
        assert!(!bus.enter());
        bus.leave();
        assert!(bus.enter());
    }
}
