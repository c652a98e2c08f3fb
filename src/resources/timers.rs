//! Cancellable one-shot timers.
//!
//! The [`TimerScheduler`] resource holds callbacks waiting for a delay to run
//! out. Each [`schedule`](TimerScheduler::schedule) returns a
//! [`TimerHandle`] that can later be passed to
//! [`cancel`](TimerScheduler::cancel). Cancelling is idempotent: unknown,
//! fired or already cancelled handles are ignored.
//!
//! Timers do not fire on their own. [`update_timers`](crate::systems::timers::update_timers)
//! counts them down with the frame delta at the start of each tick and runs
//! the expired callbacks on the simulation thread.

use bevy_ecs::prelude::{Resource, World};
use smallvec::SmallVec;

/// Callback run when a timer expires.
pub type TimerCallback = fn(&mut World);

/// Identifies one scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct PendingTimer {
    handle: TimerHandle,
    remaining: f32,
    callback: TimerCallback,
}

#[derive(Resource, Default)]
pub struct TimerScheduler {
    pending: Vec<PendingTimer>,
    next_id: u64,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once `delay` seconds of simulation time have passed.
    pub fn schedule(&mut self, delay: f32, callback: TimerCallback) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            remaining: delay.max(0.0),
            callback,
        });
        handle
    }

    /// Drop a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Seconds left on a pending timer.
    pub fn remaining(&self, handle: TimerHandle) -> Option<f32> {
        self.pending
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.remaining)
    }

    /// Count every timer down by `dt` and remove the ones that expired.
    ///
    /// Returns the expired callbacks in scheduling order.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[TimerCallback; 4]> {
        let mut fired = SmallVec::new();
        for timer in self.pending.iter_mut() {
            timer.remaining -= dt;
        }
        self.pending.retain(|t| {
            if t.remaining <= 0.0 {
                fired.push(t.callback);
                false
            } else {
                true
            }
        });
        fired
    }
}
