//! Named stopwatches.
//!
//! The [`ClockRegistry`] resource hands out one [`Clock`] per name, created
//! on first access. Clocks accumulate the (scaled) frame delta while running,
//! so every phase that reads a clock sees the same elapsed time within a
//! frame regardless of frame rate.
//!
//! The cast uses one clock, [`CAST_CLOCK`](crate::consts::CAST_CLOCK), reset
//! when the bobber launches and stopped once the line has settled.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// A stopwatch measuring seconds.
///
/// New clocks start running.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    elapsed: f64,
    running: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
        }
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume counting. No effect on a running clock.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze the elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart from zero and run.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed * 1000.0
    }

    /// Add `dt` seconds if running. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if self.running && dt > 0.0 {
            self.elapsed += dt;
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ClockRegistry {
    clocks: FxHashMap<String, Clock>,
}

impl ClockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clock called `name`, created running if it does not exist yet.
    pub fn clock(&mut self, name: &str) -> &mut Clock {
        self.clocks.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Clock> {
        self.clocks.get(name)
    }

    /// Elapsed seconds of `name`, zero for a clock never accessed.
    pub fn elapsed_seconds(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, Clock::elapsed_seconds)
    }

    pub fn elapsed_ms(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, Clock::elapsed_ms)
    }

    /// Advance every running clock by `dt` seconds.
    pub fn advance_all(&mut self, dt: f64) {
        for clock in self.clocks.values_mut() {
            clock.advance(dt);
        }
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}
