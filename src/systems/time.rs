//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta, and
//! advances every running clock in the
//! [`ClockRegistry`](crate::resources::clocks::ClockRegistry) by the same
//! scaled amount.
use bevy_ecs::prelude::*;

use crate::resources::clocks::ClockRegistry;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale`, writes both `elapsed` and `delta` and
/// bumps `frame_count`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let scaled_dt = {
        let mut wt = world.resource_mut::<WorldTime>();
        let scaled_dt = dt * wt.time_scale;
        wt.elapsed += scaled_dt;
        wt.delta = scaled_dt;
        wt.frame_count += 1;
        scaled_dt
    };
    if let Some(mut clocks) = world.get_resource_mut::<ClockRegistry>() {
        clocks.advance_all(scaled_dt as f64);
    }
}
