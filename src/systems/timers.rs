//! Timer system.
//!
//! Counts the [`TimerScheduler`](crate::resources::timers::TimerScheduler)
//! down by the scaled frame delta and runs the expired callbacks. Runs first
//! in the frame schedule so timer callbacks behave like signals emitted at
//! the start of the tick.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::timers::TimerScheduler;
use crate::resources::worldtime::WorldTime;

/// Fire every timer whose delay ran out during this frame.
///
/// Expired timers are removed before any callback runs, so a callback may
/// schedule or cancel timers freely.
pub fn update_timers(world: &mut World) {
    let dt = world.get_resource::<WorldTime>().map_or(0.0, |t| t.delta);
    let fired = match world.get_resource_mut::<TimerScheduler>() {
        Some(mut scheduler) => scheduler.advance(dt),
        None => return,
    };
    if !fired.is_empty() {
        debug!("{} timer(s) fired", fired.len());
    }
    for callback in fired {
        callback(world);
    }
}
