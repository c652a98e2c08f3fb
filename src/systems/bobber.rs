//! Bobber receivers, behaviors and queries.
//!
//! # Transitions
//!
//! | Signal          | Priority | Effect                                              |
//! |-----------------|----------|-----------------------------------------------------|
//! | `Reset`         | default  | rest pose, cancel plunk, `HIDDEN`                   |
//! | `Cast`          | 2        | cancel plunk, hide, move to the cast point, `HIDDEN`|
//! | `LaunchBobber`  | 2        | show, plan the arc, `CASTING`                       |
//! | `BobberLanded`  | default  | `BOBBING`                                           |
//! | `BeginFishing`  | default  | schedule the bite timer                             |
//! | `Bite`          | default  | `PLUNKING`                                          |
//! | `ReelOut`       | default  | hide, cancel plunk, `HIDDEN`                        |
//!
//! The bobber never announces its own landing; the fishing line does.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, error, info};

use crate::consts::{BOB_AMPLITUDE, BOB_FREQUENCY, CAST_CLOCK, PLUNK_CLIP, PLUNK_REPETITIONS};
use crate::events::signal::Signal;
use crate::resources::bobber::{Bobber, BobberState};
use crate::resources::camera::Camera;
use crate::resources::clocks::ClockRegistry;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::signalbus::DEFAULT_PRIORITY;
use crate::resources::timers::TimerScheduler;
use crate::resources::worldtime::WorldTime;
use crate::systems::angler::fishing_line_anchor_point;
use crate::systems::signals::{connect, emit};
use crate::systems::statemachine::{current_state, run_behavior, transition};

pub const CAST_PRIORITY: i32 = 2;
pub const LAUNCH_PRIORITY: i32 = 2;

pub fn register_bobber_receivers(world: &mut World) {
    connect(world, Signal::Reset, DEFAULT_PRIORITY, on_reset);
    connect(world, Signal::Cast, CAST_PRIORITY, on_cast);
    connect(world, Signal::LaunchBobber, LAUNCH_PRIORITY, on_launch_bobber);
    connect(world, Signal::BobberLanded, DEFAULT_PRIORITY, on_bobber_landed);
    connect(world, Signal::BeginFishing, DEFAULT_PRIORITY, on_begin_fishing);
    connect(world, Signal::Bite, DEFAULT_PRIORITY, on_bite);
    connect(world, Signal::ReelOut, DEFAULT_PRIORITY, on_reel_out);
}

/// Per-frame system: run the bobber's current behavior.
pub fn update_bobber(world: &mut World) {
    run_behavior::<Bobber>(world);
}

// ===== receivers =====

fn on_reset(world: &mut World) {
    cancel_plunk(world);
    world.resource_mut::<Bobber>().rest_pose();
    transition::<Bobber>(world, BobberState::Hidden, None);
}

fn on_cast(world: &mut World) {
    cancel_plunk(world);
    let cast_point = world
        .get_resource::<InputState>()
        .map_or(Vec3::ZERO, |input| input.cast_point);
    {
        let mut bobber = world.resource_mut::<Bobber>();
        bobber.transform.hide();
        bobber.transform.position = cast_point;
    }
    transition::<Bobber>(world, BobberState::Hidden, None);
}

fn on_launch_bobber(world: &mut World) {
    let anchor = fishing_line_anchor_point(world);
    {
        let mut bobber = world.resource_mut::<Bobber>();
        bobber.transform.show();
        bobber.plan_flight(anchor);
    }
    transition::<Bobber>(world, BobberState::Casting, Some(while_casting));
}

fn on_bobber_landed(world: &mut World) {
    transition::<Bobber>(world, BobberState::Bobbing, Some(while_bobbing));
}

fn on_begin_fishing(world: &mut World) {
    schedule_plunk(world);
}

fn on_bite(world: &mut World) {
    transition::<Bobber>(world, BobberState::Plunking, Some(while_plunking));
}

fn on_reel_out(world: &mut World) {
    world.resource_mut::<Bobber>().transform.hide();
    cancel_plunk(world);
    transition::<Bobber>(world, BobberState::Hidden, None);
}

// ===== behaviors =====

fn while_casting(world: &mut World) {
    let elapsed_ms = world.resource::<ClockRegistry>().elapsed_ms(CAST_CLOCK);
    world.resource_mut::<Bobber>().follow_flight(elapsed_ms);
}

fn while_bobbing(world: &mut World) {
    let elapsed = world.resource::<WorldTime>().elapsed;
    world.resource_mut::<Bobber>().transform.position.y =
        (elapsed * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
}

fn while_plunking(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    let finished = world.resource_mut::<Bobber>().animation.update(dt);
    if finished {
        debug!("plunk animation finished");
        emit(world, Signal::Reset);
    }
}

// ===== bite timer =====

/// Arm the bite timer with a random delay, replacing any pending one.
fn schedule_plunk(world: &mut World) {
    let delay_ms = world
        .get_resource_or_insert_with(GameRng::default)
        .bite_delay_ms();
    let previous = world.resource_mut::<Bobber>().plunk_timer.take();
    let handle = {
        let mut timers = world.get_resource_or_insert_with(TimerScheduler::new);
        if let Some(previous) = previous {
            timers.cancel(previous);
        }
        timers.schedule(delay_ms as f32 / 1000.0, plunk)
    };
    world.resource_mut::<Bobber>().plunk_timer = Some(handle);
    info!("bite in {} ms", delay_ms);
}

/// Bite timer callback.
fn plunk(world: &mut World) {
    world.resource_mut::<Bobber>().plunk_timer = None;
    emit(world, Signal::Bite);
    let mut bobber = world.resource_mut::<Bobber>();
    bobber.animation.reset();
    if let Err(e) = bobber.animation.play(PLUNK_CLIP, PLUNK_REPETITIONS) {
        error!("plunk: {}", e);
    }
}

/// Cancel the pending bite timer and stop the plunk animation.
///
/// Safe to call at any time, any number of times.
pub fn cancel_plunk(world: &mut World) {
    let pending = world.resource_mut::<Bobber>().plunk_timer.take();
    if let Some(handle) = pending {
        if let Some(mut timers) = world.get_resource_mut::<TimerScheduler>() {
            timers.cancel(handle);
        }
    }
    let mut bobber = world.resource_mut::<Bobber>();
    bobber.animation.stop();
    bobber.animation.reset();
}

// ===== queries =====

pub fn bobber_state(world: &World) -> Option<BobberState> {
    current_state::<Bobber>(world)
}

pub fn bobber_position(world: &World) -> Vec3 {
    world.resource::<Bobber>().transform.position
}

/// World position of the line attachment on top of the bobber.
pub fn bobber_top_point(world: &World) -> Vec3 {
    world.resource::<Bobber>().top_point()
}

/// Whether a bite timer is still waiting to fire.
pub fn bobber_bite_pending(world: &World) -> bool {
    let Some(handle) = world.resource::<Bobber>().plunk_timer else {
        return false;
    };
    world
        .get_resource::<TimerScheduler>()
        .is_some_and(|timers| timers.is_pending(handle))
}

/// Pixel coordinates of the bobber, for overlay UI.
///
/// `None` without a camera.
pub fn bobber_screen_coords(world: &World) -> Option<Vec3> {
    let camera = world.get_resource::<Camera>()?;
    let screen = world.get_resource::<ScreenSize>().copied().unwrap_or_default();
    Some(camera.project_to_screen(bobber_position(world), &screen))
}
