//! Fishing line receivers, behaviors and queries.
//!
//! The line is the single source of truth for "the bobber has landed": while
//! `CASTING` it watches the cast clock and emits `BobberLanded` once the cast
//! duration has passed, then keeps settling from arc to sag until the
//! descend duration is reached and emits `BeginFishing`.
//!
//! # Priorities
//!
//! On `LaunchBobber` the line runs at priority 1, ahead of the bobber, so the
//! trajectories exist and the cast clock reads zero before anything else
//! looks at them. On `Cast` it runs last (priority 3).

use bevy_ecs::prelude::*;
use log::info;

use crate::consts::{CAST_CLOCK, CAST_TIME_MS, DESCEND_TIME_MS};
use crate::events::signal::Signal;
use crate::resources::clocks::ClockRegistry;
use crate::resources::fishingline::{FishingLine, FishingLineState};
use crate::resources::signalbus::DEFAULT_PRIORITY;
use crate::systems::angler::{fish_position, fishing_line_anchor_point};
use crate::systems::bobber::bobber_top_point;
use crate::systems::signals::{connect, emit};
use crate::systems::statemachine::{current_state, run_behavior, transition};

pub const LAUNCH_PRIORITY: i32 = 1;
pub const CAST_PRIORITY: i32 = 3;

pub fn register_fishing_line_receivers(world: &mut World) {
    connect(world, Signal::Reset, DEFAULT_PRIORITY, on_reset);
    connect(world, Signal::Cast, CAST_PRIORITY, on_cast);
    connect(world, Signal::LaunchBobber, LAUNCH_PRIORITY, on_launch_bobber);
    connect(world, Signal::BobberLanded, DEFAULT_PRIORITY, on_bobber_landed);
    connect(world, Signal::BeginFishing, DEFAULT_PRIORITY, on_begin_fishing);
    connect(world, Signal::Hook, DEFAULT_PRIORITY, on_hook);
    connect(world, Signal::ReelOut, DEFAULT_PRIORITY, on_reel_out);
}

/// Per-frame system: run the line's current behavior.
pub fn update_fishing_line(world: &mut World) {
    run_behavior::<FishingLine>(world);
}

fn cast_elapsed_ms(world: &World) -> f64 {
    world.resource::<ClockRegistry>().elapsed_ms(CAST_CLOCK)
}

// receivers

fn on_reset(world: &mut World) {
    world.resource_mut::<FishingLine>().hide();
    world.resource_mut::<ClockRegistry>().clock(CAST_CLOCK).reset();
    transition::<FishingLine>(world, FishingLineState::Hidden, None);
}

fn on_cast(world: &mut World) {
    world.resource_mut::<FishingLine>().clear();
    transition::<FishingLine>(world, FishingLineState::Hidden, None);
}

fn on_launch_bobber(world: &mut World) {
    let anchor = fishing_line_anchor_point(world);
    let target = bobber_top_point(world);
    {
        let mut line = world.resource_mut::<FishingLine>();
        line.show();
        line.plan_cast(anchor, target);
    }
    world.resource_mut::<ClockRegistry>().clock(CAST_CLOCK).reset();
    info!("line launched towards ({:.1}, {:.1}, {:.1})", target.x, target.y, target.z);
    transition::<FishingLine>(world, FishingLineState::Casting, Some(while_casting));
}

fn on_bobber_landed(world: &mut World) {
    world.resource_mut::<FishingLine>().reveal_all();
    transition::<FishingLine>(world, FishingLineState::Descending, Some(while_descending));
}

fn on_begin_fishing(world: &mut World) {
    transition::<FishingLine>(
        world,
        FishingLineState::AttachedToBobber,
        Some(while_attached_to_bobber),
    );
}

fn on_hook(world: &mut World) {
    world.resource_mut::<FishingLine>().show();
    transition::<FishingLine>(
        world,
        FishingLineState::AttachedToFish,
        Some(while_attached_to_fish),
    );
}

fn on_reel_out(world: &mut World) {
    world.resource_mut::<FishingLine>().hide();
    transition::<FishingLine>(world, FishingLineState::Hidden, None);
}

// behaviors

fn while_casting(world: &mut World) {
    let elapsed = cast_elapsed_ms(world);
    world.resource_mut::<FishingLine>().reveal_for(elapsed);
    if elapsed >= CAST_TIME_MS {
        info!("bobber landed after {:.0} ms", elapsed);
        emit(world, Signal::BobberLanded);
    }
    descend_step(world);
}

fn while_descending(world: &mut World) {
    descend_step(world);
}

/// Settle the line from arc to sag. The descent is timed from the launch.
fn descend_step(world: &mut World) {
    let elapsed = cast_elapsed_ms(world);
    let alpha = (elapsed / DESCEND_TIME_MS) as f32;
    world.resource_mut::<FishingLine>().settle(alpha);
    if elapsed >= DESCEND_TIME_MS {
        world.resource_mut::<ClockRegistry>().clock(CAST_CLOCK).stop();
        emit(world, Signal::BeginFishing);
    }
}

fn while_attached_to_bobber(world: &mut World) {
    let tip = bobber_top_point(world);
    world.resource_mut::<FishingLine>().pin_to(tip);
}

fn while_attached_to_fish(world: &mut World) {
    let from = fishing_line_anchor_point(world);
    let to = fish_position(world);
    world.resource_mut::<FishingLine>().draw_segment(from, to);
}

// queries

pub fn fishing_line_state(world: &World) -> Option<FishingLineState> {
    current_state::<FishingLine>(world)
}
