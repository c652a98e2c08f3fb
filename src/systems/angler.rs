//! Angler receivers, behaviors, actions and queries.
//!
//! The angler starts every cast: [`begin_cast`] is the input-triggered
//! action, and the end of the cast animation launches the bobber. Every
//! angler transition is also announced on the bus as `StateChange`.
//!
//! | From                                   | Trigger              | To             |
//! |----------------------------------------|----------------------|----------------|
//! | IDLE, FISHING, FISH_ON, HOLDING_PRIZE  | [`begin_cast`]       | CASTING        |
//! | CASTING                                | cast animation ends  | FISHING        |
//! | CASTING, FISHING, HOLDING_PRIZE        | reel held            | IDLE           |
//! | any                                    | `Reset`              | IDLE           |
//! | any                                    | `FishOn`             | FISH_ON        |
//! | any                                    | `FishFight`          | REELING        |
//! | any                                    | `FishCaught`         | HOLDING_PRIZE  |

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{error, info};

use crate::components::statemachine::Behavior;
use crate::consts::{CAST_ANIMATION_SPEED, CAST_CLIP};
use crate::events::signal::Signal;
use crate::resources::angler::{Angler, AnglerState};
use crate::resources::fish::FishTracker;
use crate::resources::input::InputState;
use crate::resources::signalbus::DEFAULT_PRIORITY;
use crate::resources::worldtime::WorldTime;
use crate::systems::bobber::bobber_top_point;
use crate::systems::signals::{connect, emit};
use crate::systems::statemachine::{current_state, run_behavior, transition};

pub fn register_angler_receivers(world: &mut World) {
    connect(world, Signal::Reset, DEFAULT_PRIORITY, on_reset);
    connect(world, Signal::FishOn, DEFAULT_PRIORITY, on_fish_on);
    connect(world, Signal::FishFight, DEFAULT_PRIORITY, on_fish_fight);
    connect(world, Signal::FishCaught, DEFAULT_PRIORITY, on_fish_caught);
}

/// Per-frame system: advance the cast animation, then run the behavior.
pub fn update_angler(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    let finished = world
        .resource_mut::<Angler>()
        .animation
        .update(dt * CAST_ANIMATION_SPEED);
    if finished {
        on_cast_animation_finished(world);
    }
    run_behavior::<Angler>(world);
}

fn set_state(world: &mut World, state: AnglerState) {
    transition::<Angler>(world, state, behavior_for(state));
    emit(world, Signal::StateChange);
}

fn behavior_for(state: AnglerState) -> Option<Behavior> {
    let behavior: Behavior = match state {
        AnglerState::Idle => while_idle,
        AnglerState::Casting | AnglerState::Fishing => while_watching_bobber,
        AnglerState::FishOn => while_fish_on,
        AnglerState::Reeling => while_reeling,
        AnglerState::HoldingPrize => while_holding_prize,
    };
    Some(behavior)
}

// ===== actions =====

/// Start a cast. Returns whether it was accepted.
///
/// Ignored while a cast is already in progress (or a fish is being reeled).
pub fn begin_cast(world: &mut World) -> bool {
    let state = world.resource::<Angler>().machine.get();
    if !state.accepts_cast() {
        return false;
    }
    set_state(world, AnglerState::Casting);
    emit(world, Signal::Cast);

    let mut angler = world.resource_mut::<Angler>();
    angler.animation.reset();
    if let Err(e) = angler.animation.play(CAST_CLIP, 1) {
        error!("begin_cast: {}", e);
    }
    info!("cast started");
    true
}

/// Completion of the cast animation: the line leaves the rod.
fn on_cast_animation_finished(world: &mut World) {
    if !world.resource::<Angler>().machine.is(AnglerState::Casting) {
        return;
    }
    set_state(world, AnglerState::Fishing);
    emit(world, Signal::LaunchBobber);
}

/// Abort the cast and pull the line back in.
fn cancel(world: &mut World) {
    world.resource_mut::<Angler>().animation.stop();
    info!("cast cancelled");
    set_state(world, AnglerState::Idle);
    emit(world, Signal::ReelOut);
}

fn reel_held(world: &World) -> bool {
    world
        .get_resource::<InputState>()
        .is_some_and(|input| input.reel.active)
}

fn face(world: &mut World, target: Vec3) {
    world.resource_mut::<Angler>().transform.look_at(target);
}

// ===== receivers =====

fn on_reset(world: &mut World) {
    world.resource_mut::<Angler>().animation.stop();
    set_state(world, AnglerState::Idle);
}

fn on_fish_on(world: &mut World) {
    set_state(world, AnglerState::FishOn);
}

fn on_fish_fight(world: &mut World) {
    set_state(world, AnglerState::Reeling);
}

fn on_fish_caught(world: &mut World) {
    set_state(world, AnglerState::HoldingPrize);
}

// ===== behaviors =====

fn while_idle(world: &mut World) {
    let aim = world
        .get_resource::<InputState>()
        .map_or(Vec3::Z, |input| input.aim_point);
    face(world, aim);
}

fn while_watching_bobber(world: &mut World) {
    if reel_held(world) {
        cancel(world);
        return;
    }
    let target = bobber_top_point(world);
    face(world, target);
}

fn while_fish_on(world: &mut World) {
    if reel_held(world) {
        emit(world, Signal::FishFight);
    }
}

fn while_reeling(world: &mut World) {
    let target = fish_position(world);
    face(world, target);
}

fn while_holding_prize(world: &mut World) {
    if reel_held(world) {
        cancel(world);
    }
}

// ===== queries =====

pub fn angler_state(world: &World) -> Option<AnglerState> {
    current_state::<Angler>(world)
}

pub fn angler_position(world: &World) -> Vec3 {
    world.resource::<Angler>().transform.position
}

/// Where the line leaves the rod tip, in world space.
pub fn fishing_line_anchor_point(world: &World) -> Vec3 {
    world.resource::<Angler>().line_anchor()
}

pub fn cast_animation_is_playing(world: &World) -> bool {
    world.resource::<Angler>().animation.is_running()
}

/// Live position of the hooked fish, origin when nothing publishes one.
pub fn fish_position(world: &World) -> Vec3 {
    world
        .get_resource::<FishTracker>()
        .map_or(Vec3::ZERO, |fish| fish.position)
}
