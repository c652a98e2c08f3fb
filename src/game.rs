//! Scene setup and the per-frame driver.
//!
//! [`setup`] builds the whole cast scene into a world: shared resources, the
//! three entities loaded from the model store, their signal receivers, and a
//! final `Reset` so every entity starts from its known-good state.
//! [`frame_schedule`] and [`tick`] run it.

use bevy_ecs::prelude::*;
use log::info;

use crate::consts::{BOBBER_MODEL, CAST_CLIP, CAST_CLOCK, FISHERMAN_MODEL, PLUNK_CLIP};
use crate::events::signal::Signal;
use crate::events::statechange::log_state_change;
use crate::resources::angler::Angler;
use crate::resources::bobber::Bobber;
use crate::resources::camera::Camera;
use crate::resources::clocks::ClockRegistry;
use crate::resources::fish::FishTracker;
use crate::resources::fishingline::FishingLine;
use crate::resources::input::InputState;
use crate::resources::modelstore::ModelStore;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::signalbus::SignalBus;
use crate::resources::timers::TimerScheduler;
use crate::resources::worldtime::WorldTime;
use crate::systems::angler::{register_angler_receivers, update_angler};
use crate::systems::bobber::{register_bobber_receivers, update_bobber};
use crate::systems::fishingline::{register_fishing_line_receivers, update_fishing_line};
use crate::systems::signals::emit;
use crate::systems::time::update_world_time;
use crate::systems::timers::update_timers;

/// Insert `R::default()` unless the caller already provided one.
fn ensure_resource<R: Resource + Default>(world: &mut World) {
    if !world.contains_resource::<R>() {
        world.insert_resource(R::default());
    }
}

/// Build the cast scene.
///
/// Resources already present in the world (a seeded [`GameRng`], a custom
/// [`ModelStore`], an [`InputState`] with a chosen cast point, ...) are kept.
/// Fails if a model or one of its clips is missing.
pub fn setup(world: &mut World) -> Result<(), String> {
    ensure_resource::<WorldTime>(world);
    ensure_resource::<ClockRegistry>(world);
    ensure_resource::<SignalBus>(world);
    ensure_resource::<TimerScheduler>(world);
    ensure_resource::<InputState>(world);
    ensure_resource::<FishTracker>(world);
    ensure_resource::<GameRng>(world);
    ensure_resource::<Camera>(world);
    ensure_resource::<ScreenSize>(world);
    if !world.contains_resource::<ModelStore>() {
        world.insert_resource(ModelStore::with_builtin_models());
    }
    world.resource_mut::<ClockRegistry>().clock(CAST_CLOCK);

    let (angler, bobber) = {
        let store = world.resource::<ModelStore>();
        let (transform, animation) = store.load_entity(FISHERMAN_MODEL, Some(CAST_CLIP))?;
        let angler = Angler::new(transform, animation);
        let (transform, animation) = store.load_entity(BOBBER_MODEL, Some(PLUNK_CLIP))?;
        (angler, Bobber::new(transform, animation))
    };
    world.insert_resource(angler);
    world.insert_resource(FishingLine::new());
    world.insert_resource(bobber);

    world.add_observer(log_state_change);
    world.flush();

    register_angler_receivers(world);
    register_fishing_line_receivers(world);
    register_bobber_receivers(world);

    emit(world, Signal::Reset);
    info!("cast scene ready");
    Ok(())
}

/// One frame: timers first, then angler, bobber and line.
///
/// The bobber runs before the line so it has reached the end of its arc by
/// the time the line announces the landing.
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_timers, update_angler, update_bobber, update_fishing_line).chain());
    schedule
}

/// Advance time by `dt` seconds and run one frame.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
    if let Some(mut input) = world.get_resource_mut::<InputState>() {
        input.end_frame();
    }
}
