//! Cast sequence integration tests.
//!
//! Builds the full scene with `game::setup` and drives it frame by frame with
//! `game::tick`. Frame deltas are powers of two so elapsed times add up
//! exactly.

use bevy_ecs::prelude::*;
use glam::Vec3;

use anglerengine::consts::{ARC_POINT_COUNT, CAST_CLOCK, CAST_TIME_MS};
use anglerengine::events::signal::{Signal, SignalEvent};
use anglerengine::game;
use anglerengine::resources::angler::{Angler, AnglerState};
use anglerengine::resources::bobber::{Bobber, BobberState};
use anglerengine::resources::clocks::ClockRegistry;
use anglerengine::resources::fish::FishTracker;
use anglerengine::resources::fishingline::{FishingLine, FishingLineState};
use anglerengine::resources::input::InputState;
use anglerengine::resources::rng::GameRng;
use anglerengine::resources::signalbus::SignalBus;
use anglerengine::resources::timers::TimerScheduler;
use anglerengine::systems::angler::{
    angler_state, begin_cast, cast_animation_is_playing, fishing_line_anchor_point,
};
use anglerengine::systems::bobber::{
    bobber_bite_pending, bobber_position, bobber_screen_coords, bobber_state, bobber_top_point,
    cancel_plunk,
};
use anglerengine::systems::fishingline::fishing_line_state;
use anglerengine::systems::signals::emit;

/// 1/32 s: 11 frames = 343.75 ms, 12 frames = 375 ms.
const DT: f32 = 0.03125;
const CAST_POINT: Vec3 = Vec3::new(4.0, 0.0, 40.0);

#[derive(Resource, Default)]
struct Seen(Vec<Signal>);

impl Seen {
    fn count(&self, signal: Signal) -> usize {
        self.0.iter().filter(|s| **s == signal).count()
    }
}

fn make_world() -> (World, Schedule) {
    let mut world = World::new();
    world.insert_resource(GameRng::with_seed(1));
    let mut input = InputState::default();
    input.aim_at(CAST_POINT);
    world.insert_resource(input);
    world.insert_resource(Seen::default());
    world.add_observer(|trigger: On<SignalEvent>, mut seen: ResMut<Seen>| {
        seen.0.push(trigger.event().signal);
    });
    world.flush();
    game::setup(&mut world).expect("setup");
    (world, game::frame_schedule())
}

fn run_frames(world: &mut World, schedule: &mut Schedule, frames: u32) {
    for _ in 0..frames {
        game::tick(world, schedule, DT);
    }
}

/// Tick until `done` holds, at most `max_frames` frames.
fn run_until(
    world: &mut World,
    schedule: &mut Schedule,
    max_frames: u32,
    done: impl Fn(&World) -> bool,
) -> bool {
    for _ in 0..max_frames {
        if done(world) {
            return true;
        }
        game::tick(world, schedule, DT);
    }
    done(world)
}

fn cast_elapsed_ms(world: &World) -> f64 {
    world.resource::<ClockRegistry>().elapsed_ms(CAST_CLOCK)
}

fn launch(world: &mut World) {
    emit(world, Signal::Cast);
    emit(world, Signal::LaunchBobber);
}

fn assert_initial(world: &World) {
    assert_eq!(angler_state(world), Some(AnglerState::Idle));
    assert_eq!(bobber_state(world), Some(BobberState::Hidden));
    assert_eq!(fishing_line_state(world), Some(FishingLineState::Hidden));
    assert_eq!(world.resource::<TimerScheduler>().pending_count(), 0);
    assert!(!bobber_bite_pending(world));
    assert!(!world.resource::<Bobber>().transform.visible);
    assert!(!world.resource::<FishingLine>().geometry.visible);
    let clock = world
        .resource::<ClockRegistry>()
        .get(CAST_CLOCK)
        .expect("cast clock");
    assert_eq!(clock.elapsed_seconds(), 0.0);
    assert!(clock.is_running());
}

#[test]
fn setup_starts_every_entity_in_its_initial_state() {
    let (world, _) = make_world();
    assert_initial(&world);
    assert_eq!(world.resource::<Seen>().0, vec![Signal::StateChange, Signal::Reset]);
}

#[test]
fn launch_receivers_are_ordered_line_before_bobber() {
    let (world, _) = make_world();
    let bus = world.resource::<SignalBus>();
    assert_eq!(bus.priorities(Signal::LaunchBobber), vec![1, 2]);
    assert_eq!(bus.priorities(Signal::Cast), vec![2, 3]);
}

#[test]
fn launch_computes_consistent_trajectories() {
    let (mut world, _) = make_world();
    launch(&mut world);

    let anchor = fishing_line_anchor_point(&world);
    let line = world.resource::<FishingLine>();
    let bobber = world.resource::<Bobber>();
    assert_eq!(line.launch_points().len(), ARC_POINT_COUNT);
    assert_eq!(line.descended_points().len(), ARC_POINT_COUNT);
    assert_eq!(bobber.trajectory().len(), ARC_POINT_COUNT);

    assert_eq!(line.launch_points()[0], anchor);
    assert_eq!(bobber.trajectory()[0], anchor);
    // the line ends on top of the bobber, the bobber's own arc on the cast point
    assert_eq!(*line.launch_points().last().unwrap(), bobber.top_point());
    assert_eq!(*bobber.trajectory().last().unwrap(), CAST_POINT);
    assert_eq!(cast_elapsed_ms(&world), 0.0);
}

#[test]
fn end_to_end_cast_reaches_attached_line_and_pending_bite() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    assert_eq!(bobber_state(&world), Some(BobberState::Casting));
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Casting));
    assert!(world.resource::<Bobber>().transform.visible);
    assert!(world.resource::<FishingLine>().geometry.visible);

    // 343.75 ms: still in flight
    run_frames(&mut world, &mut schedule, 11);
    assert_eq!(bobber_state(&world), Some(BobberState::Casting));
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Casting));

    // 375 ms: landed
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(bobber_state(&world), Some(BobberState::Bobbing));
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Descending));
    assert_eq!(world.resource::<FishingLine>().reveal(), ARC_POINT_COUNT);

    // 875 ms: still settling
    run_frames(&mut world, &mut schedule, 16);
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Descending));
    assert!(!bobber_bite_pending(&world));

    // 906.25 ms: settled
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(
        fishing_line_state(&world),
        Some(FishingLineState::AttachedToBobber)
    );
    assert_eq!(bobber_state(&world), Some(BobberState::Bobbing));
    assert!(bobber_bite_pending(&world));
    assert!(!world.resource::<ClockRegistry>().get(CAST_CLOCK).unwrap().is_running());

    let seen = world.resource::<Seen>();
    assert_eq!(seen.count(Signal::BobberLanded), 1);
    assert_eq!(seen.count(Signal::BeginFishing), 1);
}

#[test]
fn bobber_follows_arc_index_from_elapsed_time() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    let step = CAST_TIME_MS / ARC_POINT_COUNT as f64;
    for _ in 0..11 {
        game::tick(&mut world, &mut schedule, DT);
        let ms = cast_elapsed_ms(&world);
        let index = ((ms / step).floor() as usize).min(ARC_POINT_COUNT - 1);
        let expected = world.resource::<Bobber>().trajectory()[index];
        assert_eq!(bobber_position(&world), expected, "at {ms} ms");
    }
}

#[test]
fn bobber_lands_on_the_cast_point_before_the_line_reports_it() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 12);
    let p = bobber_position(&world);
    assert_eq!((p.x, p.z), (CAST_POINT.x, CAST_POINT.z));
}

#[test]
fn landed_is_emitted_exactly_once_per_cast() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 64);
    assert_eq!(world.resource::<Seen>().count(Signal::BobberLanded), 1);

    launch(&mut world);
    run_frames(&mut world, &mut schedule, 64);
    assert_eq!(world.resource::<Seen>().count(Signal::BobberLanded), 2);
}

#[test]
fn line_reveal_never_retreats_while_casting() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    let mut last = 0;
    for _ in 0..12 {
        game::tick(&mut world, &mut schedule, DT);
        let reveal = world.resource::<FishingLine>().reveal();
        assert!(reveal >= last);
        last = reveal;
    }
    assert_eq!(last, ARC_POINT_COUNT);
}

#[test]
fn attached_line_tracks_the_bobber_top() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 29);
    assert_eq!(
        fishing_line_state(&world),
        Some(FishingLineState::AttachedToBobber)
    );
    run_frames(&mut world, &mut schedule, 3);
    let tip = *world.resource::<FishingLine>().geometry.points().last().unwrap();
    assert_eq!(tip, bobber_top_point(&world));
}

#[test]
fn reset_from_any_state_returns_to_initial() {
    // frames after launch: casting, descending, attached
    for frames in [0, 5, 14, 40] {
        let (mut world, mut schedule) = make_world();
        launch(&mut world);
        run_frames(&mut world, &mut schedule, frames);
        emit(&mut world, Signal::Reset);
        assert_initial(&world);
    }
}

#[test]
fn reset_while_plunking_returns_to_initial() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    assert!(run_until(&mut world, &mut schedule, 200, |w| {
        bobber_state(w) == Some(BobberState::Plunking)
    }));
    assert!(world.resource::<Bobber>().animation.is_running());

    emit(&mut world, Signal::Reset);
    assert_initial(&world);
    assert!(!world.resource::<Bobber>().animation.is_running());
}

#[test]
fn plunk_completion_resets_the_scene() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    assert!(run_until(&mut world, &mut schedule, 200, |w| {
        bobber_state(w) == Some(BobberState::Plunking)
    }));
    assert_eq!(world.resource::<Seen>().count(Signal::Bite), 1);

    // three one-second repetitions
    assert!(run_until(&mut world, &mut schedule, 3 * 32 + 2, |w| {
        bobber_state(w) == Some(BobberState::Hidden)
    }));
    assert_initial(&world);
}

#[test]
fn cancel_is_safe_without_pending_timer() {
    let (mut world, _) = make_world();
    cancel_plunk(&mut world);
    cancel_plunk(&mut world);
    assert!(!bobber_bite_pending(&world));
}

#[test]
fn cancelled_bite_never_fires() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 29);
    assert!(bobber_bite_pending(&world));

    cancel_plunk(&mut world);
    cancel_plunk(&mut world);
    run_frames(&mut world, &mut schedule, 5 * 32);
    assert_eq!(world.resource::<Seen>().count(Signal::Bite), 0);
    assert_eq!(bobber_state(&world), Some(BobberState::Bobbing));
}

#[test]
fn new_cast_cancels_pending_bite() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 29);
    assert!(bobber_bite_pending(&world));

    emit(&mut world, Signal::Cast);
    assert!(!bobber_bite_pending(&world));
    assert_eq!(world.resource::<TimerScheduler>().pending_count(), 0);
    assert_eq!(bobber_position(&world), CAST_POINT);
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Hidden));
    assert!(world.resource::<FishingLine>().geometry.points().is_empty());
}

#[test]
fn angler_cast_animation_launches_the_bobber() {
    let (mut world, mut schedule) = make_world();
    assert!(begin_cast(&mut world));
    assert_eq!(angler_state(&world), Some(AnglerState::Casting));
    assert_eq!(bobber_state(&world), Some(BobberState::Hidden));
    assert_eq!(bobber_position(&world), CAST_POINT);
    assert!(cast_animation_is_playing(&world));

    // a second request mid-cast is ignored
    assert!(!begin_cast(&mut world));
    assert_eq!(world.resource::<Seen>().count(Signal::Cast), 1);

    // 1.5 s clip at triple speed
    run_frames(&mut world, &mut schedule, 15);
    assert_eq!(angler_state(&world), Some(AnglerState::Casting));
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(angler_state(&world), Some(AnglerState::Fishing));
    assert_eq!(bobber_state(&world), Some(BobberState::Casting));
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Casting));
    assert!(!cast_animation_is_playing(&world));
}

#[test]
fn full_round_returns_angler_to_idle() {
    let (mut world, mut schedule) = make_world();
    assert!(begin_cast(&mut world));
    assert!(run_until(&mut world, &mut schedule, 600, |w| {
        world_has_seen(w, Signal::Bite) && angler_state(w) == Some(AnglerState::Idle)
    }));
    assert_initial(&world);
}

fn world_has_seen(world: &World, signal: Signal) -> bool {
    world.resource::<Seen>().count(signal) > 0
}

#[test]
fn holding_reel_cancels_the_cast() {
    let (mut world, mut schedule) = make_world();
    assert!(begin_cast(&mut world));
    run_frames(&mut world, &mut schedule, 20);
    assert_eq!(angler_state(&world), Some(AnglerState::Fishing));

    world.resource_mut::<InputState>().reel.press();
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(angler_state(&world), Some(AnglerState::Idle));
    assert_eq!(bobber_state(&world), Some(BobberState::Hidden));
    assert_eq!(fishing_line_state(&world), Some(FishingLineState::Hidden));
    assert_eq!(world.resource::<Seen>().count(Signal::ReelOut), 1);
}

#[test]
fn fish_fight_sequence() {
    let (mut world, mut schedule) = make_world();
    launch(&mut world);
    run_frames(&mut world, &mut schedule, 29);

    emit(&mut world, Signal::FishOn);
    assert_eq!(angler_state(&world), Some(AnglerState::FishOn));

    // holding reel while the fish is on starts the fight, it does not cancel
    world.resource_mut::<InputState>().reel.press();
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(angler_state(&world), Some(AnglerState::Reeling));
    assert_eq!(world.resource::<Seen>().count(Signal::FishFight), 1);

    let fish = Vec3::new(2.0, -1.0, 30.0);
    world.resource_mut::<FishTracker>().move_to(fish);
    emit(&mut world, Signal::Hook);
    run_frames(&mut world, &mut schedule, 1);
    assert_eq!(
        fishing_line_state(&world),
        Some(FishingLineState::AttachedToFish)
    );
    let anchor = fishing_line_anchor_point(&world);
    assert_eq!(
        world.resource::<FishingLine>().geometry.drawn_points(),
        &[anchor, fish]
    );
    let forward = world.resource::<Angler>().transform.forward();
    let to_fish = (fish - world.resource::<Angler>().transform.position).normalize();
    assert!((forward - to_fish).length() < 1e-4);

    emit(&mut world, Signal::FishCaught);
    assert_eq!(angler_state(&world), Some(AnglerState::HoldingPrize));
}

#[test]
fn bobber_screen_coords_are_available() {
    let (world, _) = make_world();
    let p = bobber_screen_coords(&world).expect("camera present");
    assert_eq!(p.z, 1.0);
}
