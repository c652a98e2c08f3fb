//! Angler Engine headless runner.
//!
//! Runs the cast scene without a window for a fixed amount of simulated
//! time, casting again every time the angler is back to idle, and logs the
//! signal traffic.
//!
//! Built on:
//! - **bevy_ecs** for the world, resources and the frame schedule
//! - **clap** for the command line
//! - **configparser** for the INI settings file
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --seconds 20 --seed 3
//! ```

use anglerengine::events::signal::{Signal, SignalEvent};
use anglerengine::game;
use anglerengine::resources::angler::AnglerState;
use anglerengine::resources::gameconfig::GameConfig;
use anglerengine::resources::input::InputState;
use anglerengine::resources::rng::GameRng;
use anglerengine::resources::worldtime::WorldTime;
use anglerengine::systems::angler::{angler_state, begin_cast};
use bevy_ecs::prelude::*;
use clap::Parser;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// Angler Engine: headless fishing cast simulation
#[derive(Parser)]
#[command(version, about = "Runs the fishing cast state machines without a window.")]
struct Cli {
    /// INI settings file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulated seconds to run (overrides the config file).
    #[arg(long)]
    seconds: Option<f32>,

    /// Simulated frames per second (overrides the config file).
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for the bite delay (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

/// Signal counts collected by an observer.
#[derive(Resource, Default)]
struct RunStats {
    signals: FxHashMap<Signal, u32>,
    casts: u32,
}

fn count_signal(trigger: On<SignalEvent>, mut stats: ResMut<RunStats>) {
    *stats.signals.entry(trigger.event().signal).or_default() += 1;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(seconds) = cli.seconds {
        config.seconds = seconds;
    }
    if let Some(fps) = cli.fps {
        config.fps = fps.max(1);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    log::info!("Hello, world! This is the Angler Engine!");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(GameRng::with_seed(config.seed));
    let mut input = InputState::default();
    input.aim_at(config.cast_point());
    world.insert_resource(input);
    world.insert_resource(RunStats::default());
    world.add_observer(count_signal);
    world.flush();

    if let Err(e) = game::setup(&mut world) {
        log::error!("Setup failed: {}", e);
        std::process::exit(1);
    }

    let dt = config.frame_delta();
    let frames = config.frame_count();
    world.insert_resource(config);

    let mut schedule = game::frame_schedule();

    // --------------- Main loop ---------------
    for _ in 0..frames {
        if angler_state(&world) == Some(AnglerState::Idle) && begin_cast(&mut world) {
            world.resource_mut::<RunStats>().casts += 1;
        }
        game::tick(&mut world, &mut schedule, dt);
    }

    let elapsed = world.resource::<WorldTime>().elapsed;
    let stats = world.resource::<RunStats>();
    log::info!(
        "Ran {} frames ({:.2} s simulated), {} cast(s)",
        frames,
        elapsed,
        stats.casts
    );
    for signal in Signal::ALL {
        if let Some(count) = stats.signals.get(&signal) {
            log::info!("  {:<14} x{}", signal.name(), count);
        }
    }
}
