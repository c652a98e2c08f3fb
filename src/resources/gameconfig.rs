//! Runner configuration resource.
//!
//! Settings for the headless runner loaded from an INI configuration file.
//! Gameplay constants are not here; see [`crate::consts`]. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fps = 60
//! seconds = 12
//! seed = 1
//! time_scale = 1.0
//!
//! [scene]
//! cast_x = 0.0
//! cast_z = 40.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_FPS: u32 = 60;
const DEFAULT_SECONDS: f32 = 12.0;
const DEFAULT_SEED: u64 = 1;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CAST_X: f32 = 0.0;
const DEFAULT_CAST_Z: f32 = 40.0;
const DEFAULT_CONFIG_PATH: &str = "./anglerengine.ini";

/// Runner configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Simulated frames per second.
    pub fps: u32,
    /// Simulated duration of a run, in seconds.
    pub seconds: f32,
    /// Seed for the bite-delay RNG.
    pub seed: u64,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Cast target on the water plane.
    pub cast_x: f32,
    pub cast_z: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            seconds: DEFAULT_SECONDS,
            seed: DEFAULT_SEED,
            time_scale: DEFAULT_TIME_SCALE,
            cast_x: DEFAULT_CAST_X,
            cast_z: DEFAULT_CAST_Z,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: fps={}, seconds={}, seed={}, time_scale={}, cast=({}, {})",
            self.fps, self.seconds, self.seed, self.time_scale, self.cast_x, self.cast_z
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [simulation] section
        if let Some(fps) = config.getuint("simulation", "fps").ok().flatten() {
            self.fps = (fps as u32).max(1);
        }
        if let Some(seconds) = config.getfloat("simulation", "seconds").ok().flatten() {
            self.seconds = seconds as f32;
        }
        if let Some(seed) = config.getuint("simulation", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        // [scene] section
        if let Some(x) = config.getfloat("scene", "cast_x").ok().flatten() {
            self.cast_x = x as f32;
        }
        if let Some(z) = config.getfloat("scene", "cast_z").ok().flatten() {
            self.cast_z = z as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "fps", Some(self.fps.to_string()));
        config.set("simulation", "seconds", Some(self.seconds.to_string()));
        config.set("simulation", "seed", Some(self.seed.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        // [scene] section
        config.set("scene", "cast_x", Some(self.cast_x.to_string()));
        config.set("scene", "cast_z", Some(self.cast_z.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per simulated frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Total frames in a run.
    pub fn frame_count(&self) -> u32 {
        (self.seconds.max(0.0) * self.fps as f32).round() as u32
    }

    /// Cast target on the water plane (y = 0).
    pub fn cast_point(&self) -> Vec3 {
        Vec3::new(self.cast_x, 0.0, self.cast_z)
    }
}
