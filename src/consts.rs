//! Fixed gameplay constants.
//!
//! These are not runtime configurable; [`GameConfig`](crate::resources::gameconfig::GameConfig)
//! only covers the headless runner.

use glam::Vec3;

/// Height of the flight arc above the rod-tip/target chord.
pub const CAST_HEIGHT: f32 = 22.0;
/// Time for the bobber to fly from the rod tip to the water, in ms.
pub const CAST_TIME_MS: f64 = 350.0;
/// Time for the line to settle from flight arc to resting sag, in ms.
///
/// Measured on the cast clock, i.e. from the launch, not from the landing.
pub const DESCEND_TIME_MS: f64 = 900.0;
/// Samples in every trajectory point sequence.
pub const ARC_POINT_COUNT: usize = 32;

/// Catch-bite delay range in ms (min inclusive, max exclusive).
pub const BITE_DELAY_MIN_MS: u32 = 1000;
pub const BITE_DELAY_MAX_MS: u32 = 3000;

/// Idle bobbing on the water.
pub const BOB_FREQUENCY: f32 = 3.0;
pub const BOB_AMPLITUDE: f32 = 0.4;

/// How many times the plunk clip plays after a bite.
pub const PLUNK_REPETITIONS: u32 = 3;
/// Playback rate of the angler's cast animation.
pub const CAST_ANIMATION_SPEED: f32 = 3.0;

/// Name of the clock reset at the start of every cast.
pub const CAST_CLOCK: &str = "cast";

/// Bobber pose after a RESET.
pub const BOBBER_REST_POSITION: Vec3 = Vec3::new(50.0, 0.0, 0.0);
pub const BOBBER_REST_SCALE: f32 = 2.0;

/// Model manifests and the names used inside them.
pub const BOBBER_MODEL: &str = "models/bobber.json";
pub const FISHERMAN_MODEL: &str = "models/fisherman.json";
pub const PLUNK_CLIP: &str = "plunk";
pub const CAST_CLIP: &str = "cast_anim";
pub const TOP_BOBBER_ANCHOR: &str = "top_bobber";
pub const STRING_PIVOT_ANCHOR: &str = "string_pivot";
