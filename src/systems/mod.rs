//! Engine systems.
//!
//! Exclusive systems and signal receivers that drive the cast.
//!
//! Submodules overview
//! - [`angler`] – angler receivers, behaviors, the cast action and anchor queries
//! - [`bobber`] – bobber receivers, behaviors, the bite timer and position queries
//! - [`fishingline`] – line receivers and behaviors; announces the landing
//! - [`signals`] – synchronous, reentrant signal delivery
//! - [`statemachine`] – generic transition and per-frame invocation helpers
//! - [`time`] – update simulation time and advance clocks
//! - [`timers`] – fire expired one-shot timers
pub mod angler;
pub mod bobber;
pub mod fishingline;
pub mod signals;
pub mod statemachine;
pub mod time;
pub mod timers;
