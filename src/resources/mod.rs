//! ECS resources.
//!
//! Every piece of shared state in the cast lives in a resource, including the
//! three entities themselves.
//!
//! Submodules overview:
//! - [`angler`] – the angler entity: state machine, transform, cast animation
//! - [`bobber`] – the bobber entity: state machine, flight arc, bite timer handle
//! - [`camera`] – view-projection used to map world positions to the screen
//! - [`clocks`] – named stopwatches, including the cast clock
//! - [`fish`] – live position of the hooked fish
//! - [`fishingline`] – the fishing line entity: trajectories and drawn geometry
//! - [`gameconfig`] – INI-backed settings for the headless runner
//! - [`input`] – reel button and aim/cast points
//! - [`modelstore`] – model scale, anchors and clips keyed by path
//! - [`rng`] – seeded random source for bite delays
//! - [`screensize`] – viewport size in pixels
//! - [`signalbus`] – priority-ordered signal receivers
//! - [`timers`] – cancellable one-shot timers
//! - [`worldtime`] – simulation time and frame delta

pub mod angler;
pub mod bobber;
pub mod camera;
pub mod clocks;
pub mod fish;
pub mod fishingline;
pub mod gameconfig;
pub mod input;
pub mod modelstore;
pub mod rng;
pub mod screensize;
pub mod signalbus;
pub mod timers;
pub mod worldtime;
