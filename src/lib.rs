//! Angler Engine library.
//!
//! Signal-driven state machines for a fishing cast: an angler casts, a bobber
//! flies along a computed arc, and the line settles from flight arc to resting
//! sag, all coordinated through a priority-ordered signal bus and timed from
//! elapsed clock time rather than per-frame steps.
//!
//! This module exposes the components, resources, systems and events for use
//! in integration tests and as a reusable library.

pub mod components;
pub mod consts;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
pub mod trajectory;
