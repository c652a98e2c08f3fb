//! Data owned by the cast entities.
//!
//! These are plain data types embedded in the entity resources rather than
//! attached to spawned entities: each of the angler, bobber and fishing line
//! exists exactly once.
//!
//! Submodules overview:
//! - [`animationplayer`] – named clips played with a bounded repetition count
//! - [`linegeometry`] – polyline with a partial draw range for the renderer
//! - [`statemachine`] – discrete state tag paired with its per-frame behavior
//! - [`transform`] – position, orientation, scale, visibility and named anchors

pub mod animationplayer;
pub mod linegeometry;
pub mod statemachine;
pub mod transform;
