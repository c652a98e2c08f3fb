//! Event types and observers.
//!
//! Submodules:
//! - [`signal`] – the payload-less signals exchanged by the cast entities,
//!   and the observer event triggered after each delivery
//! - [`statechange`] – notification of an entity swapping its state/behavior pair
//!
//! See each submodule for concrete event data and semantics.
pub mod signal;
pub mod statechange;
