//! Named signals exchanged between the cast entities.
//!
//! A [`Signal`] carries no payload; receivers read whatever context they need
//! from the world at delivery time. Delivery goes through the
//! [`SignalBus`](crate::resources::signalbus::SignalBus) in priority order.
//! Once every receiver has run, a [`SignalEvent`] is triggered so that
//! observers outside the cast (UI, logging, stats) can react without taking
//! part in the ordering.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<SignalEvent>| {
//!     log::info!("signal {}", trigger.event().signal.name());
//! });
//! ```

use bevy_ecs::prelude::*;

/// Every signal the cast understands.
///
/// `FishOn`, `FishFight` and `FishCaught` come from the fish/catch
/// subsystem, which lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Reset,
    Cast,
    LaunchBobber,
    BobberLanded,
    BeginFishing,
    Bite,
    Hook,
    ReelOut,
    StateChange,
    FishOn,
    FishFight,
    FishCaught,
}

impl Signal {
    pub const ALL: [Signal; 12] = [
        Signal::Reset,
        Signal::Cast,
        Signal::LaunchBobber,
        Signal::BobberLanded,
        Signal::BeginFishing,
        Signal::Bite,
        Signal::Hook,
        Signal::ReelOut,
        Signal::StateChange,
        Signal::FishOn,
        Signal::FishFight,
        Signal::FishCaught,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Signal::Reset => "RESET",
            Signal::Cast => "CAST",
            Signal::LaunchBobber => "LAUNCH_BOBBER",
            Signal::BobberLanded => "BOBBER_LANDED",
            Signal::BeginFishing => "BEGIN_FISHING",
            Signal::Bite => "BITE",
            Signal::Hook => "HOOK",
            Signal::ReelOut => "REEL_OUT",
            Signal::StateChange => "STATE_CHANGE",
            Signal::FishOn => "FISH_ON",
            Signal::FishFight => "FISH_FIGHT",
            Signal::FishCaught => "FISH_CAUGHT",
        }
    }
}

/// Triggered after a signal has been delivered to all its receivers.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEvent {
    /// The signal that was emitted.
    pub signal: Signal,
}
