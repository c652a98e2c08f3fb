//! Discrete state + per-frame behavior pair.
//!
//! Each cast entity owns exactly one [`StateMachine`]. The state tag and the
//! behavior that runs every frame while in that state are always replaced
//! together through [`StateMachine::set`]; there is no way to change one
//! without the other.
//!
//! # Architecture
//!
//! - **States are enum tags** implementing [`StateTag`]
//! - **Behaviors are plain function pointers** taking the whole world, so a
//!   behavior can read other entities and emit signals
//! - **A `None` behavior** is a no-op, used for idle/terminal states
//! - **Transitions are driven by signals only**; the machine holds no
//!   transition table of its own
//!
//! # Related
//!
//! - [`crate::systems::statemachine`] – transition and per-frame invocation helpers
//! - [`crate::events::statechange::StateChangeEvent`] – event emitted on transitions

use bevy_ecs::prelude::{Resource, World};
use std::fmt;

use crate::events::statechange::EntityKind;

/// Per-frame behavior of a state.
pub type Behavior = fn(&mut World);

/// A discrete state tag.
pub trait StateTag: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Upper-case name used in logs and events.
    fn name(self) -> &'static str;
}

/// Current state, the state before it, and the active behavior.
#[derive(Clone)]
pub struct StateMachine<S: StateTag> {
    state: S,
    previous: Option<S>,
    behavior: Option<Behavior>,
    transitions: u32,
}

impl<S: StateTag> StateMachine<S> {
    pub fn new(initial: S, behavior: Option<Behavior>) -> Self {
        Self {
            state: initial,
            previous: None,
            behavior,
            transitions: 0,
        }
    }

    /// Current state tag.
    pub fn get(&self) -> S {
        self.state
    }

    /// State before the last transition, if any.
    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    /// Behavior for the current state.
    pub fn behavior(&self) -> Option<Behavior> {
        self.behavior
    }

    /// Number of transitions since construction.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn is(&self, state: S) -> bool {
        self.state == state
    }

    /// Replace state and behavior together. Returns the state that was left.
    ///
    /// Re-entering the same state is a real transition: the behavior is
    /// swapped and the counter advances.
    pub fn set(&mut self, state: S, behavior: Option<Behavior>) -> S {
        let left = std::mem::replace(&mut self.state, state);
        self.previous = Some(left);
        self.behavior = behavior;
        self.transitions += 1;
        left
    }
}

impl<S: StateTag> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state)
            .field("previous", &self.previous)
            .field("has_behavior", &self.behavior.is_some())
            .field("transitions", &self.transitions)
            .finish()
    }
}

/// A singleton resource that owns a [`StateMachine`].
pub trait MachineOwner: Resource {
    type State: StateTag;
    const KIND: EntityKind;

    fn machine(&self) -> &StateMachine<Self::State>;
    fn machine_mut(&mut self) -> &mut StateMachine<Self::State>;
}
