//! Seeded random source for gameplay rolls.

use bevy_ecs::prelude::Resource;

use crate::consts::{BITE_DELAY_MAX_MS, BITE_DELAY_MIN_MS};

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl Default for GameRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}

impl GameRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    /// Delay before a fish bites, in ms.
    pub fn bite_delay_ms(&mut self) -> u32 {
        self.0.u32(BITE_DELAY_MIN_MS..BITE_DELAY_MAX_MS)
    }
}
