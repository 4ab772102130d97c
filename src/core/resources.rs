//! Core domain: shared resources for session configuration and results.

use bevy::prelude::*;
use rand::Rng;

use crate::core::outcome::Outcome;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Result of the current session, set exactly once when rest finishes.
#[derive(Resource, Debug, Default)]
pub struct SessionOutcome {
    pub outcome: Option<Outcome>,
    pub unsafe_remaining: usize,
}

impl SessionOutcome {
    pub fn decide(&mut self, outcome: Outcome, unsafe_remaining: usize) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        self.unsafe_remaining = unsafe_remaining;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
