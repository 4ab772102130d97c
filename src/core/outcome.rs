//! Core domain: the win/lose rule evaluated when rest finishes.

use serde::Serialize;

use crate::rooms::Interactable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }
}

/// Win iff every registered prop is safe. No props means nothing was left
/// unsecured, which counts as a win.
pub fn evaluate_outcome(interactables: &[Interactable]) -> Outcome {
    if interactables.iter().all(|prop| prop.is_safe) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
