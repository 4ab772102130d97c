//! Core domain: events for the session flow.

use bevy::ecs::message::Message;

use crate::core::outcome::Outcome;

/// Event fired once, when the rest action finishes and the outcome is known
#[derive(Debug)]
pub struct OutcomeDecidedEvent {
    pub outcome: Outcome,
    pub unsafe_remaining: usize,
}

impl Message for OutcomeDecidedEvent {}

/// Event fired when the player asks for a fresh session
#[derive(Debug)]
pub struct RestartRequestedEvent;

impl Message for RestartRequestedEvent {}
