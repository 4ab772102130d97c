//! Animation state machine for the player.
//!
//! Locomotion (idle, walk) loops; interact and rest are one-shot actions that
//! run for a fixed clip length and then report completion. Every transition
//! goes through [`AnimationController::transition`].

use bevy::prelude::*;

use crate::content::AnimationDefaults;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Interact,
    Rest,
}

impl AnimationState {
    /// Movement, interaction triggers and facing only run in these states.
    pub fn allows_movement(self) -> bool {
        matches!(self, AnimationState::Idle | AnimationState::Walk)
    }

    pub fn is_one_shot(self) -> bool {
        matches!(self, AnimationState::Interact | AnimationState::Rest)
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
            AnimationState::Interact => "interact",
            AnimationState::Rest => "rest",
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct AnimationTuning {
    pub locomotion_fade: f32,
    pub action_fade: f32,
    pub interact_duration: f32,
    pub rest_duration: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self::from(&AnimationDefaults::default())
    }
}

impl From<&AnimationDefaults> for AnimationTuning {
    fn from(defaults: &AnimationDefaults) -> Self {
        Self {
            locomotion_fade: defaults.locomotion_fade,
            action_fade: defaults.action_fade,
            interact_duration: defaults.interact_duration,
            rest_duration: defaults.rest_duration,
        }
    }
}

impl AnimationTuning {
    fn clip_length(&self, state: AnimationState) -> f32 {
        match state {
            AnimationState::Interact => self.interact_duration,
            AnimationState::Rest => self.rest_duration,
            AnimationState::Idle | AnimationState::Walk => 0.0,
        }
    }

    fn fade_between(&self, from: AnimationState, to: AnimationState) -> f32 {
        if from.is_one_shot() || to.is_one_shot() {
            self.action_fade
        } else {
            self.locomotion_fade
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTrigger {
    /// Per-frame locomotion update: is any movement flag held.
    Locomotion { moving: bool },
    Interact,
    Rest,
    /// The running one-shot reached the end of its clip.
    ActionFinished { moving: bool },
}

/// Timed blend from the previous state into the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossFade {
    pub from: AnimationState,
    pub duration: f32,
    pub elapsed: f32,
}

impl CrossFade {
    /// Weight of the incoming state, 0 at the start and 1 when done.
    pub fn weight(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: AnimationState,
    pub to: AnimationState,
}

/// Component for animation playback on the player.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Blend in progress, if any.
    pub fade: Option<CrossFade>,
    /// Time spent in the current one-shot.
    pub action_elapsed: f32,
    /// Clip length of the current one-shot.
    pub action_duration: f32,
    /// Whether the current one-shot has reported completion.
    pub finished: bool,
}

impl AnimationController {
    pub fn allows_movement(&self) -> bool {
        self.state.allows_movement()
    }

    /// Weight of the current state, 1 outside of a cross-fade.
    pub fn blend_weight(&self) -> f32 {
        self.fade.map_or(1.0, |fade| fade.weight())
    }

    /// Apply a trigger. Returns the change, if the trigger caused one.
    pub fn transition(
        &mut self,
        trigger: AnimationTrigger,
        tuning: &AnimationTuning,
    ) -> Option<StateChange> {
        use AnimationState::*;

        let next = match (self.state, trigger) {
            (Idle, AnimationTrigger::Locomotion { moving: true }) => Walk,
            (Walk, AnimationTrigger::Locomotion { moving: false }) => Idle,
            (Idle | Walk, AnimationTrigger::Interact) => Interact,
            (Idle | Walk, AnimationTrigger::Rest) => Rest,
            (Interact, AnimationTrigger::ActionFinished { moving }) => {
                if moving {
                    Walk
                } else {
                    Idle
                }
            }
            // Rest is terminal; completion is reported but the state holds.
            _ => return None,
        };

        Some(self.enter(next, tuning))
    }

    fn enter(&mut self, next: AnimationState, tuning: &AnimationTuning) -> StateChange {
        let change = StateChange {
            from: self.state,
            to: next,
        };
        self.previous_state = self.state;
        self.state = next;
        self.fade = Some(CrossFade {
            from: change.from,
            duration: tuning.fade_between(change.from, next),
            elapsed: 0.0,
        });
        self.action_elapsed = 0.0;
        self.action_duration = tuning.clip_length(next);
        self.finished = false;
        change
    }

    /// Advance blend and clip time. Returns the one-shot state that completed
    /// during this step; each one-shot completes exactly once.
    pub fn advance(&mut self, dt: f32) -> Option<AnimationState> {
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += dt;
            if fade.is_done() {
                self.fade = None;
            }
        }

        if !self.state.is_one_shot() || self.finished {
            return None;
        }

        self.action_elapsed += dt;
        if self.action_elapsed >= self.action_duration {
            self.action_elapsed = self.action_duration;
            self.finished = true;
            return Some(self.state);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> AnimationTuning {
        AnimationTuning {
            locomotion_fade: 0.2,
            action_fade: 0.1,
            interact_duration: 1.2,
            rest_duration: 2.5,
        }
    }

    fn walking() -> AnimationController {
        let mut controller = AnimationController::default();
        controller.transition(AnimationTrigger::Locomotion { moving: true }, &tuning());
        controller
    }

    #[test]
    fn test_locomotion_transitions() {
        let tuning = tuning();
        let mut controller = AnimationController::default();
        assert_eq!(controller.state, AnimationState::Idle);

        // Holding still in idle is not a change.
        assert!(
            controller
                .transition(AnimationTrigger::Locomotion { moving: false }, &tuning)
                .is_none()
        );

        let change = controller
            .transition(AnimationTrigger::Locomotion { moving: true }, &tuning)
            .unwrap();
        assert_eq!(change.from, AnimationState::Idle);
        assert_eq!(change.to, AnimationState::Walk);
        assert_eq!(controller.previous_state, AnimationState::Idle);

        controller.transition(AnimationTrigger::Locomotion { moving: false }, &tuning);
        assert_eq!(controller.state, AnimationState::Idle);
    }

    #[test]
    fn test_cross_fade_progresses() {
        let mut controller = walking();
        assert_eq!(controller.blend_weight(), 0.0);

        controller.advance(0.1);
        assert!((controller.blend_weight() - 0.5).abs() < 1e-4);

        controller.advance(0.2);
        assert!(controller.fade.is_none());
        assert_eq!(controller.blend_weight(), 1.0);
    }

    #[test]
    fn test_interact_suspends_movement_until_finished() {
        let tuning = tuning();
        let mut controller = walking();

        controller.transition(AnimationTrigger::Interact, &tuning);
        assert_eq!(controller.state, AnimationState::Interact);
        assert!(!controller.allows_movement());

        // One-shots ignore locomotion and further triggers.
        assert!(
            controller
                .transition(AnimationTrigger::Locomotion { moving: false }, &tuning)
                .is_none()
        );
        assert!(
            controller
                .transition(AnimationTrigger::Rest, &tuning)
                .is_none()
        );

        assert_eq!(controller.advance(1.0), None);
        assert_eq!(controller.advance(0.3), Some(AnimationState::Interact));
        // Completion is reported once.
        assert_eq!(controller.advance(1.0), None);

        let change = controller
            .transition(AnimationTrigger::ActionFinished { moving: false }, &tuning)
            .unwrap();
        assert_eq!(change.to, AnimationState::Idle);
        assert!(controller.allows_movement());
    }

    #[test]
    fn test_interact_returns_to_walk_when_moving() {
        let tuning = tuning();
        let mut controller = AnimationController::default();
        controller.transition(AnimationTrigger::Interact, &tuning);
        controller.advance(2.0);

        controller.transition(AnimationTrigger::ActionFinished { moving: true }, &tuning);
        assert_eq!(controller.state, AnimationState::Walk);
    }

    #[test]
    fn test_rest_is_terminal() {
        let tuning = tuning();
        let mut controller = walking();

        controller.transition(AnimationTrigger::Rest, &tuning);
        assert_eq!(controller.state, AnimationState::Rest);
        assert_eq!(controller.action_duration, 2.5);
        assert_eq!(controller.fade.map(|fade| fade.duration), Some(0.1));

        assert_eq!(controller.advance(2.5), Some(AnimationState::Rest));
        assert!(
            controller
                .transition(AnimationTrigger::ActionFinished { moving: true }, &tuning)
                .is_none()
        );
        assert_eq!(controller.state, AnimationState::Rest);
        assert!(!controller.allows_movement());
        assert_eq!(controller.advance(5.0), None);
    }

    #[test]
    fn test_locomotion_uses_locomotion_fade() {
        let controller = walking();
        assert_eq!(controller.fade.map(|fade| fade.duration), Some(0.2));
        assert_eq!(controller.action_duration, 0.0);
    }

    #[test]
    fn test_zero_length_fade_is_full_weight() {
        let fade = CrossFade {
            from: AnimationState::Idle,
            duration: 0.0,
            elapsed: 0.0,
        };
        assert_eq!(fade.weight(), 1.0);
        assert!(fade.is_done());
    }
}
