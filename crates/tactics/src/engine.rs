//! Core tactical engine trait.

use crate::decision::{ActionKind, TacticalDecision};
use crate::profile::AiProfile;

/// A decision-making engine evaluated against a host-supplied state snapshot.
///
/// The trait is generic over the state type `S` so hosts expose whatever
/// snapshot shape they already have; implementations read it and return
/// plain-data decisions.
pub trait TacticalEngine<S>: Send + Sync {
    /// Evaluates the state from the perspective of the active player.
    ///
    /// Higher is better; implementations should keep the scale consistent
    /// across calls so scores are comparable.
    fn evaluate_state(&self, state: &S) -> f32;

    /// Determines the next best action given the current state.
    fn decide_next_action(&self, state: &S) -> TacticalDecision;
}

/// Blanket implementation for boxed engines, enabling dynamic dispatch.
impl<S> TacticalEngine<S> for Box<dyn TacticalEngine<S>> {
    fn evaluate_state(&self, state: &S) -> f32 {
        (**self).evaluate_state(state)
    }

    fn decide_next_action(&self, state: &S) -> TacticalDecision {
        (**self).decide_next_action(state)
    }
}

/// Baseline engine driven purely by its personality profile.
///
/// Ignores the state snapshot entirely: aggressive profiles charge, passive
/// ones hold. Useful as a stand-in opponent and as the simplest conforming
/// implementation of [`TacticalEngine`].
#[derive(Clone, Debug)]
pub struct ProfileDriven {
    profile: AiProfile,
}

impl ProfileDriven {
    /// Creates a baseline engine from a profile.
    pub fn new(profile: AiProfile) -> Self {
        Self { profile }
    }
}

impl<S> TacticalEngine<S> for ProfileDriven {
    fn evaluate_state(&self, _state: &S) -> f32 {
        // No state model: every position looks neutral.
        0.5
    }

    fn decide_next_action(&self, _state: &S) -> TacticalDecision {
        // Confidence grows with distance from the indifference point.
        let confidence = (self.profile.aggression - 0.5).abs() * 2.0;
        if self.profile.aggression > 0.5 {
            TacticalDecision::new(
                ActionKind::Charge,
                confidence,
                format!("{} favors attack", self.profile.name),
            )
        } else {
            TacticalDecision::new(
                ActionKind::Hold,
                confidence,
                format!("{} favors defense", self.profile.name),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoState;

    #[test]
    fn aggressive_profiles_charge() {
        let engine = ProfileDriven::new(AiProfile::new("berserker", 0.9, 0.8));
        let decision = engine.decide_next_action(&NoState);
        assert_eq!(decision.action, ActionKind::Charge);
        assert!(decision.confidence > 0.5);
    }

    #[test]
    fn passive_profiles_hold() {
        let engine = ProfileDriven::new(AiProfile::new("turtle", 0.1, 0.2));
        let decision = engine.decide_next_action(&NoState);
        assert_eq!(decision.action, ActionKind::Hold);
    }

    #[test]
    fn boxed_engines_dispatch() {
        let boxed: Box<dyn TacticalEngine<NoState>> =
            Box::new(ProfileDriven::new(AiProfile::neutral("anyone")));
        assert_eq!(boxed.evaluate_state(&NoState), 0.5);
        let decision = boxed.decide_next_action(&NoState);
        assert_eq!(decision.action, ActionKind::Hold);
        assert_eq!(decision.confidence, 0.0);
    }
}
