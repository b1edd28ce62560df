//! Decision records returned by tactical engines.

/// Identifier of a unit or location the decision targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub String);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of action a tactical engine can choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Reposition a unit.
    Move,
    /// Ranged attack.
    Shoot,
    /// Close into melee.
    Charge,
    /// Do nothing this activation.
    Hold,
}

/// A tactical decision made by an AI engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalDecision {
    /// Confidence in this decision, in `0.0..=1.0`.
    pub confidence: f32,
    /// Explanation of why this decision was made.
    pub reasoning: String,
    /// The chosen action category.
    pub action: ActionKind,
    /// Optional target of the action.
    pub target: Option<TargetId>,
}

impl TacticalDecision {
    /// Creates a decision, clamping confidence into `0.0..=1.0`.
    pub fn new(action: ActionKind, confidence: f32, reasoning: impl Into<String>) -> Self {
        Self {
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: reasoning.into(),
            action,
            target: None,
        }
    }

    /// Attaches a target to the decision.
    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }
}
