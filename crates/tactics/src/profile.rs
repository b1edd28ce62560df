//! Personality profiles for AI opponents.

/// Configuration profile for an AI opponent.
///
/// Both knobs live in `0.0..=1.0`; constructors clamp out-of-range input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiProfile {
    /// Name of the AI personality.
    pub name: String,
    /// Tendency to attack vs defend.
    pub aggression: f32,
    /// Willingness to take risks.
    pub risk_tolerance: f32,
}

impl AiProfile {
    /// Creates a profile with the given knobs, clamped into `0.0..=1.0`.
    pub fn new(name: impl Into<String>, aggression: f32, risk_tolerance: f32) -> Self {
        Self {
            name: name.into(),
            aggression: aggression.clamp(0.0, 1.0),
            risk_tolerance: risk_tolerance.clamp(0.0, 1.0),
        }
    }

    /// A neutral personality: 0.5 aggression, 0.5 risk tolerance.
    pub fn neutral(name: impl Into<String>) -> Self {
        Self::new(name, 0.5, 0.5)
    }
}
