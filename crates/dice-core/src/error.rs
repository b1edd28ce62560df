//! Error types for dice and combat operations.
//!
//! Every error here is raised synchronously at the point of the invalid call,
//! before any entropy is consumed, so callers never observe partial state.
//! Proof mismatch is deliberately *not* an error: [`crate::proof::verify`]
//! returns a boolean because a wrong-entropy claim is an expected outcome,
//! not a programming fault.

/// Errors surfaced by [`crate::DiceEngine`] and [`crate::CombatResolver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die with fewer than 2 sides is degenerate (a 1-sided die always
    /// lands on 1) and is rejected rather than silently tolerated.
    #[error("a die needs at least 2 sides, got {sides}")]
    InvalidDie { sides: u32 },

    /// A count-like argument was negative.
    #[error("{name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i32 },
}
