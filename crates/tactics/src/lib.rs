//! Abstract tactical-decision interface for AI opponents.
//!
//! This crate defines the capability seam between a game host and whatever
//! decision-making sits behind it. Everything crossing the seam is plain
//! data: a [`TacticalEngine`] reads a caller-supplied state snapshot and
//! returns a [`TacticalDecision`]; the dice and combat core never depends on
//! this crate.
//!
//! # Architecture
//!
//! - [`TacticalEngine`]: core trait, generic over the host's state type
//! - [`TacticalDecision`]: what to do, with confidence and reasoning
//! - [`AiProfile`]: personality knobs (aggression, risk tolerance)
//! - [`ProfileDriven`]: baseline implementation weighted by profile alone

pub mod decision;
pub mod engine;
pub mod profile;

pub use decision::{ActionKind, TacticalDecision, TargetId};
pub use engine::{ProfileDriven, TacticalEngine};
pub use profile::AiProfile;
