//! Entropy-backed dice rolling and combat resolution.
//!
//! `dice-core` defines the canonical roll records and exposes pure, synchronous
//! APIs for drawing verifiable dice results and composing them into the
//! hit/wound/save combat sequence. Every roll carries an entropy proof so an
//! external auditor can confirm, after the fact, that a claimed entropy block
//! produced an observed result.
//!
//! # Determinism
//!
//! All randomness flows through [`EntropySource`]. In CSPRNG mode each draw
//! comes independently from the operating system. In seeded mode the source is
//! a SHA-256 hash chain over `seed || counter`, so two engines built from the
//! same seed and driven with the same call sequence produce identical values
//! and proofs. This is what makes combat replays and cross-checks possible.
pub mod combat;
pub mod config;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod proof;
pub mod records;

pub use combat::CombatResolver;
pub use config::EngineConfig;
pub use engine::DiceEngine;
pub use entropy::{ENTROPY_LEN, EntropySource};
pub use error::DiceError;
pub use records::{AttackProfile, BatchRollResult, CombatResult, DieRoll, RollId};
