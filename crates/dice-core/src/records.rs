//! Canonical roll and combat records.
//!
//! These are the plain data shapes the engine hands to its callers. An
//! external entity layer attaches persistence concerns on top of them; the
//! records themselves are immutable once returned and carry everything an
//! auditor needs (`value`, `sides`, `entropy_proof`).

use chrono::{DateTime, Utc};

use crate::entropy::ENTROPY_LEN;
use crate::proof;

/// Identifier of a single die roll, unique per engine instance.
///
/// Allocated monotonically by [`crate::DiceEngine`] in draw order, so sorting
/// rolls by id reproduces the sequence they were drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollId(pub u64);

impl std::fmt::Display for RollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "roll-{}", self.0)
    }
}

/// A single die roll with its entropy proof.
///
/// Constructed exclusively by [`crate::DiceEngine`]; `1 <= value <= sides`
/// always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DieRoll {
    /// Engine-local identifier, assigned in draw order.
    pub id: RollId,
    /// The face rolled, in `1..=sides`.
    pub value: u32,
    /// Number of sides on the die.
    pub sides: u32,
    /// Public fingerprint of the entropy block behind this roll.
    pub entropy_proof: String,
    /// When the roll was drawn.
    pub created_at: DateTime<Utc>,
}

impl DieRoll {
    /// Checks that this roll was generated from the given entropy block.
    pub fn verify(&self, entropy: &[u8; ENTROPY_LEN]) -> bool {
        proof::verify(&self.entropy_proof, entropy)
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}: {}", self.sides, self.value)
    }
}

/// Result of one batch roll call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchRollResult {
    /// Individual rolls, in draw order.
    pub rolls: Vec<DieRoll>,
    /// Sum of all roll values.
    pub total: u64,
    /// Mean roll value; 0 for an empty batch.
    pub average: f64,
}

impl BatchRollResult {
    /// Roll values in draw order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.rolls.iter().map(|roll| roll.value)
    }
}

/// Input parameters for one combat resolution.
///
/// Thresholds are deliberately unconstrained: a `hit_on` outside `1..=6`
/// legally produces an always-succeed or always-fail stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    /// Number of attacks in the hit stage.
    pub attacks: i32,
    /// A hit roll succeeds on `value >= hit_on`.
    pub hit_on: i32,
    /// A wound roll succeeds on `value >= wound_on`.
    pub wound_on: i32,
    /// A save roll fails on `value < save`.
    pub save: i32,
    /// Damage dealt per failed save.
    pub damage_per_failure: i32,
    /// Reroll each failed hit roll once.
    pub hit_reroll: bool,
    /// Reroll each failed wound roll once.
    pub wound_reroll: bool,
}

impl AttackProfile {
    /// Creates a profile with rerolls disabled.
    pub fn new(attacks: i32, hit_on: i32, wound_on: i32, save: i32, damage_per_failure: i32) -> Self {
        Self {
            attacks,
            hit_on,
            wound_on,
            save,
            damage_per_failure,
            hit_reroll: false,
            wound_reroll: false,
        }
    }

    /// Enables the single reroll of failed hit rolls.
    pub fn with_hit_reroll(mut self) -> Self {
        self.hit_reroll = true;
        self
    }

    /// Enables the single reroll of failed wound rolls.
    pub fn with_wound_reroll(mut self) -> Self {
        self.wound_reroll = true;
        self
    }
}

/// Result of a full hit/wound/save combat sequence.
///
/// Built up stage by stage during [`crate::CombatResolver::resolve`] and
/// immutable once returned. Invariants: `hits <= attacks`, `wounds <= hits`,
/// `saves_failed <= wounds`, and each roll vector holds between one and two
/// rolls per triggering success of the previous stage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    /// The parameters this sequence was resolved with.
    pub profile: AttackProfile,

    /// Hit-stage rolls, in draw order (rerolls follow the roll they replace).
    pub hit_rolls: Vec<DieRoll>,
    /// Wound-stage rolls, in draw order.
    pub wound_rolls: Vec<DieRoll>,
    /// Save-stage rolls, in draw order.
    pub save_rolls: Vec<DieRoll>,

    /// Attacks that hit.
    pub hits: u32,
    /// Hits that wounded.
    pub wounds: u32,
    /// Wounds the defender failed to save.
    pub saves_failed: u32,
    /// `saves_failed * damage_per_failure`.
    pub damage_dealt: i64,
}

impl CombatResult {
    pub(crate) fn new(profile: AttackProfile) -> Self {
        Self {
            profile,
            hit_rolls: Vec::new(),
            wound_rolls: Vec::new(),
            save_rolls: Vec::new(),
            hits: 0,
            wounds: 0,
            saves_failed: 0,
            damage_dealt: 0,
        }
    }
}

impl std::fmt::Display for CombatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}A -> {}H -> {}W -> {}D",
            self.profile.attacks, self.hits, self.wounds, self.damage_dealt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roll(value: u32) -> DieRoll {
        let entropy = [value as u8; ENTROPY_LEN];
        DieRoll {
            id: RollId(0),
            value,
            sides: 6,
            entropy_proof: proof::prove(&entropy),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn die_roll_displays_as_die_notation() {
        assert_eq!(sample_roll(4).to_string(), "D6: 4");
    }

    #[test]
    fn die_roll_verifies_against_its_entropy() {
        let roll = sample_roll(3);
        assert!(roll.verify(&[3u8; ENTROPY_LEN]));
        assert!(!roll.verify(&[4u8; ENTROPY_LEN]));
    }

    #[test]
    fn batch_values_follow_roll_order() {
        let batch = BatchRollResult {
            rolls: vec![sample_roll(2), sample_roll(5), sample_roll(1)],
            total: 8,
            average: 8.0 / 3.0,
        };
        assert_eq!(batch.values().collect::<Vec<_>>(), vec![2, 5, 1]);
    }

    #[test]
    fn attack_profile_defaults_rerolls_off() {
        let profile = AttackProfile::new(10, 3, 4, 5, 1);
        assert!(!profile.hit_reroll);
        assert!(!profile.wound_reroll);

        let profile = profile.with_hit_reroll().with_wound_reroll();
        assert!(profile.hit_reroll);
        assert!(profile.wound_reroll);
    }

    #[test]
    fn combat_result_displays_stage_chain() {
        let mut result = CombatResult::new(AttackProfile::new(10, 3, 4, 5, 2));
        result.hits = 6;
        result.wounds = 3;
        result.saves_failed = 2;
        result.damage_dealt = 4;
        assert_eq!(result.to_string(), "10A -> 6H -> 3W -> 4D");
    }
}
