//! Combat resolution: the hit/wound/save pipeline.
//!
//! A resolution is three strictly sequential stages built entirely out of D6
//! rolls. No stage begins before the prior stage completes, and within a
//! stage dice are drawn in a fixed left-to-right order. Under a seeded
//! [`crate::EntropySource`] that order is load-bearing for reproducibility,
//! so the stages must not be parallelized or reordered.

use crate::engine::DiceEngine;
use crate::error::DiceError;
use crate::records::{AttackProfile, CombatResult, DieRoll};

/// Drives a [`DiceEngine`] through the full combat sequence.
///
/// # Example
///
/// ```
/// use dice_core::{AttackProfile, CombatResolver, DiceEngine};
///
/// let mut engine = DiceEngine::new();
/// let profile = AttackProfile::new(10, 3, 4, 5, 1);
/// let result = CombatResolver::new(&mut engine).resolve(&profile).unwrap();
/// assert!(result.hits <= 10);
/// ```
pub struct CombatResolver<'a> {
    engine: &'a mut DiceEngine,
}

impl<'a> CombatResolver<'a> {
    /// Creates a resolver over the given engine.
    pub fn new(engine: &'a mut DiceEngine) -> Self {
        Self { engine }
    }

    /// Resolves one full attack sequence.
    ///
    /// Fails with [`DiceError::InvalidArgument`] for negative `attacks`
    /// before any dice are drawn. Thresholds are unconstrained; values
    /// outside `1..=6` legally produce always-succeed or always-fail stages.
    pub fn resolve(&mut self, profile: &AttackProfile) -> Result<CombatResult, DiceError> {
        if profile.attacks < 0 {
            return Err(DiceError::InvalidArgument {
                name: "attacks",
                value: profile.attacks,
            });
        }

        let mut result = CombatResult::new(*profile);

        // 1. Hit stage: one D6 per attack, one optional reroll per failure.
        result.hits = self.contested_stage(
            profile.attacks as u32,
            profile.hit_on,
            profile.hit_reroll,
            &mut result.hit_rolls,
        )?;
        tracing::debug!(attacks = profile.attacks, hits = result.hits, "hit stage resolved");

        // 2. Wound stage: identical logic, one trigger per counted hit.
        result.wounds = self.contested_stage(
            result.hits,
            profile.wound_on,
            profile.wound_reroll,
            &mut result.wound_rolls,
        )?;
        tracing::debug!(hits = result.hits, wounds = result.wounds, "wound stage resolved");

        // 3. Save stage: the defender rolls once per wound; no rerolls.
        for _ in 0..result.wounds {
            let roll = self.engine.roll_d6()?;
            let failed = (roll.value as i32) < profile.save;
            result.save_rolls.push(roll);
            if failed {
                result.saves_failed += 1;
            }
        }

        // 4. Damage.
        result.damage_dealt =
            i64::from(result.saves_failed) * i64::from(profile.damage_per_failure);

        tracing::debug!(
            saves_failed = result.saves_failed,
            damage_dealt = result.damage_dealt,
            "combat sequence resolved"
        );

        Ok(result)
    }

    /// Runs one attacker stage: `triggers` D6 rolls against `target`.
    ///
    /// A roll succeeds on `value >= target`. A failed roll is rerolled at
    /// most once when `reroll` is set, and the reroll is appended directly
    /// after the roll it replaces. Successful first rolls are never rerolled.
    fn contested_stage(
        &mut self,
        triggers: u32,
        target: i32,
        reroll: bool,
        rolls: &mut Vec<DieRoll>,
    ) -> Result<u32, DiceError> {
        let mut successes = 0;

        for _ in 0..triggers {
            let roll = self.engine.roll_d6()?;
            let passed = (roll.value as i32) >= target;
            rolls.push(roll);

            if passed {
                successes += 1;
            } else if reroll {
                let second = self.engine.roll_d6()?;
                let converted = (second.value as i32) >= target;
                rolls.push(second);
                if converted {
                    successes += 1;
                }
            }
        }

        Ok(successes)
    }
}
