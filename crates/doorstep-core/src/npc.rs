//! NPC spawning and the core conversion attempt.
//!
//! An attempt takes the session's effective rate for the preached
//! religion, adjusts it for the NPC's belief strength and attitude, and
//! rolls. Strong believers and hostile listeners halve the chance; weak
//! believers and favorable listeners double it.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use doorstep_types::{Attitude, BeliefStrength, LocationCategory, Npc, Religion};

use crate::beliefs::sample_profile;
use crate::rates::{clamp_unit, roll_chance};

/// Chance that a freshly spawned NPC is resistant and can never be
/// converted, in percent. Resistance is a fair coin flip.
const RESISTANT_PERCENT: u32 = 50;

/// Outcome of a single conversion attempt against an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The NPC already follows the preached religion; nothing changed.
    AlreadyFollower,
    /// The NPC converted to the preached religion.
    Converted,
    /// The NPC declined the pitch.
    Declined,
}

/// Spawn a fresh NPC at a location of the given category.
///
/// Half of all NPCs are resistant and will shut the door on every
/// preacher regardless of rates.
pub fn spawn_npc(category: LocationCategory, rng: &mut impl Rng) -> Npc {
    let resistant = rng.random_range(0..100) < RESISTANT_PERCENT;
    Npc {
        resistant,
        converted: false,
        failed_attempts: 0,
        beliefs: sample_profile(category, rng),
    }
}

/// Multiplier applied to the conversion chance for an NPC's belief
/// strength.
#[must_use]
pub fn strength_factor(strength: BeliefStrength) -> Decimal {
    match strength {
        BeliefStrength::Strong => Decimal::new(5, 1),
        BeliefStrength::Moderate => Decimal::ONE,
        BeliefStrength::Weak => Decimal::TWO,
    }
}

/// Multiplier applied to the conversion chance for an NPC's attitude.
#[must_use]
pub fn attitude_factor(attitude: Attitude) -> Decimal {
    match attitude {
        Attitude::Favorable => Decimal::TWO,
        Attitude::Neutral => Decimal::ONE,
        Attitude::Hostile => Decimal::new(5, 1),
    }
}

/// Final per-NPC conversion probability, clamped to the unit interval.
#[must_use]
pub fn conversion_chance(npc: &Npc, effective_rate: Decimal) -> Decimal {
    let adjusted = effective_rate
        .saturating_mul(strength_factor(npc.beliefs.strength))
        .saturating_mul(attitude_factor(npc.beliefs.attitude));
    clamp_unit(adjusted)
}

/// Attempt to convert an NPC to the given religion.
///
/// The caller supplies the already-penalized effective rate for the
/// religion; this function applies the NPC's personal factors and rolls.
/// An NPC who already follows the preached religion, or who was already
/// converted once this session, is a no-op: religion changes at most
/// once per NPC.
pub fn attempt_conversion(
    npc: &mut Npc,
    religion: Religion,
    effective_rate: Decimal,
    rng: &mut impl Rng,
) -> ConversionOutcome {
    if npc.converted || npc.beliefs.religion == religion {
        return ConversionOutcome::AlreadyFollower;
    }
    let chance = conversion_chance(npc, effective_rate);
    if roll_chance(rng, chance) {
        npc.converted = true;
        npc.beliefs.religion = religion;
        debug!(%religion, %chance, "npc converted");
        ConversionOutcome::Converted
    } else {
        debug!(%religion, %chance, "npc declined");
        ConversionOutcome::Declined
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use doorstep_types::BeliefProfile;

    use super::*;

    fn plain_npc(strength: BeliefStrength, attitude: Attitude) -> Npc {
        Npc {
            resistant: false,
            converted: false,
            failed_attempts: 0,
            beliefs: BeliefProfile {
                strength,
                attitude,
                religion: Religion::None,
            },
        }
    }

    #[test]
    fn factors_match_table() {
        assert_eq!(strength_factor(BeliefStrength::Strong), dec!(0.5));
        assert_eq!(strength_factor(BeliefStrength::Moderate), dec!(1));
        assert_eq!(strength_factor(BeliefStrength::Weak), dec!(2));
        assert_eq!(attitude_factor(Attitude::Favorable), dec!(2));
        assert_eq!(attitude_factor(Attitude::Hostile), dec!(0.5));
    }

    #[test]
    fn chance_compounds_both_factors() {
        let npc = plain_npc(BeliefStrength::Weak, Attitude::Favorable);
        // 0.2 * 2 * 2 = 0.8
        assert_eq!(conversion_chance(&npc, dec!(0.2)), dec!(0.8));

        let npc = plain_npc(BeliefStrength::Strong, Attitude::Hostile);
        // 0.2 * 0.5 * 0.5 = 0.05
        assert_eq!(conversion_chance(&npc, dec!(0.2)), dec!(0.05));
    }

    #[test]
    fn chance_is_clamped_to_unit() {
        let npc = plain_npc(BeliefStrength::Weak, Attitude::Favorable);
        assert_eq!(conversion_chance(&npc, dec!(0.9)), Decimal::ONE);
    }

    #[test]
    fn certain_rate_converts_and_sets_religion() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut npc = plain_npc(BeliefStrength::Moderate, Attitude::Neutral);
        let outcome = attempt_conversion(&mut npc, Religion::Mormon, Decimal::ONE, &mut rng);
        assert_eq!(outcome, ConversionOutcome::Converted);
        assert!(npc.converted);
        assert_eq!(npc.beliefs.religion, Religion::Mormon);
        assert_eq!(npc.failed_attempts, 0);
    }

    #[test]
    fn zero_rate_declines_without_counting_a_failed_attempt() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut npc = plain_npc(BeliefStrength::Weak, Attitude::Favorable);
        let outcome = attempt_conversion(&mut npc, Religion::Custom, Decimal::ZERO, &mut rng);
        assert_eq!(outcome, ConversionOutcome::Declined);
        assert!(!npc.converted);
        // Only a bad response raises the count, never a plain decline.
        assert_eq!(npc.failed_attempts, 0);
    }

    #[test]
    fn already_follower_is_untouched() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut npc = plain_npc(BeliefStrength::Moderate, Attitude::Neutral);
        npc.converted = true;
        npc.beliefs.religion = Religion::Satanic;
        let outcome = attempt_conversion(&mut npc, Religion::Satanic, Decimal::ONE, &mut rng);
        assert_eq!(outcome, ConversionOutcome::AlreadyFollower);
        assert_eq!(npc.failed_attempts, 0);
    }

    #[test]
    fn born_followers_cannot_be_converted_to_their_own_faith() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut npc = plain_npc(BeliefStrength::Weak, Attitude::Favorable);
        npc.beliefs.religion = Religion::Mormon;
        let outcome = attempt_conversion(&mut npc, Religion::Mormon, Decimal::ONE, &mut rng);
        assert_eq!(outcome, ConversionOutcome::AlreadyFollower);
        assert!(!npc.converted);
    }

    #[test]
    fn spawn_rate_of_resistance_is_a_coin_flip() {
        let mut rng = SmallRng::seed_from_u64(99);
        let resistant = (0..1_000)
            .filter(|_| spawn_npc(LocationCategory::House, &mut rng).resistant)
            .count();
        // ~50% with generous slack for the seed.
        assert!((400..=600).contains(&resistant), "got {resistant}");
    }

    #[test]
    fn repeated_declines_never_touch_failed_attempts() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut npc = plain_npc(BeliefStrength::Strong, Attitude::Hostile);
        for _ in 0..20 {
            let outcome = attempt_conversion(&mut npc, Religion::Custom, Decimal::ZERO, &mut rng);
            assert_eq!(outcome, ConversionOutcome::Declined);
        }
        assert_eq!(npc.failed_attempts, 0);
    }
}
