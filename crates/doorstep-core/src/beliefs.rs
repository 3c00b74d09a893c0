//! Belief-profile generation for NPCs.
//!
//! Belief strength is drawn by location category from a fixed weight
//! table; attitude is drawn uniformly. The weights, in percent:
//!
//! | Category | Strong | Moderate | Weak |
//! |----------|--------|---------|------|
//! | Church   | 60     | 30      | 10   |
//! | School   | 10     | 20      | 70   |
//! | other    | 30     | 40      | 30   |

use rand::Rng;

use doorstep_types::{Attitude, BeliefProfile, BeliefStrength, LocationCategory, Religion};

/// Integer weights over the three belief strengths, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthWeights {
    /// Weight for [`BeliefStrength::Strong`].
    pub strong: u32,
    /// Weight for [`BeliefStrength::Moderate`].
    pub moderate: u32,
    /// Weight for [`BeliefStrength::Weak`].
    pub weak: u32,
}

impl StrengthWeights {
    /// Weight table for a location category.
    ///
    /// Churches skew strong, schools skew weak, everywhere else is
    /// roughly balanced.
    #[must_use]
    pub const fn for_category(category: LocationCategory) -> Self {
        match category {
            LocationCategory::Church => Self {
                strong: 60,
                moderate: 30,
                weak: 10,
            },
            LocationCategory::School => Self {
                strong: 10,
                moderate: 20,
                weak: 70,
            },
            LocationCategory::House
            | LocationCategory::Apartment
            | LocationCategory::ShoppingCenter
            | LocationCategory::Park
            | LocationCategory::Office
            | LocationCategory::Restaurant
            | LocationCategory::Cafe
            | LocationCategory::Hospital => Self {
                strong: 30,
                moderate: 40,
                weak: 30,
            },
        }
    }

    /// Total weight across all strengths.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.strong
            .saturating_add(self.moderate)
            .saturating_add(self.weak)
    }

    /// Draw a belief strength according to these weights.
    pub fn sample(&self, rng: &mut impl Rng) -> BeliefStrength {
        let total = self.total().max(1);
        let roll = rng.random_range(0..total);
        let mut cumulative = self.strong;
        if roll < cumulative {
            return BeliefStrength::Strong;
        }
        cumulative = cumulative.saturating_add(self.moderate);
        if roll < cumulative {
            return BeliefStrength::Moderate;
        }
        BeliefStrength::Weak
    }
}

/// Draw a complete belief profile for an NPC spawning at a location of
/// the given category.
///
/// Strength follows the category weight table; attitude and religion are
/// uniform over their enumerations, independent of the category and of
/// each other.
pub fn sample_profile(category: LocationCategory, rng: &mut impl Rng) -> BeliefProfile {
    let strength = StrengthWeights::for_category(category).sample(rng);
    let attitude = sample_attitude(rng);
    let religion = sample_religion(rng);
    BeliefProfile {
        strength,
        attitude,
        religion,
    }
}

fn sample_attitude(rng: &mut impl Rng) -> Attitude {
    let roll = rng.random_range(0..Attitude::ALL.len());
    Attitude::ALL.get(roll).copied().unwrap_or(Attitude::Neutral)
}

fn sample_religion(rng: &mut impl Rng) -> Religion {
    let roll = rng.random_range(0..Religion::ALL.len());
    Religion::ALL.get(roll).copied().unwrap_or(Religion::None)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn weights_sum_to_one_hundred_for_every_category() {
        for category in LocationCategory::ALL {
            assert_eq!(
                StrengthWeights::for_category(category).total(),
                100,
                "weights for {category} must total 100"
            );
        }
    }

    #[test]
    fn church_weights_skew_strong() {
        let weights = StrengthWeights::for_category(LocationCategory::Church);
        assert_eq!(weights.strong, 60);
        assert_eq!(weights.weak, 10);
    }

    #[test]
    fn school_weights_skew_weak() {
        let weights = StrengthWeights::for_category(LocationCategory::School);
        assert_eq!(weights.weak, 70);
    }

    #[test]
    fn sample_respects_degenerate_weights() {
        let mut rng = SmallRng::seed_from_u64(11);
        let all_strong = StrengthWeights {
            strong: 100,
            moderate: 0,
            weak: 0,
        };
        let all_weak = StrengthWeights {
            strong: 0,
            moderate: 0,
            weak: 100,
        };
        for _ in 0..50 {
            assert_eq!(all_strong.sample(&mut rng), BeliefStrength::Strong);
            assert_eq!(all_weak.sample(&mut rng), BeliefStrength::Weak);
        }
    }

    #[test]
    fn religion_draw_covers_the_full_roster() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            let profile = sample_profile(LocationCategory::House, &mut rng);
            seen.insert(profile.religion);
        }
        assert_eq!(seen.len(), Religion::ALL.len());
    }

    #[test]
    fn sampling_covers_every_strength_somewhere() {
        let mut rng = SmallRng::seed_from_u64(42);
        let weights = StrengthWeights::for_category(LocationCategory::Park);
        let (mut strong, mut moderate, mut weak) = (false, false, false);
        for _ in 0..500 {
            match weights.sample(&mut rng) {
                BeliefStrength::Strong => strong = true,
                BeliefStrength::Moderate => moderate = true,
                BeliefStrength::Weak => weak = true,
            }
        }
        assert!(strong && moderate && weak);
    }
}
