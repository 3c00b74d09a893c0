//! Per-religion conversion rate table and probability sampling.
//!
//! Rates are stored as exact [`Decimal`] values and are allowed to grow
//! past 1.0 as location multipliers compound into them over a session.
//! Clamping to the unit interval happens only at the point where a rate
//! is used as a sampling weight, so the compounding history is never
//! lost to saturation.

use std::collections::BTreeMap;

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use doorstep_types::Religion;

use crate::config::RatesConfig;

/// Resolution of the integer dice roll used for probability sampling.
///
/// A unit-interval probability is scaled to basis points and compared
/// against a uniform draw in `0..10_000`, keeping sampling exact for any
/// probability with at most four decimal places.
const BASIS_POINTS: u32 = 10_000;

/// Per-religion conversion rates for one session.
///
/// Every variant of [`Religion`] has an entry; [`Religion::None`] is
/// seeded at zero and only ever scaled, so it stays zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<Religion, Decimal>,
}

impl RateTable {
    /// Build the starting table from configured initial rates.
    #[must_use]
    pub fn new(config: &RatesConfig) -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(Religion::None, Decimal::ZERO);
        rates.insert(Religion::Evangelist, config.evangelist);
        rates.insert(Religion::JehovahsWitness, config.jehovahs_witness);
        rates.insert(Religion::Mormon, config.mormon);
        rates.insert(Religion::Custom, config.custom);
        rates.insert(Religion::Satanic, config.satanic);
        Self { rates }
    }

    /// Current stored (unclamped) rate for a religion.
    #[must_use]
    pub fn rate(&self, religion: Religion) -> Decimal {
        self.rates.get(&religion).copied().unwrap_or(Decimal::ZERO)
    }

    /// Multiply every stored rate by the given factor.
    ///
    /// Applied after each encounter with the current location's
    /// conversion multiplier; the multiplier affects all religions, not
    /// just the one being preached.
    pub fn scale_all(&mut self, factor: Decimal) {
        for rate in self.rates.values_mut() {
            *rate = rate.saturating_mul(factor);
        }
        debug!(%factor, "scaled all conversion rates");
    }

    /// Double the stored rate for a single religion.
    pub fn double(&mut self, religion: Religion) {
        if let Some(rate) = self.rates.get_mut(&religion) {
            *rate = rate.saturating_mul(Decimal::TWO);
            debug!(%religion, rate = %*rate, "doubled conversion rate");
        }
    }

    /// Effective conversion rate against a specific NPC.
    ///
    /// Each prior failed attempt on the NPC subtracts a fixed penalty;
    /// the result never goes below zero. The returned value is still
    /// unclamped above, matching the stored rate.
    #[must_use]
    pub fn effective_rate(
        &self,
        religion: Religion,
        failed_attempts: u32,
        penalty: Decimal,
    ) -> Decimal {
        let base = self.rate(religion);
        let reduction = penalty.saturating_mul(Decimal::from(failed_attempts));
        let effective = base.saturating_sub(reduction);
        effective.max(Decimal::ZERO)
    }
}

/// Clamp a probability-like value to the unit interval.
#[must_use]
pub fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Roll a Bernoulli trial with the given success probability.
///
/// The probability is clamped to the unit interval, scaled to basis
/// points, and compared against a uniform integer draw. A probability of
/// zero never succeeds; one (or anything above) always does.
pub fn roll_chance(rng: &mut impl Rng, probability: Decimal) -> bool {
    let scaled = clamp_unit(probability).saturating_mul(Decimal::from(BASIS_POINTS));
    let threshold = scaled.try_into().unwrap_or(BASIS_POINTS);
    let roll = rng.random_range(0..BASIS_POINTS);
    roll < threshold
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use super::*;

    fn table() -> RateTable {
        RateTable::new(&RatesConfig::default())
    }

    #[test]
    fn initial_rates_come_from_config() {
        let rates = table();
        assert_eq!(rates.rate(Religion::Evangelist), dec!(0.3));
        assert_eq!(rates.rate(Religion::Satanic), dec!(0.5));
        assert_eq!(rates.rate(Religion::None), Decimal::ZERO);
    }

    #[test]
    fn scale_all_compounds_exactly() {
        let mut rates = table();
        rates.scale_all(dec!(1.5));
        assert_eq!(rates.rate(Religion::Evangelist), dec!(0.45));
        rates.scale_all(dec!(1.5));
        assert_eq!(rates.rate(Religion::Evangelist), dec!(0.675));
        // None stays zero no matter how often it is scaled.
        assert_eq!(rates.rate(Religion::None), Decimal::ZERO);
    }

    #[test]
    fn double_affects_only_one_religion() {
        let mut rates = table();
        rates.double(Religion::Satanic);
        assert_eq!(rates.rate(Religion::Satanic), dec!(1.0));
        assert_eq!(rates.rate(Religion::Mormon), dec!(0.25));
    }

    #[test]
    fn stored_rates_may_exceed_one() {
        let mut rates = table();
        rates.double(Religion::Satanic);
        rates.double(Religion::Satanic);
        assert_eq!(rates.rate(Religion::Satanic), dec!(2.0));
    }

    #[test]
    fn effective_rate_subtracts_penalty_per_failure() {
        let rates = table();
        let penalty = dec!(0.1);
        assert_eq!(
            rates.effective_rate(Religion::Evangelist, 0, penalty),
            dec!(0.3)
        );
        assert_eq!(
            rates.effective_rate(Religion::Evangelist, 2, penalty),
            dec!(0.1)
        );
        // Floors at zero rather than going negative.
        assert_eq!(
            rates.effective_rate(Religion::Evangelist, 5, penalty),
            Decimal::ZERO
        );
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(dec!(-0.5)), Decimal::ZERO);
        assert_eq!(clamp_unit(dec!(0.4)), dec!(0.4));
        assert_eq!(clamp_unit(dec!(3.2)), Decimal::ONE);
    }

    #[test]
    fn roll_chance_extremes_are_certain() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(roll_chance(&mut rng, Decimal::ONE));
            assert!(!roll_chance(&mut rng, Decimal::ZERO));
        }
        // Above-unit probabilities behave as certainty.
        assert!(roll_chance(&mut rng, dec!(4.0)));
    }
}
