//! Day clock, weather sampling, and per-encounter hunger costs.
//!
//! A session runs for one calendar week, Sunday through Saturday. Each
//! day draws weather once at dawn; hot and cold days make every
//! encounter cost more hunger than nice ones.

use rand::Rng;

use doorstep_types::{DayOfWeek, Weather};

use crate::config::HungerConfig;

/// Days in one full session.
pub const DAYS_PER_WEEK: u32 = 7;

/// Tracks where in the week the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    day: DayOfWeek,
    days_elapsed: u32,
}

impl DayClock {
    /// A fresh clock at the start of Sunday.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            day: DayOfWeek::Sunday,
            days_elapsed: 0,
        }
    }

    /// The current day of the week.
    #[must_use]
    pub const fn day(&self) -> DayOfWeek {
        self.day
    }

    /// Number of completed days.
    #[must_use]
    pub const fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Close the current day and move to the next.
    pub fn advance(&mut self) {
        self.days_elapsed = self.days_elapsed.saturating_add(1);
        self.day = self.day.next();
    }

    /// Whether the full week has been played out.
    #[must_use]
    pub const fn week_complete(&self) -> bool {
        self.days_elapsed >= DAYS_PER_WEEK
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the day's weather, uniform over all conditions.
pub fn sample_weather(rng: &mut impl Rng) -> Weather {
    let roll = rng.random_range(0..Weather::ALL.len());
    Weather::ALL.get(roll).copied().unwrap_or(Weather::Nice)
}

/// Hunger added by one encounter under the given weather.
#[must_use]
pub const fn hunger_cost(weather: Weather, config: &HungerConfig) -> u32 {
    if weather.is_harsh() {
        config.harsh_weather_cost
    } else {
        config.mild_weather_cost
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn clock_walks_sunday_to_saturday() {
        let mut clock = DayClock::new();
        assert_eq!(clock.day(), DayOfWeek::Sunday);
        assert!(!clock.week_complete());
        for _ in 0..6 {
            clock.advance();
            assert!(!clock.week_complete());
        }
        assert_eq!(clock.day(), DayOfWeek::Saturday);
        clock.advance();
        assert!(clock.week_complete());
        assert_eq!(clock.days_elapsed(), DAYS_PER_WEEK);
        // Wraps back around for display purposes.
        assert_eq!(clock.day(), DayOfWeek::Sunday);
    }

    #[test]
    fn harsh_weather_costs_more() {
        let config = HungerConfig::default();
        assert_eq!(hunger_cost(Weather::Hot, &config), 15);
        assert_eq!(hunger_cost(Weather::Cold, &config), 15);
        assert_eq!(hunger_cost(Weather::Nice, &config), 10);
    }

    #[test]
    fn weather_sampling_hits_every_condition() {
        let mut rng = SmallRng::seed_from_u64(21);
        let (mut hot, mut cold, mut nice) = (false, false, false);
        for _ in 0..200 {
            match sample_weather(&mut rng) {
                Weather::Hot => hot = true,
                Weather::Cold => cold = true,
                Weather::Nice => nice = true,
            }
        }
        assert!(hot && cold && nice);
    }
}
