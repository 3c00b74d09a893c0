//! Configuration loading and typed config structures for the simulation.
//!
//! Every tunable of the rules model lives here: initial conversion rates,
//! world-generation bounds, hunger costs, encounter probabilities, and
//! endgame thresholds. Defaults reproduce the classic game balance. A
//! runner may override any subset from a YAML file; all fields are
//! individually defaulted so a partial file is valid.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// All sections have defaults matching the classic game balance, so
/// `SimConfig::default()` is a complete, playable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Initial per-religion conversion rates.
    #[serde(default)]
    pub rates: RatesConfig,

    /// World-generation bounds.
    #[serde(default)]
    pub world: WorldGenConfig,

    /// Hunger costs and the daily limit.
    #[serde(default)]
    pub hunger: HungerConfig,

    /// Encounter probabilities and thresholds.
    #[serde(default)]
    pub encounter: EncounterConfig,

    /// Endgame thresholds.
    #[serde(default)]
    pub endgame: EndgameConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Initial conversion rate for each preachable religion.
///
/// These seed the session's rate table. Stored rates grow without bound
/// over a session (location multipliers compound into them); clamping to
/// the unit interval happens only where a rate is used as a sampling
/// weight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatesConfig {
    /// Starting rate for Evangelist preaching (default: 0.3).
    #[serde(default = "default_evangelist_rate")]
    pub evangelist: Decimal,

    /// Starting rate for Jehovah's Witness preaching (default: 0.2).
    #[serde(default = "default_jehovahs_witness_rate")]
    pub jehovahs_witness: Decimal,

    /// Starting rate for Mormon preaching (default: 0.25).
    #[serde(default = "default_mormon_rate")]
    pub mormon: Decimal,

    /// Starting rate for Custom preaching (default: 0.15).
    #[serde(default = "default_custom_rate")]
    pub custom: Decimal,

    /// Starting rate for Satanic preaching (default: 0.5).
    #[serde(default = "default_satanic_rate")]
    pub satanic: Decimal,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            evangelist: default_evangelist_rate(),
            jehovahs_witness: default_jehovahs_witness_rate(),
            mormon: default_mormon_rate(),
            custom: default_custom_rate(),
            satanic: default_satanic_rate(),
        }
    }
}

fn default_evangelist_rate() -> Decimal {
    // 0.3
    Decimal::new(3, 1)
}

fn default_jehovahs_witness_rate() -> Decimal {
    // 0.2
    Decimal::new(2, 1)
}

fn default_mormon_rate() -> Decimal {
    // 0.25
    Decimal::new(25, 2)
}

fn default_custom_rate() -> Decimal {
    // 0.15
    Decimal::new(15, 2)
}

fn default_satanic_rate() -> Decimal {
    // 0.5
    Decimal::new(5, 1)
}

/// Bounds for procedural world generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldGenConfig {
    /// Number of neighborhoods in the world (default: 2).
    #[serde(default = "default_neighborhood_count")]
    pub neighborhood_count: u32,

    /// Minimum locations per neighborhood (default: 1).
    #[serde(default = "default_min_locations")]
    pub min_locations: u32,

    /// Maximum locations per neighborhood (default: 10).
    #[serde(default = "default_max_locations")]
    pub max_locations: u32,

    /// Maximum NPCs per location (default: 10). The minimum is always 0:
    /// empty locations are a legal part of the world.
    #[serde(default = "default_max_npcs")]
    pub max_npcs: u32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            neighborhood_count: default_neighborhood_count(),
            min_locations: default_min_locations(),
            max_locations: default_max_locations(),
            max_npcs: default_max_npcs(),
        }
    }
}

const fn default_neighborhood_count() -> u32 {
    2
}

const fn default_min_locations() -> u32 {
    1
}

const fn default_max_locations() -> u32 {
    10
}

const fn default_max_npcs() -> u32 {
    10
}

/// Hunger costs per encounter and the daily limit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HungerConfig {
    /// Hunger added per encounter on hot or cold days (default: 15).
    #[serde(default = "default_harsh_weather_cost")]
    pub harsh_weather_cost: u32,

    /// Hunger added per encounter on nice days (default: 10).
    #[serde(default = "default_mild_weather_cost")]
    pub mild_weather_cost: u32,

    /// Hunger level at which the day is forcibly over (default: 100).
    #[serde(default = "default_day_limit")]
    pub day_limit: u32,

    /// Hunger removed by eating a food donation (default: 20).
    #[serde(default = "default_donation_relief")]
    pub donation_relief: u32,
}

impl Default for HungerConfig {
    fn default() -> Self {
        Self {
            harsh_weather_cost: default_harsh_weather_cost(),
            mild_weather_cost: default_mild_weather_cost(),
            day_limit: default_day_limit(),
            donation_relief: default_donation_relief(),
        }
    }
}

const fn default_harsh_weather_cost() -> u32 {
    15
}

const fn default_mild_weather_cost() -> u32 {
    10
}

const fn default_day_limit() -> u32 {
    100
}

const fn default_donation_relief() -> u32 {
    20
}

/// Encounter probabilities and thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncounterConfig {
    /// Rate reduction per prior failed attempt on the same NPC
    /// (default: 0.1).
    #[serde(default = "default_failed_attempt_penalty")]
    pub failed_attempt_penalty: Decimal,

    /// Chance that a bad response triggers a secondary event
    /// (default: 0.1).
    #[serde(default = "default_side_event_chance")]
    pub side_event_chance: Decimal,

    /// Within a triggered secondary event, the chance it is a consolation
    /// food donation rather than a Satanic encounter (default: 0.5).
    #[serde(default = "default_side_event_donation_split")]
    pub side_event_donation_split: Decimal,

    /// Chance that a fresh convert donates food (default: 0.2).
    #[serde(default = "default_donation_chance")]
    pub donation_chance: Decimal,

    /// Converted NPCs required for a location to become a church
    /// (default: 10).
    #[serde(default = "default_church_threshold")]
    pub church_threshold: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            failed_attempt_penalty: default_failed_attempt_penalty(),
            side_event_chance: default_side_event_chance(),
            side_event_donation_split: default_side_event_donation_split(),
            donation_chance: default_donation_chance(),
            church_threshold: default_church_threshold(),
        }
    }
}

fn default_failed_attempt_penalty() -> Decimal {
    // 0.1
    Decimal::new(1, 1)
}

fn default_side_event_chance() -> Decimal {
    // 0.1
    Decimal::new(1, 1)
}

fn default_side_event_donation_split() -> Decimal {
    // 0.5
    Decimal::new(5, 1)
}

fn default_donation_chance() -> Decimal {
    // 0.2
    Decimal::new(2, 1)
}

const fn default_church_threshold() -> u32 {
    10
}

/// Endgame thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndgameConfig {
    /// Churches required across the world for the church win (default: 3).
    #[serde(default = "default_church_win_threshold")]
    pub church_win_threshold: u32,

    /// Satanic score required to unlock the supernatural choice
    /// (default: 10).
    #[serde(default = "default_supernatural_threshold")]
    pub supernatural_threshold: u32,
}

impl Default for EndgameConfig {
    fn default() -> Self {
        Self {
            church_win_threshold: default_church_win_threshold(),
            supernatural_threshold: default_supernatural_threshold(),
        }
    }
}

const fn default_church_win_threshold() -> u32 {
    3
}

const fn default_supernatural_threshold() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rates_match_classic_balance() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.rates.evangelist, dec!(0.3));
        assert_eq!(cfg.rates.jehovahs_witness, dec!(0.2));
        assert_eq!(cfg.rates.mormon, dec!(0.25));
        assert_eq!(cfg.rates.custom, dec!(0.15));
        assert_eq!(cfg.rates.satanic, dec!(0.5));
    }

    #[test]
    fn default_world_bounds() {
        let cfg = WorldGenConfig::default();
        assert_eq!(cfg.neighborhood_count, 2);
        assert_eq!(cfg.min_locations, 1);
        assert_eq!(cfg.max_locations, 10);
        assert_eq!(cfg.max_npcs, 10);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let cfg = SimConfig::parse("{}");
        assert!(cfg.is_ok());
        assert_eq!(cfg.ok(), Some(SimConfig::default()));
    }

    #[test]
    fn partial_yaml_overrides_one_section() {
        let yaml = "hunger:\n  day_limit: 50\n";
        let cfg = SimConfig::parse(yaml).ok();
        assert!(cfg.is_some());
        if let Some(cfg) = cfg {
            assert_eq!(cfg.hunger.day_limit, 50);
            // Untouched sections keep their defaults.
            assert_eq!(cfg.hunger.harsh_weather_cost, 15);
            assert_eq!(cfg.encounter.church_threshold, 10);
        }
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = SimConfig::parse("rates: [");
        assert!(result.is_err());
    }
}
