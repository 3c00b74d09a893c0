//! Core rules engine for the doorstep preaching simulation.
//!
//! A [`Session`] owns a procedurally generated world of neighborhoods,
//! locations, and NPCs, and plays out one week of door-to-door
//! preaching: choose a religion, knock on doors, weather the sub-events,
//! and tally conversions, churches, and the occasional pact with the
//! other side.
//!
//! The crate is a pure in-process library: deterministic under a seeded
//! RNG, no I/O beyond optional YAML config loading, and every fallible
//! operation returns a typed [`SimError`].

pub mod beliefs;
pub mod clock;
pub mod config;
pub mod encounter;
pub mod error;
pub mod location;
pub mod npc;
pub mod rates;
pub mod session;
pub mod worldgen;

pub use beliefs::{StrengthWeights, sample_profile};
pub use clock::{DAYS_PER_WEEK, DayClock, hunger_cost, sample_weather};
pub use config::{
    ConfigError, EncounterConfig, EndgameConfig, HungerConfig, RatesConfig, SimConfig,
    WorldGenConfig,
};
pub use encounter::{
    BadResponseEvent, EncounterOutcome, EncounterReport, EncounterResponse, PendingChoice,
    draw_response, roll_bad_response_event,
};
pub use error::SimError;
pub use location::{conversion_multiplier, converted_count, update_church_status};
pub use npc::{ConversionOutcome, attempt_conversion, conversion_chance, spawn_npc};
pub use rates::{RateTable, clamp_unit, roll_chance};
pub use session::{Dashboard, DayStart, GameResult, HungerAdvance, Session, SessionPhase};
pub use worldgen::generate_world;
