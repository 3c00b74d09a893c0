//! Shared type definitions for the Doorstep preaching simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the Doorstep workspace. It contains no rules logic: belief sampling,
//! conversion mechanics, and session orchestration all live in
//! `doorstep-core` and operate on the plain structs defined here.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe index wrappers for addressing entities inside the
//!   world's fixed ordered lists
//! - [`enums`] -- Enumeration types (religions, belief traits, venues,
//!   weather, days, endgame choices)
//! - [`structs`] -- Core entity structs (belief profiles, NPCs, locations,
//!   neighborhoods, the world)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Attitude, BeliefStrength, DayOfWeek, LocationCategory, PreachingStrategy, Religion,
    SupernaturalForm, Weather,
};
pub use ids::{LocationIndex, NeighborhoodIndex, NpcIndex};
pub use structs::{BeliefProfile, EncounterTarget, Location, Neighborhood, Npc, World};
