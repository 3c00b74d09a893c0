//! Core entity structs for the Doorstep preaching simulation.
//!
//! These are plain data carriers. The invariants noted on each field
//! (monotonic flags, set-once religion changes) are enforced by the
//! operations in `doorstep-core`, which is the only code that mutates them
//! after world generation.

use serde::{Deserialize, Serialize};

use crate::enums::{Attitude, BeliefStrength, LocationCategory, Religion};
use crate::ids::{LocationIndex, NeighborhoodIndex, NpcIndex};

// ---------------------------------------------------------------------------
// BeliefProfile
// ---------------------------------------------------------------------------

/// The beliefs of a single NPC, sampled at world generation.
///
/// `strength` and `attitude` never change. `religion` changes exactly once,
/// on successful conversion, and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeliefProfile {
    /// How firmly the NPC holds their beliefs (venue-weighted draw).
    pub strength: BeliefStrength,
    /// Disposition toward being preached at (uniform draw).
    pub attitude: Attitude,
    /// Current religion (uniform draw; mutated only by conversion).
    pub religion: Religion,
}

// ---------------------------------------------------------------------------
// Npc
// ---------------------------------------------------------------------------

/// A person the player may attempt to convert.
///
/// Created when a location is populated and never destroyed during a
/// session. After creation only `converted`, `failed_attempts`, and the
/// profile's religion are mutated, and only through the encounter protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Immune to all conversion attempts for the entire session.
    /// Fixed at creation (uniform coin flip).
    pub resistant: bool,
    /// Whether this NPC has been converted. Monotonic: false to true only.
    pub converted: bool,
    /// Number of bad responses this NPC has given. Non-decreasing; each
    /// failed attempt lowers the effective rate of later attempts.
    pub failed_attempts: u32,
    /// The NPC's belief profile.
    pub beliefs: BeliefProfile,
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A venue the player can visit, owning a fixed list of NPCs.
///
/// `is_church` is monotonic: once enough NPCs here are converted the
/// location becomes a church of the religion that crossed the threshold,
/// permanently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The kind of venue (fixed at generation).
    pub category: LocationCategory,
    /// The NPCs at this venue. Size and order are fixed after generation;
    /// a location may legitimately have zero NPCs.
    pub npcs: Vec<Npc>,
    /// Whether this location has flipped into a church. Never reverts.
    pub is_church: bool,
    /// The religion this church is attributed to. Set exactly once, at the
    /// moment `is_church` flips.
    pub church_religion: Option<Religion>,
}

// ---------------------------------------------------------------------------
// Neighborhood
// ---------------------------------------------------------------------------

/// A group of locations. Pure containment; membership is immutable after
/// world generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// The locations in this neighborhood.
    pub locations: Vec<Location>,
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// The complete game world: every neighborhood the player can visit.
/// Generated once at session start and kept for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// The neighborhoods, fixed at session start.
    pub neighborhoods: Vec<Neighborhood>,
}

// ---------------------------------------------------------------------------
// EncounterTarget
// ---------------------------------------------------------------------------

/// A fully qualified NPC address, assembled by the presentation layer from
/// the player's menu selections. Range-checked by the session before any
/// state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterTarget {
    /// Which neighborhood.
    pub neighborhood: NeighborhoodIndex,
    /// Which location within that neighborhood.
    pub location: LocationIndex,
    /// Which NPC at that location.
    pub npc: NpcIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_world() -> World {
        World {
            neighborhoods: vec![Neighborhood {
                locations: vec![Location {
                    category: LocationCategory::Park,
                    npcs: vec![Npc {
                        resistant: false,
                        converted: false,
                        failed_attempts: 0,
                        beliefs: BeliefProfile {
                            strength: BeliefStrength::Moderate,
                            attitude: Attitude::Neutral,
                            religion: Religion::None,
                        },
                    }],
                    is_church: false,
                    church_religion: None,
                }],
            }],
        }
    }

    #[test]
    fn world_round_trips_through_json() {
        let world = sample_world();
        let json = serde_json::to_string(&world).ok();
        assert!(json.is_some());
        let back: Option<World> = json.and_then(|j| serde_json::from_str(&j).ok());
        assert_eq!(back, Some(world));
    }

    #[test]
    fn fresh_location_is_not_a_church() {
        let world = sample_world();
        let location = world
            .neighborhoods
            .first()
            .and_then(|n| n.locations.first());
        assert!(location.is_some_and(|l| !l.is_church && l.church_religion.is_none()));
    }
}
