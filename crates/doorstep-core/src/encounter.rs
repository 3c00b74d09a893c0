//! Doorstep encounter vocabulary and sub-event rolls.
//!
//! The session drives the full encounter turn; this module owns the
//! outcome types, the good/bad response draw, and the bad-response
//! sub-event table. Sub-events that need a player decision surface as a
//! [`PendingChoice`] token which the session holds until answered.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EncounterConfig;
use crate::rates::roll_chance;

/// How one doorstep encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    /// The NPC is resistant and slammed the door; nothing changed.
    Resisted,
    /// The NPC already follows a religion; nothing changed.
    AlreadyFollower,
    /// The NPC reacted badly; a sub-event may have triggered.
    Bad,
    /// The NPC listened politely but was not convinced.
    Declined,
    /// The NPC converted.
    Converted,
}

impl std::fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Resisted => "resisted",
            Self::AlreadyFollower => "already a follower",
            Self::Bad => "bad response",
            Self::Declined => "declined",
            Self::Converted => "converted",
        };
        f.write_str(label)
    }
}

/// A decision the player must make before the session moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingChoice {
    /// Someone offered food; accepting reduces hunger.
    FoodDonation,
    /// A Satanist offered their bible; accepting switches the player's
    /// religion to Satanic for the rest of the session.
    SatanicBible,
}

impl std::fmt::Display for PendingChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::FoodDonation => "food donation",
            Self::SatanicBible => "satanic bible offer",
        };
        f.write_str(label)
    }
}

/// Result of one encounter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterReport {
    /// How the doorstep conversation went.
    pub outcome: EncounterOutcome,
    /// A decision now blocking the session, if a sub-event raised one.
    pub pending: Option<PendingChoice>,
}

/// First reaction at the door, drawn against the effective rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterResponse {
    /// The NPC is willing to hear the pitch out.
    Nice,
    /// The NPC reacts badly before any preaching lands.
    Bad,
}

/// Draw the NPC's initial reaction.
///
/// The clamped effective rate doubles as the chance of a nice reception:
/// a preacher nobody listens to also gets the door in their face.
pub fn draw_response(rng: &mut impl Rng, nice_chance: Decimal) -> EncounterResponse {
    if roll_chance(rng, nice_chance) {
        EncounterResponse::Nice
    } else {
        EncounterResponse::Bad
    }
}

/// Secondary event that can follow a bad response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadResponseEvent {
    /// A sympathetic bystander offers food (pending choice).
    FoodDonation,
    /// A Satanist counter-proselytizes with their own bible (pending
    /// choice; never rolled while already preaching Satanic).
    SatanicBibleOffer,
    /// A fellow Satanic preacher joins in; the Satanic rate doubles
    /// immediately, no choice involved.
    SatanicPreacherJoins,
}

/// Roll the bad-response sub-event table.
///
/// Triggers with `side_event_chance`; within a trigger, the donation
/// split decides between food and the Satanic branch. The Satanic branch
/// depends on what is being preached: outsiders get the bible offer,
/// Satanic preachers get reinforcements instead.
pub fn roll_bad_response_event(
    rng: &mut impl Rng,
    config: &EncounterConfig,
    preaching_satanic: bool,
) -> Option<BadResponseEvent> {
    if !roll_chance(rng, config.side_event_chance) {
        return None;
    }
    if roll_chance(rng, config.side_event_donation_split) {
        Some(BadResponseEvent::FoodDonation)
    } else if preaching_satanic {
        Some(BadResponseEvent::SatanicPreacherJoins)
    } else {
        Some(BadResponseEvent::SatanicBibleOffer)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use super::*;

    fn config(chance: Decimal, split: Decimal) -> EncounterConfig {
        EncounterConfig {
            side_event_chance: chance,
            side_event_donation_split: split,
            ..EncounterConfig::default()
        }
    }

    #[test]
    fn zero_side_event_chance_never_triggers() {
        let mut rng = SmallRng::seed_from_u64(1);
        let cfg = config(Decimal::ZERO, dec!(0.5));
        for _ in 0..100 {
            assert_eq!(roll_bad_response_event(&mut rng, &cfg, false), None);
        }
    }

    #[test]
    fn certain_trigger_with_full_split_is_always_food() {
        let mut rng = SmallRng::seed_from_u64(2);
        let cfg = config(Decimal::ONE, Decimal::ONE);
        for _ in 0..50 {
            assert_eq!(
                roll_bad_response_event(&mut rng, &cfg, true),
                Some(BadResponseEvent::FoodDonation)
            );
        }
    }

    #[test]
    fn satanic_branch_depends_on_preached_religion() {
        let mut rng = SmallRng::seed_from_u64(3);
        let cfg = config(Decimal::ONE, Decimal::ZERO);
        assert_eq!(
            roll_bad_response_event(&mut rng, &cfg, false),
            Some(BadResponseEvent::SatanicBibleOffer)
        );
        assert_eq!(
            roll_bad_response_event(&mut rng, &cfg, true),
            Some(BadResponseEvent::SatanicPreacherJoins)
        );
    }

    #[test]
    fn response_draw_extremes() {
        let mut rng = SmallRng::seed_from_u64(4);
        assert_eq!(
            draw_response(&mut rng, Decimal::ONE),
            EncounterResponse::Nice
        );
        assert_eq!(
            draw_response(&mut rng, Decimal::ZERO),
            EncounterResponse::Bad
        );
    }
}
