//! Enumeration types for the Doorstep preaching simulation.
//!
//! Every closed set in the data model lives here: the religion roster, the
//! two belief-profile axes, venue categories, daily weather, the day of the
//! week, and the two flavor choices (preaching strategy, endgame form).
//! Enumerations that are sampled uniformly expose an `ALL` table so that
//! samplers in `doorstep-core` never hand-maintain variant lists.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Religion
// ---------------------------------------------------------------------------

/// A belief system an NPC may follow or the player may preach.
///
/// NPCs are generated with a uniform draw over all six variants (including
/// [`Religion::None`]); the player starts with one of the four
/// [`Religion::STARTABLE`] entries and may later switch to
/// [`Religion::Satanic`] through the Satanic-bible event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Religion {
    /// No religious affiliation.
    None,
    /// Evangelist Christianity.
    Evangelist,
    /// Jehovah's Witnesses.
    JehovahsWitness,
    /// The Church of Jesus Christ of Latter-day Saints.
    Mormon,
    /// A custom belief system invented by the player.
    Custom,
    /// Satanism. Never a starting religion; adopted at runtime only.
    Satanic,
}

impl Religion {
    /// Every religion, in declaration order. Used for uniform NPC sampling
    /// and as the key set of the conversion-rate table.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Evangelist,
        Self::JehovahsWitness,
        Self::Mormon,
        Self::Custom,
        Self::Satanic,
    ];

    /// The religions the player may choose at session start.
    pub const STARTABLE: [Self; 4] = [
        Self::Evangelist,
        Self::JehovahsWitness,
        Self::Mormon,
        Self::Custom,
    ];
}

impl core::fmt::Display for Religion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Evangelist => "Evangelist",
            Self::JehovahsWitness => "Jehovah's Witness",
            Self::Mormon => "Mormon",
            Self::Custom => "Custom",
            Self::Satanic => "Satanic",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Belief profile axes
// ---------------------------------------------------------------------------

/// How firmly an NPC holds their current beliefs.
///
/// Sampled with venue-dependent weights (churches skew strong, schools skew
/// weak). Strong halves the conversion chance, weak doubles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BeliefStrength {
    /// Deeply held convictions; conversion chance is halved.
    Strong,
    /// Ordinary conviction; no modifier.
    Moderate,
    /// Loosely held beliefs; conversion chance is doubled.
    Weak,
}

/// An NPC's disposition toward being preached at.
///
/// Sampled uniformly, independent of venue and strength. Favorable doubles
/// the conversion chance, hostile halves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attitude {
    /// Receptive to the message; conversion chance is doubled.
    Favorable,
    /// Indifferent; no modifier.
    Neutral,
    /// Antagonistic; conversion chance is halved.
    Hostile,
}

impl Attitude {
    /// Every attitude, in declaration order, for uniform sampling.
    pub const ALL: [Self; 3] = [Self::Favorable, Self::Neutral, Self::Hostile];
}

// ---------------------------------------------------------------------------
// LocationCategory
// ---------------------------------------------------------------------------

/// The kind of venue a location is.
///
/// Chosen uniformly at world generation. The category feeds belief-strength
/// weighting for the NPCs generated there ([`LocationCategory::Church`] and
/// [`LocationCategory::School`] have skewed distributions) and has no other
/// mechanical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    /// A private house.
    House,
    /// An apartment building.
    Apartment,
    /// A public park.
    Park,
    /// A school; residents skew toward weak beliefs.
    School,
    /// An office building.
    Office,
    /// A cafe.
    Cafe,
    /// A restaurant.
    Restaurant,
    /// A shopping center.
    ShoppingCenter,
    /// An existing church; residents skew toward strong beliefs.
    Church,
    /// A hospital.
    Hospital,
}

impl LocationCategory {
    /// Every venue category, in declaration order, for uniform sampling.
    pub const ALL: [Self; 10] = [
        Self::House,
        Self::Apartment,
        Self::Park,
        Self::School,
        Self::Office,
        Self::Cafe,
        Self::Restaurant,
        Self::ShoppingCenter,
        Self::Church,
        Self::Hospital,
    ];
}

impl core::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Park => "Park",
            Self::School => "School",
            Self::Office => "Office",
            Self::Cafe => "Cafe",
            Self::Restaurant => "Restaurant",
            Self::ShoppingCenter => "Shopping Center",
            Self::Church => "Church",
            Self::Hospital => "Hospital",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// The weather for one simulated day, sampled uniformly at day start.
///
/// Harsh weather (hot or cold) makes each encounter cost more hunger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// A hot day; harsh.
    Hot,
    /// A cold day; harsh.
    Cold,
    /// A pleasant day; mild.
    Nice,
}

impl Weather {
    /// Every weather variant, in declaration order, for uniform sampling.
    pub const ALL: [Self; 3] = [Self::Hot, Self::Cold, Self::Nice];

    /// Whether this weather is harsh (drains hunger faster).
    pub const fn is_harsh(self) -> bool {
        matches!(self, Self::Hot | Self::Cold)
    }
}

impl core::fmt::Display for Weather {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Nice => "nice",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

/// A day of the week. The session runs for exactly one week, starting on
/// Sunday and cycling through [`DayOfWeek::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Sunday, the first day of the session.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl DayOfWeek {
    /// The day following this one, wrapping Saturday back to Sunday.
    pub const fn next(self) -> Self {
        match self {
            Self::Sunday => Self::Monday,
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
        }
    }
}

impl core::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// PreachingStrategy
// ---------------------------------------------------------------------------

/// How the player chooses to preach during an encounter.
///
/// Recorded on the session for flavor; has no effect on encounter odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreachingStrategy {
    /// A gentle, soft-spoken approach.
    Softly,
    /// A fiery, intense approach.
    Intensely,
}

impl core::fmt::Display for PreachingStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Softly => "softly",
            Self::Intensely => "intensely",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// SupernaturalForm
// ---------------------------------------------------------------------------

/// The creature the player may become at game end after winning enough souls
/// to Satanism. Pure flavor; only changes the final message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupernaturalForm {
    /// A vampire.
    Vampire,
    /// A werewolf.
    Werewolf,
}

impl core::fmt::Display for SupernaturalForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Vampire => "vampire",
            Self::Werewolf => "werewolf",
        };
        write!(f, "{name}")
    }
}
