//! Location-level bookkeeping: conversion counts, the momentum
//! multiplier, and church status.
//!
//! A location's conversion multiplier is `1 + converted / total`, so a
//! fully converted location doubles rates and an untouched one leaves
//! them alone. Once enough residents convert, the location flips into a
//! church for the religion being preached at flip time, permanently.

use rust_decimal::Decimal;
use tracing::info;

use doorstep_types::{Location, Religion};

/// Number of converted NPCs at a location.
#[must_use]
pub fn converted_count(location: &Location) -> u32 {
    let count = location.npcs.iter().filter(|npc| npc.converted).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Momentum multiplier for this location: `1 + converted / total`.
///
/// An empty location has no momentum and yields exactly 1.
#[must_use]
pub fn conversion_multiplier(location: &Location) -> Decimal {
    let total = u32::try_from(location.npcs.len()).unwrap_or(u32::MAX);
    if total == 0 {
        return Decimal::ONE;
    }
    let ratio = Decimal::from(converted_count(location))
        .checked_div(Decimal::from(total))
        .unwrap_or(Decimal::ZERO);
    Decimal::ONE.saturating_add(ratio)
}

/// Flip the location into a church if it has reached the threshold.
///
/// The church is attributed to the religion being preached when the
/// threshold is crossed, and the attribution is permanent: later
/// conversions to other faiths never rededicate it. Returns `true` only
/// on the call that performs the flip.
pub fn update_church_status(location: &mut Location, threshold: u32, religion: Religion) -> bool {
    if location.is_church {
        return false;
    }
    if converted_count(location) < threshold {
        return false;
    }
    location.is_church = true;
    location.church_religion = Some(religion);
    info!(category = %location.category, %religion, "location became a church");
    true
}
