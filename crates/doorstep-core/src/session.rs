//! Session state machine: one full week of door-to-door preaching.
//!
//! A session owns the generated world, the live rate table, scores,
//! hunger, and the day clock, and exposes every mutation as a phase-
//! checked operation. Phases:
//!
//! ```text
//! ChoosingReligion -> DayEnded -> Day -> DayEnded -> ... -> Finished
//! ```
//!
//! Sub-events that hand the player a decision park the session behind a
//! pending-choice token; encounters and day ends are refused until the
//! token is answered.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use doorstep_types::{
    DayOfWeek, EncounterTarget, PreachingStrategy, Religion, SupernaturalForm, Weather, World,
};

use crate::clock::{DayClock, hunger_cost, sample_weather};
use crate::config::SimConfig;
use crate::encounter::{
    BadResponseEvent, EncounterOutcome, EncounterReport, EncounterResponse, PendingChoice,
    draw_response, roll_bad_response_event,
};
use crate::error::SimError;
use crate::location::{conversion_multiplier, update_church_status};
use crate::npc::{ConversionOutcome, attempt_conversion};
use crate::rates::{RateTable, clamp_unit, roll_chance};
use crate::worldgen::generate_world;

// ---------------------------------------------------------------------------
// Phase and report types
// ---------------------------------------------------------------------------

/// Where in its lifecycle a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the player to pick a starting religion.
    ChoosingReligion,
    /// A day is in progress; encounters are legal.
    Day,
    /// Between days; waiting for `begin_day`.
    DayEnded,
    /// The week is over; only endgame operations remain.
    Finished,
}

/// What `begin_day` decided for the new day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStart {
    /// The day of the week that just began.
    pub day: DayOfWeek,
    /// The weather drawn for the day.
    pub weather: Weather,
}

/// Result of one hunger tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HungerAdvance {
    /// There is appetite left; the day continues.
    Continue,
    /// Hunger reached the daily limit; the caller should end the day.
    DayOver,
}

/// Read-only view of the session for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Total non-Satanic conversions across the week.
    pub score: u32,
    /// Non-Satanic conversions today.
    pub daily_score: u32,
    /// Satanic conversions across the week.
    pub satanic_score: u32,
    /// Current hunger level.
    pub hunger: u32,
    /// Today's weather, if a day is in progress.
    pub weather: Option<Weather>,
    /// The current day of the week.
    pub day: DayOfWeek,
    /// The religion currently being preached.
    pub religion: Religion,
    /// The session phase.
    pub phase: SessionPhase,
}

/// Final accounting for a finished week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Whether enough churches were founded for the church victory.
    pub church_victory: bool,
    /// Churches founded across the world.
    pub churches: u32,
    /// Total non-Satanic conversions.
    pub score: u32,
    /// Total Satanic conversions.
    pub satanic_score: u32,
    /// The supernatural form taken, if the unlock was earned and used.
    pub supernatural_form: Option<SupernaturalForm>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One week-long preaching campaign over a generated world.
#[derive(Debug, Clone)]
pub struct Session {
    config: SimConfig,
    world: World,
    rates: RateTable,
    phase: SessionPhase,
    religion: Religion,
    strategy: Option<PreachingStrategy>,
    score: u32,
    daily_score: u32,
    satanic_score: u32,
    hunger: u32,
    weather: Option<Weather>,
    clock: DayClock,
    pending: Option<PendingChoice>,
    supernatural_form: Option<SupernaturalForm>,
}

impl Session {
    /// Start a new session: generate the world, seed the rate table, and
    /// wait for the player to pick a religion.
    pub fn new(config: SimConfig, rng: &mut impl Rng) -> Self {
        let world = generate_world(&config.world, rng);
        Self::from_parts(config, world)
    }

    /// Build a session over a caller-supplied world.
    ///
    /// Used by tests and tools that need a hand-crafted world instead of
    /// a generated one.
    #[must_use]
    pub fn from_parts(config: SimConfig, world: World) -> Self {
        let rates = RateTable::new(&config.rates);
        Self {
            config,
            world,
            rates,
            phase: SessionPhase::ChoosingReligion,
            religion: Religion::None,
            strategy: None,
            score: 0,
            daily_score: 0,
            satanic_score: 0,
            hunger: 0,
            weather: None,
            clock: DayClock::new(),
            pending: None,
            supernatural_form: None,
        }
    }

    // -- accessors ----------------------------------------------------------

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The religion currently being preached.
    #[must_use]
    pub const fn current_religion(&self) -> Religion {
        self.religion
    }

    /// The world being preached over.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The live rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The outstanding sub-event decision, if any.
    #[must_use]
    pub const fn pending_choice(&self) -> Option<PendingChoice> {
        self.pending
    }

    /// Current hunger level.
    #[must_use]
    pub const fn hunger(&self) -> u32 {
        self.hunger
    }

    /// Churches founded so far across the whole world.
    #[must_use]
    pub fn church_count(&self) -> u32 {
        let count = self
            .world
            .neighborhoods
            .iter()
            .flat_map(|n| &n.locations)
            .filter(|l| l.is_church)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Whether the satanic score has earned the supernatural choice.
    #[must_use]
    pub const fn supernatural_unlocked(&self) -> bool {
        self.satanic_score >= self.config.endgame.supernatural_threshold
    }

    /// Read-only dashboard view.
    #[must_use]
    pub const fn snapshot(&self) -> Dashboard {
        Dashboard {
            score: self.score,
            daily_score: self.daily_score,
            satanic_score: self.satanic_score,
            hunger: self.hunger,
            weather: self.weather,
            day: self.clock.day(),
            religion: self.religion,
            phase: self.phase,
        }
    }

    // -- lifecycle ----------------------------------------------------------

    /// Pick the starting religion.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` outside `ChoosingReligion`; `NotStartable` for
    /// religions outside the startable roster (you cannot begin as a
    /// Satanist, only end up one).
    pub fn choose_religion(&mut self, religion: Religion) -> Result<(), SimError> {
        self.require_phase(SessionPhase::ChoosingReligion)?;
        if !Religion::STARTABLE.contains(&religion) {
            return Err(SimError::NotStartable { religion });
        }
        self.religion = religion;
        self.phase = SessionPhase::DayEnded;
        info!(%religion, "religion chosen");
        Ok(())
    }

    /// Record the preaching strategy.
    ///
    /// Flavor only; the strategy has no mechanical effect on rates.
    pub fn set_strategy(&mut self, strategy: PreachingStrategy) {
        self.strategy = Some(strategy);
        debug!(%strategy, "strategy set");
    }

    /// Start the next day: draw weather, reset hunger and daily score.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` unless the session is between days.
    pub fn begin_day(&mut self, rng: &mut impl Rng) -> Result<DayStart, SimError> {
        self.require_phase(SessionPhase::DayEnded)?;
        let weather = sample_weather(rng);
        self.weather = Some(weather);
        self.hunger = 0;
        self.daily_score = 0;
        self.phase = SessionPhase::Day;
        let day = self.clock.day();
        info!(%day, %weather, "day started");
        Ok(DayStart { day, weather })
    }

    /// Close the current day and advance the clock.
    ///
    /// After the final day of the week the session moves to `Finished`;
    /// otherwise it returns to `DayEnded`. Returns the new phase.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` outside `Day`; `ChoicePending` if a sub-event
    /// decision is still outstanding.
    pub fn end_day(&mut self) -> Result<SessionPhase, SimError> {
        self.require_phase(SessionPhase::Day)?;
        if let Some(pending) = self.pending {
            return Err(SimError::ChoicePending { pending });
        }
        self.clock.advance();
        self.weather = None;
        self.phase = if self.clock.week_complete() {
            SessionPhase::Finished
        } else {
            SessionPhase::DayEnded
        };
        info!(
            days_elapsed = self.clock.days_elapsed(),
            daily_score = self.daily_score,
            phase = ?self.phase,
            "day ended"
        );
        Ok(self.phase)
    }

    // -- encounters ---------------------------------------------------------

    /// Preach at one NPC's door.
    ///
    /// Resolves the target, applies the location's momentum multiplier to
    /// the whole rate table, and plays out the doorstep exchange. Any
    /// sub-event that needs a player decision is returned in the report
    /// and blocks further encounters until answered.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` outside `Day`; `ChoicePending` while a decision
    /// is outstanding; `InvalidSelection` for out-of-range indices (the
    /// world is untouched in that case).
    pub fn resolve_encounter(
        &mut self,
        target: EncounterTarget,
        rng: &mut impl Rng,
    ) -> Result<EncounterReport, SimError> {
        self.require_phase(SessionPhase::Day)?;
        if let Some(pending) = self.pending {
            return Err(SimError::ChoicePending { pending });
        }
        let religion = self.religion;

        let n_idx = target.neighborhood.into_inner();
        let n_len = self.world.neighborhoods.len();
        let neighborhood =
            self.world
                .neighborhoods
                .get_mut(n_idx)
                .ok_or(SimError::InvalidSelection {
                    what: "neighborhood",
                    index: n_idx,
                    len: n_len,
                })?;

        let l_idx = target.location.into_inner();
        let l_len = neighborhood.locations.len();
        let location = neighborhood
            .locations
            .get_mut(l_idx)
            .ok_or(SimError::InvalidSelection {
                what: "location",
                index: l_idx,
                len: l_len,
            })?;

        let p_idx = target.npc.into_inner();
        let p_len = location.npcs.len();
        if p_idx >= p_len {
            return Err(SimError::InvalidSelection {
                what: "npc",
                index: p_idx,
                len: p_len,
            });
        }

        // Doors that never open: no momentum, no rate movement, nothing.
        let resistant = location.npcs.get(p_idx).is_some_and(|npc| npc.resistant);
        if resistant {
            debug!("encounter resisted");
            return Ok(EncounterReport {
                outcome: EncounterOutcome::Resisted,
                pending: None,
            });
        }

        // Momentum first: the location's converted fraction compounds
        // into every religion's rate before this exchange is rolled.
        let multiplier = conversion_multiplier(location);
        self.rates.scale_all(multiplier);

        let failed_attempts = location.npcs.get(p_idx).map_or(0, |npc| npc.failed_attempts);
        let effective = self.rates.effective_rate(
            religion,
            failed_attempts,
            self.config.encounter.failed_attempt_penalty,
        );
        let nice_chance = clamp_unit(effective);

        match draw_response(rng, nice_chance) {
            EncounterResponse::Bad => {
                if let Some(npc) = location.npcs.get_mut(p_idx) {
                    npc.failed_attempts = npc.failed_attempts.saturating_add(1);
                }
                let pending = self.handle_bad_response(rng, religion);
                Ok(EncounterReport {
                    outcome: EncounterOutcome::Bad,
                    pending,
                })
            }
            EncounterResponse::Nice => {
                let outcome = location.npcs.get_mut(p_idx).map_or(
                    ConversionOutcome::Declined,
                    |npc| attempt_conversion(npc, religion, nice_chance, rng),
                );
                match outcome {
                    ConversionOutcome::Converted => {
                        if religion == Religion::Satanic {
                            self.satanic_score = self.satanic_score.saturating_add(1);
                        } else {
                            self.score = self.score.saturating_add(1);
                            self.daily_score = self.daily_score.saturating_add(1);
                        }
                        update_church_status(
                            location,
                            self.config.encounter.church_threshold,
                            religion,
                        );
                        let pending =
                            if roll_chance(rng, self.config.encounter.donation_chance) {
                                self.pending = Some(PendingChoice::FoodDonation);
                                self.pending
                            } else {
                                None
                            };
                        Ok(EncounterReport {
                            outcome: EncounterOutcome::Converted,
                            pending,
                        })
                    }
                    ConversionOutcome::AlreadyFollower => Ok(EncounterReport {
                        outcome: EncounterOutcome::AlreadyFollower,
                        pending: None,
                    }),
                    ConversionOutcome::Declined => Ok(EncounterReport {
                        outcome: EncounterOutcome::Declined,
                        pending: None,
                    }),
                }
            }
        }
    }

    /// Roll the bad-response sub-event and stage any resulting choice.
    fn handle_bad_response(
        &mut self,
        rng: &mut impl Rng,
        religion: Religion,
    ) -> Option<PendingChoice> {
        let event = roll_bad_response_event(
            rng,
            &self.config.encounter,
            religion == Religion::Satanic,
        )?;
        match event {
            BadResponseEvent::FoodDonation => {
                self.pending = Some(PendingChoice::FoodDonation);
            }
            BadResponseEvent::SatanicBibleOffer => {
                self.pending = Some(PendingChoice::SatanicBible);
            }
            BadResponseEvent::SatanicPreacherJoins => {
                self.rates.double(Religion::Satanic);
                return None;
            }
        }
        self.pending
    }

    // -- pending decisions --------------------------------------------------

    /// Answer an outstanding food-donation offer.
    ///
    /// Accepting eats the food and reduces hunger; declining just walks
    /// away. Either answer clears the pending token.
    ///
    /// # Errors
    ///
    /// `NoPendingChoice` unless a food donation is the outstanding
    /// decision.
    pub fn apply_food_decision(&mut self, accept: bool) -> Result<(), SimError> {
        self.take_pending(PendingChoice::FoodDonation)?;
        if accept {
            self.hunger = self.hunger.saturating_sub(self.config.hunger.donation_relief);
            debug!(hunger = self.hunger, "food donation accepted");
        }
        Ok(())
    }

    /// Answer an outstanding Satanic bible offer.
    ///
    /// Accepting switches the preached religion to Satanic for the rest
    /// of the session; there is no way back. Either answer clears the
    /// pending token.
    ///
    /// # Errors
    ///
    /// `NoPendingChoice` unless a bible offer is the outstanding
    /// decision.
    pub fn apply_satanic_bible_decision(&mut self, accept: bool) -> Result<(), SimError> {
        self.take_pending(PendingChoice::SatanicBible)?;
        if accept {
            self.religion = Religion::Satanic;
            info!("satanic bible accepted; now preaching Satanic");
        }
        Ok(())
    }

    fn take_pending(&mut self, applied: PendingChoice) -> Result<(), SimError> {
        if self.pending == Some(applied) {
            self.pending = None;
            Ok(())
        } else {
            Err(SimError::NoPendingChoice { applied })
        }
    }

    // -- hunger -------------------------------------------------------------

    /// Add the per-encounter hunger cost for the given weather.
    ///
    /// Hunger is clamped to the daily limit; once it gets there the day
    /// is over and the caller should call `end_day`.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` outside `Day`.
    pub fn advance_hunger(&mut self, weather: Weather) -> Result<HungerAdvance, SimError> {
        self.require_phase(SessionPhase::Day)?;
        let cost = hunger_cost(weather, &self.config.hunger);
        let limit = self.config.hunger.day_limit;
        self.hunger = self.hunger.saturating_add(cost).min(limit);
        if self.hunger >= limit {
            debug!(hunger = self.hunger, "too hungry to continue");
            Ok(HungerAdvance::DayOver)
        } else {
            Ok(HungerAdvance::Continue)
        }
    }

    // -- endgame ------------------------------------------------------------

    /// Take a supernatural form after a sufficiently Satanic week.
    ///
    /// Flavor only: the form is recorded into the final result.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` before the week is finished; `NotUnlocked` if
    /// the satanic score never reached the threshold.
    pub fn apply_supernatural_choice(&mut self, form: SupernaturalForm) -> Result<(), SimError> {
        self.require_phase(SessionPhase::Finished)?;
        if !self.supernatural_unlocked() {
            return Err(SimError::NotUnlocked);
        }
        self.supernatural_form = Some(form);
        info!(%form, "supernatural form taken");
        Ok(())
    }

    /// Final accounting for the week.
    ///
    /// # Errors
    ///
    /// `PhaseViolation` before the week is finished.
    pub fn finish(&self) -> Result<GameResult, SimError> {
        self.require_phase(SessionPhase::Finished)?;
        let churches = self.church_count();
        let result = GameResult {
            church_victory: churches >= self.config.endgame.church_win_threshold,
            churches,
            score: self.score,
            satanic_score: self.satanic_score,
            supernatural_form: self.supernatural_form,
        };
        info!(
            church_victory = result.church_victory,
            churches = result.churches,
            score = result.score,
            satanic_score = result.satanic_score,
            "week finished"
        );
        Ok(result)
    }

    const fn require_phase(&self, expected: SessionPhase) -> Result<(), SimError> {
        if matches!(
            (self.phase, expected),
            (SessionPhase::ChoosingReligion, SessionPhase::ChoosingReligion)
                | (SessionPhase::Day, SessionPhase::Day)
                | (SessionPhase::DayEnded, SessionPhase::DayEnded)
                | (SessionPhase::Finished, SessionPhase::Finished)
        ) {
            Ok(())
        } else {
            Err(SimError::PhaseViolation {
                expected,
                actual: self.phase,
            })
        }
    }
}
