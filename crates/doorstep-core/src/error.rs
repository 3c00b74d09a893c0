//! Error types for the `doorstep-core` crate.
//!
//! All operations that can fail return typed errors rather than panicking.
//! Every error here is recoverable by the caller: selection errors are
//! re-prompted, and protocol errors indicate a presentation-layer bug.

use doorstep_types::Religion;

use crate::encounter::PendingChoice;
use crate::session::SessionPhase;

/// Errors that can occur during simulation operations.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An entity index supplied by the presentation layer is out of range.
    /// Rejected before any state is touched.
    #[error("invalid {what} selection: index {index} out of range (len {len})")]
    InvalidSelection {
        /// Which kind of entity was being selected.
        what: &'static str,
        /// The out-of-range index that was supplied.
        index: usize,
        /// The length of the list being indexed.
        len: usize,
    },

    /// An operation was invoked in the wrong session phase.
    #[error("operation requires phase {expected:?} but session is in {actual:?}")]
    PhaseViolation {
        /// The phase the operation requires.
        expected: SessionPhase,
        /// The phase the session is actually in.
        actual: SessionPhase,
    },

    /// A new encounter (or day end) was requested while a sub-event
    /// decision is still outstanding.
    #[error("a {pending:?} decision is still pending; answer it first")]
    ChoicePending {
        /// The outstanding choice token.
        pending: PendingChoice,
    },

    /// A sub-event decision was applied with no matching choice outstanding.
    #[error("no {applied:?} decision is outstanding")]
    NoPendingChoice {
        /// The choice the caller tried to answer.
        applied: PendingChoice,
    },

    /// The chosen starting religion is not on the startable roster.
    #[error("{religion} is not a startable religion")]
    NotStartable {
        /// The rejected religion.
        religion: Religion,
    },

    /// The supernatural endgame choice was applied without the satanic-score
    /// unlock.
    #[error("the supernatural choice is locked (satanic score below threshold)")]
    NotUnlocked,
}
