//! First-class invariants for Othello.
//!
//! Invariants are logical properties that must hold after every applied move.
//! They are checked in debug builds and testable on their own.

pub mod history_consistent;
pub mod occupancy;

pub use history_consistent::HistoryConsistentInvariant;
pub use occupancy::OccupancyInvariant;

use super::Game;
use tracing::{error, instrument};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All Othello game invariants.
pub type OthelloInvariants = (OccupancyInvariant, HistoryConsistentInvariant);

/// Panics in debug builds if any invariant is violated.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = OthelloInvariants::check_all(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Game invariants violated");
        debug_assert!(false, "Game invariants violated: {}", descriptions);
    }
}
