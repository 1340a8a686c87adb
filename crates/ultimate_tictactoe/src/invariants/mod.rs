//! First-class invariants of the engine.
//!
//! Invariants are logical properties that must hold after every claim.
//! A violation means the engine itself is broken, so the game checks the
//! whole set after each cascade and aborts on failure.

use crate::{Game, InvariantViolation};
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod active_board;
pub mod balanced_turns;
pub mod consistent_winners;

pub use active_board::ActiveBoardInvariant;
pub use balanced_turns::BalancedTurnsInvariant;
pub use consistent_winners::ConsistentWinnersInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    ActiveBoardInvariant,
    BalancedTurnsInvariant,
    ConsistentWinnersInvariant,
);

/// Panics if any engine invariant is broken.
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = EngineInvariants::check_all(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Engine invariant violated");
        panic!("Invariant violation: {}", descriptions);
    }
}
