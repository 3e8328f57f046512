//! Dice notation (`2d6+1d4+3`) and initiative tracking for tabletop games.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use rust_dice_initiative::{evaluate_initiative, Roster};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut roster = Roster::new();
//! let outcome = evaluate_initiative("1d20+4", &mut rng).unwrap();
//! assert_eq!(outcome.total, outcome.isolated_d20 + 4);
//! roster.add("Alice", outcome);
//! assert_eq!(roster.list()[0].name, "Alice");
//! ```

// `roll` declares the trait that `parse::ast` dispatches on, so it comes first.
pub mod roll;

pub mod common;
pub mod config;
mod error;
pub mod parse;
pub mod roster;
pub mod session;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use roll::{InitiativeOutcome, RollContext, RollContribution, RollResult, Roller};
pub use roster::{InitiativeEntry, Roster};
pub use session::{Command, Session};

fn bounded<R: Roller>(roller: R) -> RollContext<R> {
    RollContext::new_bounded(roll::DEFAULT_MAX_ROLLS, roller)
}

/// Rolls a notation once. At most [`roll::DEFAULT_MAX_ROLLS`] dice are
/// rolled; more fail with [`Error::TooManyRolls`].
pub fn evaluate<R: Roller>(notation: &str, roller: R) -> Result<RollResult> {
    bounded(roller).eval(notation)
}

/// Rolls a notation `count` times. `count` must be at least 1.
pub fn evaluate_multi<R: Roller>(
    count: usize,
    notation: &str,
    roller: R,
) -> Result<common::NonEmpty<RollResult>> {
    let count = roll::repeat_count(count)?;
    bounded(roller).eval_multi(count, notation)
}

/// Rolls a notation for initiative, picking out the lone d20 and the
/// flat modifiers.
pub fn evaluate_initiative<R: Roller>(notation: &str, roller: R) -> Result<InitiativeOutcome> {
    bounded(roller).eval_initiative(notation)
}
