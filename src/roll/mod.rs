mod ctx;
mod result;
mod roller;
mod stringify;

pub use ctx::{DefaultRoller, Resolve, RollContext, DEFAULT_MAX_ROLLS};
pub(crate) use ctx::repeat_count;
pub use result::{InitiativeOutcome, RollContribution, RollResult};
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};

#[cfg(test)]
pub(crate) use roller::StepRoller;
