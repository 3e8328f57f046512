use super::{result::*, roller::Roller};
use crate::common::*;
use crate::error::{Error, Result};
use crate::parse::{
    self,
    ast::{Dice, Flat, Term, TermKind},
    ParseError, ParseErrorKind, Request,
};
use std::num::NonZeroUsize;
use tracing::debug;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Dice a single request may roll unless the context says otherwise.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Turns one term into its contributions.
// Paths are spelled out because enum_dispatch copies this signature into `parse::ast`.
#[enum_dispatch::enum_dispatch]
pub trait Resolve {
    fn resolve<R: crate::roll::Roller>(
        &self,
        sign: crate::common::Sign,
        ctx: &mut crate::roll::RollContext<R>,
    ) -> crate::Result<Vec<crate::roll::RollContribution>>;
}

impl Resolve for Dice {
    fn resolve<R: Roller>(
        &self,
        sign: Sign,
        ctx: &mut RollContext<R>,
    ) -> Result<Vec<RollContribution>> {
        let sides = self.sides.get();
        let rolls = ctx.roll(self.num.get() as usize, self.sides)?;
        let mut contributions = Vec::with_capacity(rolls.len());
        for x in rolls {
            let value = Int::try_from(x).map_err(|_| Error::Overflow)?;
            let highlighted = x == 1 || x == sides;
            contributions.push(RollContribution::die(sign.apply(value), highlighted));
        }
        Ok(contributions)
    }
}

impl Resolve for Flat {
    fn resolve<R: Roller>(
        &self,
        sign: Sign,
        _: &mut RollContext<R>,
    ) -> Result<Vec<RollContribution>> {
        Ok(vec![RollContribution::flat(sign.apply(self.0))])
    }
}

/// Evaluates notations against a [`Roller`], optionally capping how many
/// dice a single request may roll.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.max_rolls
    }

    pub fn reset(&mut self) {
        self.rolls = 0;
    }

    fn count_rolls(&mut self, n: usize) -> Result<()> {
        self.rolls = self.rolls.saturating_add(n);
        match self.max_rolls {
            Some(limit) if self.rolls > limit => Err(Error::TooManyRolls { limit }),
            _ => Ok(()),
        }
    }

    pub fn roll(&mut self, num: usize, sides: NonZeroUInt) -> Result<Vec<UInt>> {
        self.count_rolls(num)?;
        Ok(self.roller.roll_n(num, sides))
    }

    fn resolve_all<'t>(
        &mut self,
        terms: &'t [Term],
    ) -> Result<Vec<(&'t Term, Vec<RollContribution>)>> {
        let mut resolved = Vec::with_capacity(terms.len());
        for term in terms {
            resolved.push((term, term.kind.resolve(term.sign, self)?));
        }
        Ok(resolved)
    }

    /// Rolls already parsed terms. Counts towards the current roll budget.
    pub fn eval_terms(&mut self, terms: &[Term]) -> Result<RollResult> {
        let mut total: Int = 0;
        let mut contributions = Vec::new();
        for (_, resolved) in self.resolve_all(terms)? {
            total = checked_sum(total, &resolved)?;
            contributions.extend(resolved);
        }
        Ok(RollResult {
            total,
            contributions,
        })
    }

    pub fn eval(&mut self, notation: &str) -> Result<RollResult> {
        self.reset();
        let terms = parse::parse(notation)?;
        let result = self.eval_terms(&terms)?;
        debug!(notation, terms = terms.len(), total = result.total, "rolled");
        Ok(result)
    }

    /// Evaluates `notation` `count` times, parsing it afresh each time.
    /// The roll budget covers all evaluations together.
    pub fn eval_multi(
        &mut self,
        count: NonZeroUsize,
        notation: &str,
    ) -> Result<NonEmpty<RollResult>> {
        self.reset();
        let mut results = NonEmpty::new(self.eval_terms(&parse::parse(notation)?)?);
        for _ in 1..count.get() {
            results.push(self.eval_terms(&parse::parse(notation)?)?);
        }
        debug!(notation, count = count.get(), "rolled repeatedly");
        Ok(results)
    }

    pub fn eval_request(&mut self, request: &Request<'_>) -> Result<NonEmpty<RollResult>> {
        match request.count {
            Some(count) => self.eval_multi(count, request.notation),
            None => self.eval(request.notation).map(NonEmpty::new),
        }
    }

    pub fn eval_initiative(&mut self, notation: &str) -> Result<InitiativeOutcome> {
        self.reset();
        let terms = parse::parse(notation)?;
        let mut outcome = InitiativeOutcome::default();
        for (term, resolved) in self.resolve_all(&terms)? {
            outcome.total = checked_sum(outcome.total, &resolved)?;
            match &term.kind {
                TermKind::Flat(_) => {
                    outcome.modifier_sum = checked_sum(outcome.modifier_sum, &resolved)?;
                }
                // A later lone d20 replaces an earlier one.
                TermKind::Dice(d) if d.is_single_d20() => {
                    if let Some(c) = resolved.last() {
                        outcome.isolated_d20 = c.value.abs();
                    }
                }
                TermKind::Dice(_) => {}
            }
        }
        debug!(
            notation,
            total = outcome.total,
            d20 = outcome.isolated_d20,
            modifier = outcome.modifier_sum,
            "rolled initiative"
        );
        Ok(outcome)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}

fn checked_sum(start: Int, contributions: &[RollContribution]) -> Result<Int> {
    contributions
        .iter()
        .try_fold(start, |acc, c| acc.checked_add(c.value))
        .ok_or(Error::Overflow)
}

pub(crate) fn repeat_count(count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(count).ok_or_else(|| {
        Error::from(ParseError::new(
            ParseErrorKind::InvalidRepeatCount,
            0..0,
            "",
        ))
    })
}
