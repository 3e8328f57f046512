use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of uniform die rolls.
///
/// Every [`rand::Rng`] is a `Roller`, so a seeded `StdRng` gives repeatable
/// results. Implement it directly to script the exact values rolled.
pub trait Roller {
    /// Rolls one die, returning a value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_n(&mut self, num: usize, sides: NonZeroUInt) -> Vec<UInt> {
        (0..num).map(|_| self.roll(sides)).collect()
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_n(&mut self, num: usize, sides: NonZeroUInt) -> Vec<UInt> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
            .collect()
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
