use crate::common::*;
use crate::roll::Resolve;
use std::fmt;

/// One signed unit of a notation, e.g. `-1d4` or `+3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Term {
    pub sign: Sign,
    pub kind: TermKind,
}

impl Term {
    pub fn new(sign: Sign, kind: impl Into<TermKind>) -> Self {
        Self {
            sign,
            kind: kind.into(),
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self.kind, TermKind::Flat(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.kind)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Resolve)]
pub enum TermKind {
    Dice(Dice),
    Flat(Flat),
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice(d) => fmt::Display::fmt(d, f),
            Self::Flat(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub num: NonZeroUInt,
    pub sides: NonZeroUInt,
}

impl Dice {
    pub const fn new(num: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self { num, sides }
    }

    /// A lone d20, the only kind of term that can produce a natural 20.
    pub fn is_single_d20(&self) -> bool {
        self.num.get() == 1 && self.sides.get() == 20
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Flat(pub Int);

impl fmt::Display for Flat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
