use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The sign in front of a term. Terms without an explicit sign are positive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Sign {
    #[default]
    Pos,
    Neg,
}

impl Sign {
    pub fn apply(self, x: Int) -> Int {
        match self {
            Self::Pos => x,
            Self::Neg => -x,
        }
    }

    pub fn is_negative(self) -> bool {
        self == Self::Neg
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}
