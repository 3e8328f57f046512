use std::fmt;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, span: Range<usize>, source: &str) -> Self {
        let slice = source.get(span.clone()).unwrap_or_default().to_string();
        Self { kind, span, slice }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    ZeroQuantity,
    ZeroSides,
    NumberTooLarge,
    InvalidRepeatCount,
    ExtraRepeatMarker,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuantity => f.write_str("dice quantity must be greater than 0"),
            Self::ZeroSides => f.write_str("dice faces must be greater than 0"),
            Self::NumberTooLarge => f.write_str("number is too large"),
            Self::InvalidRepeatCount => {
                f.write_str("repeat count must be a positive integer")
            }
            Self::ExtraRepeatMarker => f.write_str("only one '#' is allowed"),
        }
    }
}
