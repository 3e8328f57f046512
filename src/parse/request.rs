use super::error::{ParseError, ParseErrorKind};
use std::num::NonZeroUsize;

/// A notation with an optional `<count>#` prefix, e.g. `3#1d20+2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Request<'a> {
    pub count: Option<NonZeroUsize>,
    pub notation: &'a str,
}

impl<'a> Request<'a> {
    pub fn parse(s: &'a str) -> Result<Self, ParseError> {
        let (count, notation) = match s.split_once('#') {
            None => return Ok(Self { count: None, notation: s }),
            Some(parts) => parts,
        };
        let count_span = 0..count.len();
        if let Some(extra) = notation.find('#') {
            let at = count.len() + 1 + extra;
            return Err(ParseError::new(ParseErrorKind::ExtraRepeatMarker, at..at + 1, s));
        }
        match count.trim().parse::<NonZeroUsize>() {
            Ok(count) => Ok(Self {
                count: Some(count),
                notation,
            }),
            Err(_) => Err(ParseError::new(
                ParseErrorKind::InvalidRepeatCount,
                count_span,
                s,
            )),
        }
    }

    /// How many times the notation should be evaluated.
    pub fn times(&self) -> usize {
        self.count.map_or(1, NonZeroUsize::get)
    }
}
