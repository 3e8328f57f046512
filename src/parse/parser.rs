use super::ast::*;
use super::error::{ParseError, ParseErrorKind};
use super::lexer::*;
use crate::common::*;
use logos_iter::LogosIter;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

/// Scans a notation for terms shaped `[sign] [whitespace] [digits] [d] digits`.
///
/// Anything that does not fit that shape is skipped, so `2d6, +3` and
/// `2d6+3` produce the same terms.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
        }
    }

    pub fn parse(mut self) -> PResult<Vec<Term>> {
        let mut terms = Vec::new();
        while self.lexer.peek().is_some() {
            if let Some(term) = self.parse_term()? {
                terms.push(term);
            }
        }
        Ok(terms)
    }

    fn advance(&mut self) -> Option<(TokenKind, Range<usize>)> {
        let kind = self.lexer.next()?;
        Some((kind, self.lexer.span()))
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn error<T>(&self, kind: ParseErrorKind, span: Range<usize>) -> PResult<T> {
        Err(ParseError::new(kind, span, self.source))
    }

    /// Consumes at least one token. Returns `None` when the consumed tokens
    /// do not form a term.
    fn parse_term(&mut self) -> PResult<Option<Term>> {
        let (sign, start) = if self.matches_any(TokenKind::SIGNS) {
            match self.advance() {
                Some((TokenKind::Minus, span)) => (Sign::Neg, Some(span.start)),
                Some((_, span)) => (Sign::Pos, Some(span.start)),
                None => return Ok(None),
            }
        } else {
            (Sign::Pos, None)
        };

        if self.matches(TokenKind::Whitespace) {
            self.advance();
            if start.is_none() {
                return Ok(None);
            }
        }

        match self.lexer.peek().copied() {
            Some(TokenKind::Digits) => {
                let (num, span) = self.parse_digits()?;
                let start = start.unwrap_or(span.start);
                if !self.matches(TokenKind::D) {
                    return Ok(Some(Term::new(sign, Flat(num))));
                }
                self.advance();
                if !self.matches(TokenKind::Digits) {
                    // `2d` followed by anything else is just the number 2.
                    return Ok(Some(Term::new(sign, Flat(num))));
                }
                let (sides, end) = self.parse_digits()?;
                self.finish_dice(sign, num, sides, start..end.end).map(Some)
            }
            Some(TokenKind::D) => {
                let d_start = self.advance().map_or(0, |(_, span)| span.start);
                if !self.matches(TokenKind::Digits) {
                    return Ok(None);
                }
                let start = start.unwrap_or(d_start);
                let (sides, end) = self.parse_digits()?;
                self.finish_dice(sign, 1, sides, start..end.end).map(Some)
            }
            Some(_) if start.is_some() => Ok(None),
            Some(_) => {
                self.advance();
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn parse_digits(&mut self) -> PResult<(Int, Range<usize>)> {
        let span = match self.advance() {
            Some((TokenKind::Digits, span)) => span,
            _ => unreachable!("caller peeked a digit run"),
        };
        match self.lexer.slice().parse::<Int>() {
            Ok(x) => Ok((x, span)),
            Err(_) => self.error(ParseErrorKind::NumberTooLarge, span),
        }
    }

    fn finish_dice(
        &self,
        sign: Sign,
        num: Int,
        sides: Int,
        span: Range<usize>,
    ) -> PResult<Term> {
        let num = match NonZeroUInt::new(num as UInt) {
            Some(num) => num,
            None => return self.error(ParseErrorKind::ZeroQuantity, span),
        };
        let sides = match NonZeroUInt::new(sides as UInt) {
            Some(sides) => sides,
            None => return self.error(ParseErrorKind::ZeroSides, span),
        };
        Ok(Term::new(sign, Dice::new(num, sides)))
    }
}
