use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub(crate) type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

/// Character classes of dice notation. Whitespace is kept as a token because
/// it may sit between a sign and its term but not inside the term body.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[0-9]+")]
    Digits,
    #[token("d")]
    D,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[error]
    Error,
}

impl TokenKind {
    pub const SIGNS: &'static [Self] = &[Self::Plus, Self::Minus];
}
