pub mod ast;
mod error;
mod lexer;
mod parser;
mod request;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
pub use request::Request;

/// Splits a notation into its signed terms.
pub fn parse(s: &str) -> Result<Vec<ast::Term>, ParseError> {
    Parser::new(s).parse()
}
