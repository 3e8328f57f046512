use crate::parse::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed expression: {0}")]
    MalformedExpression(#[from] ParseError),
    #[error("no entry named {name:?} in the roster")]
    NotFound { name: String },
    #[error("too many dice rolled (limit is {limit})")]
    TooManyRolls { limit: usize },
    #[error("total is out of range")]
    Overflow,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
}

impl Error {
    pub fn not_found(name: impl ToString) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedExpression(_))
    }
}
