use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid decimal integer `{token}`: {source}")]
    Parse {
        token: String,
        source: ParseIntError,
    },

    #[error("undefined label `{name}` referenced by token {index}")]
    UndefinedLabel { name: String, index: usize },

    #[error("malformed label definition `{token}` at token {index}: expected exactly one `:`")]
    MalformedDefinition { token: String, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
