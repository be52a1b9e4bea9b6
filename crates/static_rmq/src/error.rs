use std::io;
use std::num::ParseIntError;
use std::str::Utf8Error;

/// Why a single token could not be read as a number.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error(transparent)]
    Parse(#[from] ParseIntError),

    #[error("not valid UTF-8")]
    Utf8(#[from] Utf8Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected} `{token}`: {source}")]
    InvalidToken {
        expected: &'static str,
        token: String,
        #[source]
        source: TokenError,
    },

    /// `query` is the 1-based position of the query in the input.
    #[error("query {query} ({lo}, {hi}) is out of range for an array of length {len}")]
    QueryOutOfRange {
        query: usize,
        lo: i64,
        hi: i64,
        len: usize,
    },
}
