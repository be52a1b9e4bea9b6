use std::io::BufRead;
use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;

use crate::Error;
use crate::error::TokenError;
use crate::query::Query;

/// Upper bound on speculative preallocation driven by header counts.
const MAX_PREALLOC: usize = 1 << 20;

/// Whitespace-separated tokens pulled from a reader one line at a time.
///
/// Tokens are borrowed from the current line buffer; nothing is allocated
/// per token.
pub struct Tokens<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    cursor: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            cursor: 0,
        }
    }

    /// Bounds of the next token in the buffered line, advancing past it.
    fn advance(&mut self) -> Option<Range<usize>> {
        let rest = &self.line[self.cursor..];
        let start = self.cursor + rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let len = self.line[start..]
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(self.line.len() - start);
        self.cursor = start + len;
        Some(start..start + len)
    }

    pub fn next_token(&mut self) -> Result<Option<&[u8]>, Error> {
        loop {
            if let Some(range) = self.advance() {
                return Ok(Some(&self.line[range]));
            }
            self.line.clear();
            self.cursor = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Reads the next token as `T`, naming the field as `expected` on failure.
    pub fn read<T>(&mut self, expected: &'static str) -> Result<T, Error>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let token = self
            .next_token()?
            .ok_or(Error::UnexpectedEof { expected })?;
        let invalid = |source: TokenError| Error::InvalidToken {
            expected,
            token: String::from_utf8_lossy(token).into_owned(),
            source,
        };
        let text = std::str::from_utf8(token).map_err(|e| invalid(e.into()))?;
        text.parse().map_err(|e: ParseIntError| invalid(e.into()))
    }
}

/// An array together with the batch of queries asked against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub values: Vec<i64>,
    pub queries: Vec<Query>,
}

impl Problem {
    /// Parses `n q`, then `n` values, then `q` pairs `lo hi`.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut tokens = Tokens::new(reader);

        let n: usize = tokens.read("array length")?;
        let q: usize = tokens.read("query count")?;

        let mut values = Vec::with_capacity(n.min(MAX_PREALLOC));
        for _ in 0..n {
            values.push(tokens.read("array value")?);
        }

        let mut queries = Vec::with_capacity(q.min(MAX_PREALLOC));
        for _ in 0..q {
            let lo = tokens.read("query lower bound")?;
            let hi = tokens.read("query upper bound")?;
            queries.push(Query { lo, hi });
        }

        if let Some(token) = tokens.next_token()? {
            log::warn!(
                "ignoring trailing input starting at `{}`",
                String::from_utf8_lossy(token)
            );
        }

        Ok(Self { values, queries })
    }
}
