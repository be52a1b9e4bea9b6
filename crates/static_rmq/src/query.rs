use std::ops::Range;

use crate::Error;

/// A 1-indexed inclusive query `[lo, hi]` as it appears in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub lo: i64,
    pub hi: i64,
}

/// What to do with a query whose bounds fall outside the array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BoundsPolicy {
    /// Fail the whole batch.
    #[default]
    Reject,
    /// Clamp the bounds into `[1, n]`; still fail if nothing is left.
    Clamp,
}

impl Query {
    /// Converts to a 0-indexed half-open range over an array of `len` values.
    ///
    /// `position` is the 1-based index of the query, used in errors.
    pub fn resolve(
        &self,
        position: usize,
        len: usize,
        policy: BoundsPolicy,
    ) -> Result<Range<usize>, Error> {
        let n = i64::try_from(len).unwrap_or(i64::MAX);
        let (lo, hi) = match policy {
            BoundsPolicy::Reject => (self.lo, self.hi),
            BoundsPolicy::Clamp => (self.lo.max(1), self.hi.min(n)),
        };

        if lo < 1 || lo > hi || hi > n {
            return Err(Error::QueryOutOfRange {
                query: position,
                lo: self.lo,
                hi: self.hi,
                len,
            });
        }
        if (lo, hi) != (self.lo, self.hi) {
            log::warn!(
                "query {position} ({}, {}) clamped to ({lo}, {hi})",
                self.lo,
                self.hi
            );
        }

        Ok((lo - 1) as usize..hi as usize)
    }
}
