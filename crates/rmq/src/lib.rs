mod naive;
mod sqrt_decomposition;
mod util;

use std::ops::Range;

pub use naive::NaiveRmq;
pub use sqrt_decomposition::SqrtDecompositionRmq;
pub use util::ceil_sqrt;

/// Static RMQ (Range Minimum Query) interface.
///
/// - Query ranges are half-open: `[l, r)`.
/// - The answer is `Some(argmin_index)` when the range is valid and non-empty.
/// - Ties are broken by the smallest index.
pub trait StaticRmq: Sized {
    fn new(values: &[i64]) -> Self;
    fn values(&self) -> &[i64];
    fn argmin(&self, range: Range<usize>) -> Option<usize>;

    fn min(&self, range: Range<usize>) -> Option<i64> {
        self.argmin(range).map(|i| self.values()[i])
    }

    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}
