use std::num::NonZeroUsize;
use std::ops::Range;

use crate::StaticRmq;
use crate::util::better_index;
use crate::util::ceil_sqrt;
use crate::util::scan_argmin;

/// Sqrt decomposition over blocks of `block_size` consecutive values.
///
/// Construction is `O(n)`. A query scans the partial blocks at both ends
/// element by element and combines the precomputed minima of the blocks
/// fully covered in between, for `O(n / m + m)` per query, i.e. `O(sqrt n)`
/// with the default block size.
#[derive(Clone, Debug)]
pub struct SqrtDecompositionRmq {
    values: Vec<i64>,
    block_size: NonZeroUsize,
    /// Leftmost argmin of each block.
    block_argmins: Vec<usize>,
}

impl SqrtDecompositionRmq {
    /// Smallest `m >= 1` with `m * m >= n`.
    pub fn default_block_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(ceil_sqrt(n)).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn with_block_size(values: &[i64], block_size: NonZeroUsize) -> Self {
        let m = block_size.get();
        let block_argmins = values
            .chunks(m)
            .enumerate()
            .map(|(block, chunk)| block * m + scan_argmin(chunk, 0, chunk.len()))
            .collect();

        Self {
            values: values.to_vec(),
            block_size,
            block_argmins,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size.get()
    }

    pub fn num_blocks(&self) -> usize {
        self.block_argmins.len()
    }

    pub fn block_range(&self, block: usize) -> Option<Range<usize>> {
        (block < self.num_blocks()).then(|| self.block_bounds(block))
    }

    pub fn block_argmin(&self, block: usize) -> Option<usize> {
        self.block_argmins.get(block).copied()
    }

    pub fn block_min(&self, block: usize) -> Option<i64> {
        self.block_argmin(block).map(|i| self.values[i])
    }

    #[inline(always)]
    fn block_bounds(&self, block: usize) -> Range<usize> {
        let m = self.block_size.get();
        let n = self.values.len();
        let start = block.saturating_mul(m).min(n);
        let end = block.saturating_add(1).saturating_mul(m).min(n);
        start..end
    }
}

impl StaticRmq for SqrtDecompositionRmq {
    fn new(values: &[i64]) -> Self {
        Self::with_block_size(values, Self::default_block_size(values.len()))
    }

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn argmin(&self, range: Range<usize>) -> Option<usize> {
        let n = self.values.len();
        if range.start >= range.end || range.end > n {
            return None;
        }

        let values = &self.values;
        let m = self.block_size.get();
        let first = range.start / m;
        let last = (range.end - 1) / m;

        if first == last {
            return Some(scan_argmin(values, range.start, range.end));
        }

        // Blocks in `full` are entirely covered by the query.
        let head = self.block_bounds(first);
        let tail = self.block_bounds(last);
        let full_start = if range.start == head.start { first } else { first + 1 };
        let full_end = if range.end == tail.end { last + 1 } else { last };

        let mut best = None;
        if range.start != head.start {
            best = Some(scan_argmin(values, range.start, head.end));
        }
        for &candidate in &self.block_argmins[full_start..full_end] {
            best = Some(match best {
                Some(b) => better_index(values, b, candidate),
                None => candidate,
            });
        }
        if range.end != tail.end {
            let candidate = scan_argmin(values, tail.start, range.end);
            best = Some(match best {
                Some(b) => better_index(values, b, candidate),
                None => candidate,
            });
        }
        best
    }
}
