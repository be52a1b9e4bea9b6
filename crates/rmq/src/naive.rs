use std::ops::Range;

use crate::StaticRmq;
use crate::util::scan_argmin;

/// Linear scan per query. No preprocessing beyond copying the values.
#[derive(Clone, Debug)]
pub struct NaiveRmq {
    values: Vec<i64>,
}

impl StaticRmq for NaiveRmq {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn argmin(&self, range: Range<usize>) -> Option<usize> {
        if range.start >= range.end || range.end > self.values.len() {
            return None;
        }
        Some(scan_argmin(&self.values, range.start, range.end))
    }
}
