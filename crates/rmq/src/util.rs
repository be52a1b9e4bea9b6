#[inline(always)]
pub(crate) fn better_index(values: &[i64], a: usize, b: usize) -> usize {
    let va = values[a];
    let vb = values[b];
    if va < vb || (va == vb && a < b) { a } else { b }
}

/// Leftmost minimum over `values[range]`, assuming the range is non-empty.
#[inline(always)]
pub(crate) fn scan_argmin(values: &[i64], start: usize, end: usize) -> usize {
    debug_assert!(start < end);
    let mut best = start;
    for i in (start + 1)..end {
        if values[i] < values[best] {
            best = i;
        }
    }
    best
}

/// Smallest `m` with `m * m >= n`.
#[inline]
pub fn ceil_sqrt(n: usize) -> usize {
    let r = n.isqrt();
    if r * r < n { r + 1 } else { r }
}
