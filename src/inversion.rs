//! Merge-sort inversion counting.
//!
//! An inversion is a pair of positions `(i, j)` with `i < j` where
//! `values[i] > values[j]`:
//!
//! ```text
//! inversions([2, 0, 3]) = 1    // the single out-of-order pair (2, 0)
//! inversions([3, 2, 1]) = 3    // every pair is out of order
//! ```
//!
//! The count is accumulated by an explicit recursive merge sort: each half is
//! counted independently, then every element consumed from the right half
//! during the merge contributes one inversion per still-unconsumed left
//! element. Equal values take the left element first and are therefore never
//! counted as inversions. One scratch buffer sized to the input is allocated
//! per call and shared across all recursion levels, for O(n log n) time and
//! O(n) auxiliary space.
//!
//! Comparisons are plain IEEE `<=`, so for NaN-free input the slice ends up
//! sorted ascending as a side effect. NaN values compare false on both sides,
//! which yields a deterministic but position-dependent count; see the crate
//! docs for how the tau entry points treat NaN.

/// Count inversions in `values`, sorting the slice as a side effect.
///
/// Returns the number of pairs `(i, j)` with `i < j` and
/// `values[i] > values[j]`. For NaN-free input the slice is in ascending
/// order afterwards; equal values keep their relative order and contribute
/// no inversions.
///
/// Allocates one scratch buffer of the same length; the recursion itself
/// allocates nothing.
#[must_use]
pub fn count_inversions(values: &mut [f64]) -> u64 {
    if values.len() <= 1 {
        return 0;
    }
    let mut scratch = vec![0.0_f64; values.len()];
    count_inversions_with_scratch(values, &mut scratch)
}

fn count_inversions_with_scratch(values: &mut [f64], scratch: &mut [f64]) -> u64 {
    let n = values.len();
    if n <= 1 {
        return 0;
    }
    let mid = n / 2;
    let (left, right) = values.split_at_mut(mid);
    let (scratch_left, scratch_right) = scratch.split_at_mut(mid);

    let mut count = count_inversions_with_scratch(left, scratch_left);
    count = count.saturating_add(count_inversions_with_scratch(right, scratch_right));

    let (mut i, mut j, mut out) = (0_usize, 0_usize, 0_usize);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            scratch[out] = left[i];
            i += 1;
        } else {
            // Taking from the right skips every still-unconsumed left
            // element; each skip is one inversion.
            scratch[out] = right[j];
            let remaining_left = left.len().saturating_sub(i);
            let remaining_left_u64 = u64::try_from(remaining_left).unwrap_or(u64::MAX);
            count = count.saturating_add(remaining_left_u64);
            j += 1;
        }
        out += 1;
    }

    if i < left.len() {
        let left_remaining = left.len() - i;
        scratch[out..out + left_remaining].copy_from_slice(&left[i..]);
        out += left_remaining;
    }
    if j < right.len() {
        scratch[out..n].copy_from_slice(&right[j..]);
    }

    values.copy_from_slice(&scratch[..n]);
    count
}
