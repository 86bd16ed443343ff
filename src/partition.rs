//! Lomuto partition scheme.

use core::cmp::Ordering::{self, Less};
use ndarray::ArrayViewMut1;

/// Partitions `v[lo..=hi]` around the pivot `v[hi]` using the Lomuto scheme.
///
/// Every element ordered strictly before the pivot by `compare` is moved to the front of the
/// range, followed by the pivot itself. Returns the final index of the pivot, which is its index
/// in the sorted range.
///
/// # Panics
///
/// Panics when `lo > hi` or `hi >= v.len()`.
pub fn partition<T, F>(
	mut v: ArrayViewMut1<'_, T>,
	lo: usize,
	hi: usize,
	compare: &mut F,
) -> usize
where
	F: FnMut(&T, &T) -> Ordering,
{
	let len = v.len();
	assert!(
		lo <= hi && hi < len,
		"partition range {lo}..={hi} out of bounds for length {len}"
	);

	// INVARIANTS:
	// - v[lo..i] is ordered before the pivot
	// - v[i..j] is not ordered before the pivot
	// - i <= j < hi, hence the pivot at `hi` stays in place until the final swap
	let mut i = lo;
	for j in lo..hi {
		if compare(&v[j], &v[hi]) == Less {
			v.swap(i, j);
			i += 1;
		}
	}
	v.swap(i, hi);
	i
}
