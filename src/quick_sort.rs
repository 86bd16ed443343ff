//! In-place quicksort on top of the Lomuto partition scheme.

use crate::{partition::partition, stack::ensure_sufficient_stack};
use core::cmp::Ordering;
use ndarray::ArrayViewMut1;

/// Sorts `v` in place using quicksort, which is *O*(*n* \* log(*n*)) average-case and
/// *O*(*n*^2) worst-case.
pub fn quick_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut compare: F)
where
	F: FnMut(&T, &T) -> Ordering,
{
	let len = v.len();
	if len <= 1 {
		return;
	}

	recurse(&mut v, 0, len - 1, &mut compare);
}

/// Sorts `v[lo..=hi]` recursively.
fn recurse<T, F>(v: &mut ArrayViewMut1<'_, T>, mut lo: usize, mut hi: usize, compare: &mut F)
where
	F: FnMut(&T, &T) -> Ordering,
{
	while lo < hi {
		let p = partition(v.view_mut(), lo, hi, compare);

		// Recurse into the shorter side only in order to minimize the total number of recursive
		// calls and consume less stack space. Then just continue with the longer side.
		//
		// The pivot is in place, hence `lo <= p <= hi`. In the first branch `p - 1` is only taken
		// for `p > lo`. In the second one `p > lo` follows from `p - lo >= hi - p` and `lo < hi`.
		if p - lo < hi - p {
			if p > lo {
				ensure_sufficient_stack(|| recurse(v, lo, p - 1, compare));
			}
			lo = p + 1;
		} else {
			if p < hi {
				ensure_sufficient_stack(|| recurse(v, p + 1, hi, compare));
			}
			hi = p - 1;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use crate::compare::{descending, last_digit};
	use ndarray::{arr1, arr2, Array1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), u32::cmp);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn reverse_sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| b.cmp(a));
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), descending);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_by_last_digit(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by_key(|x| x.rem_euclid(10));
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), last_digit);
		let digits = array.iter().map(|x| x.rem_euclid(10)).collect::<Vec<_>>();
		let expected = sorted.iter().map(|x| x.rem_euclid(10)).collect::<Vec<_>>();
		assert_eq!(digits, expected);
	}

	#[test]
	fn few_unique() {
		let mut array = Array1::from_iter((0..1_000u32).map(|x| x.wrapping_mul(2_654_435_761) % 3));
		quick_sort(array.view_mut(), u32::cmp);
		for i in 1..array.len() {
			assert!(array[i - 1] <= array[i]);
		}
	}

	#[test]
	fn non_contiguous() {
		let mut v = arr2(&[[5, -1], [3, -1], [8, -1], [1, -1]]);
		quick_sort(v.column_mut(0), i32::cmp);
		assert_eq!(v, arr2(&[[1, -1], [3, -1], [5, -1], [8, -1]]));
		let mut w = arr1(&[4, 9, 2, 7]);
		quick_sort(w.slice_mut(ndarray::s![1..]), i32::cmp);
		assert_eq!(w, arr1(&[4, 2, 7, 9]));
	}
}
