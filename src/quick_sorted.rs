//! Quicksort into a new array using three-way bucketing around the first element.

#![cfg(feature = "alloc")]

use crate::stack::ensure_sufficient_stack;
use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal, Greater, Less};
use ndarray::{Array1, ArrayView1};

/// Sorts `v` into a new array using quicksort with auxiliary buckets, which is
/// *O*(*n* \* log(*n*)) expected and *O*(*n*^2) worst-case (e.g., for already sorted input).
pub fn quick_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> Array1<T>
where
	T: Clone,
	F: FnMut(&T, &T) -> Ordering,
{
	Array1::from_vec(recurse(v.to_vec(), &mut compare))
}

/// Sorts `v` recursively.
///
/// The first element is the pivot. Every element goes into the bucket of elements ordered before,
/// equal to, or after the pivot. As the buckets are chosen by `compare` itself, concatenating them
/// in this order is correct for ascending and descending comparators alike.
fn recurse<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
	F: FnMut(&T, &T) -> Ordering,
{
	if v.len() <= 1 {
		return v;
	}

	let mut elements = v.into_iter();
	let Some(pivot) = elements.next() else {
		return Vec::new();
	};

	let mut less = Vec::new();
	let mut greater = Vec::new();
	let mut equal = Vec::new();
	for x in elements {
		match compare(&x, &pivot) {
			Less => less.push(x),
			Greater => greater.push(x),
			Equal => equal.push(x),
		}
	}

	let mut sorted = ensure_sufficient_stack(|| recurse(less, compare));
	sorted.push(pivot);
	sorted.append(&mut equal);
	sorted.append(&mut ensure_sufficient_stack(|| recurse(greater, compare)));
	sorted
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sorted;
	use crate::compare::{descending, last_digit};
	use ndarray::{Array1, ArrayView1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let array = Array1::from_vec(xs.clone());
		assert_eq!(quick_sorted(array.view(), u32::cmp), Array1::from_vec(sorted));
		assert_eq!(array, Array1::from_vec(xs));
	}

	#[quickcheck]
	fn reverse_sorted(xs: Vec<i16>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| b.cmp(a));
		let array = quick_sorted(ArrayView1::from(&xs), descending);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	#[quickcheck]
	fn sorted_by_last_digit(xs: Vec<u16>) {
		let array = quick_sorted(ArrayView1::from(&xs), last_digit);
		assert_eq!(array.len(), xs.len());
		for i in 1..array.len() {
			assert!(array[i - 1] % 10 <= array[i] % 10);
		}
		let mut expected = xs.clone();
		expected.sort_unstable();
		let mut actual = array.to_vec();
		actual.sort_unstable();
		assert_eq!(actual, expected);
	}

	#[test]
	fn equal_bucket_keeps_input_order() {
		// 13, 3, and 23 share their last digit and stay in input order behind the pivot.
		let xs = [13u32, 8, 3, 1, 23];
		let array = quick_sorted(ArrayView1::from(&xs), last_digit);
		assert_eq!(array, Array1::from_vec(vec![1, 13, 3, 23, 8]));
	}
}
