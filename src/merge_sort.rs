//! Top-down merge sort into a new array.

#![cfg(feature = "alloc")]

use crate::{merge::merge, stack::ensure_sufficient_stack};
use alloc::vec::Vec;
use core::cmp::Ordering;
use ndarray::{Array1, ArrayView1};

/// Sorts `v` into a new array using merge sort, which is stable and *O*(*n* \* log(*n*))
/// worst-case.
pub fn merge_sort<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> Array1<T>
where
	T: Clone,
	F: FnMut(&T, &T) -> Ordering,
{
	Array1::from_vec(recurse(v.to_vec(), &mut compare))
}

/// Sorts `v` recursively.
///
/// The left half receives `len / 2` elements, the right half the remaining ones.
fn recurse<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
	F: FnMut(&T, &T) -> Ordering,
{
	let len = v.len();

	// Runs of up to one element are sorted already.
	if len <= 1 {
		return v;
	}

	let right = v.split_off(len / 2);
	let left = ensure_sufficient_stack(|| recurse(v, compare));
	let right = ensure_sufficient_stack(|| recurse(right, compare));
	merge(left, right, compare)
}
