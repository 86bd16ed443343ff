//! Two-way linear merge of sorted runs.

#![cfg(feature = "alloc")]

use alloc::vec::Vec;
use core::cmp::Ordering::{self, Greater};

/// Merges the sorted runs `left` and `right` into one sorted run, which is *O*(*n* + *m*).
///
/// Both runs must be sorted by `compare`. On ties the element of `left` is taken first, so the
/// merge is stable. Once either run is exhausted, the rest of the other one is appended as is.
pub fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
	F: FnMut(&T, &T) -> Ordering,
{
	let mut merged = Vec::with_capacity(left.len() + right.len());
	let mut left = left.into_iter().peekable();
	let mut right = right.into_iter().peekable();

	while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
		// Prefer the left run unless it is strictly greater.
		let next = if compare(l, r) == Greater {
			right.next()
		} else {
			left.next()
		};
		merged.extend(next);
	}

	// At most one of both runs is left over.
	merged.extend(left);
	merged.extend(right);
	merged
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::merge;
	use core::cmp::Ordering;
	use quickcheck_macros::quickcheck;

	#[derive(Debug, Clone, Copy)]
	struct Item {
		run: usize,
		value: u8,
	}

	impl Item {
		fn cmp_value(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	#[quickcheck]
	fn merged(xs: Vec<u32>, ys: Vec<u32>) {
		let (mut xs, mut ys) = (xs, ys);
		xs.sort_unstable();
		ys.sort_unstable();
		let mut sorted = [xs.as_slice(), ys.as_slice()].concat();
		sorted.sort_unstable();
		let merged = merge(xs, ys, &mut u32::cmp);
		assert_eq!(merged, sorted);
	}

	#[quickcheck]
	fn stably_merged(xs: Vec<u8>, ys: Vec<u8>) {
		let (mut xs, mut ys) = (xs, ys);
		xs.sort_unstable();
		ys.sort_unstable();
		let len = xs.len() + ys.len();
		let left: Vec<Item> = xs.into_iter().map(|value| Item { run: 0, value }).collect();
		let right: Vec<Item> = ys.into_iter().map(|value| Item { run: 1, value }).collect();
		let merged = merge(left, right, &mut Item::cmp_value);
		assert_eq!(merged.len(), len);
		for pair in merged.windows(2) {
			match pair[0].cmp_value(&pair[1]) {
				Ordering::Less => {}
				Ordering::Equal => assert!(pair[0].run <= pair[1].run),
				Ordering::Greater => panic!("{:?} not merged", pair),
			}
		}
	}

	#[test]
	fn empty_runs() {
		let empty = Vec::<u32>::new();
		assert_eq!(merge(empty.clone(), empty.clone(), &mut u32::cmp), empty);
		assert_eq!(merge(vec![1, 2], empty.clone(), &mut u32::cmp), [1, 2]);
		assert_eq!(merge(empty, vec![1, 2], &mut u32::cmp), [1, 2]);
	}

	#[test]
	fn descending_runs() {
		let merged = merge(vec![9, 4, 1], vec![8, 4, 0], &mut |a: &i32, b: &i32| b.cmp(a));
		assert_eq!(merged, [9, 8, 4, 4, 1, 0]);
	}
}
