//! Textbook comparison sorts ([merge sort], [quicksort] with auxiliary buckets, and in-place
//! quicksort with the [Lomuto partition scheme]) driven by pluggable comparators for
//! non-contiguous (sub)views into 1-dimensional [`ndarray`] arrays.
//!
//! # Example
//!
//! ```
//! use ndarray_classic_sort::{compare, ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 3 columns.
//! let mut v = arr2(&[[-5, 4, 13],   // row 0, axis 0
//!                    [ 8, 3, 22],   // row 1, axis 0
//!                    [38, 9, 31],   // row 2, axis 0
//!                    [ 4, 9, 40]]); // row 3, axis 0
//!
//! // Copying sorts leave the array untouched and return a new one.
//! let by_digit = v.column(2).merge_sorted_by(compare::last_digit);
//! assert!(by_digit == ndarray_classic_sort::ndarray::arr1(&[40, 31, 22, 13]));
//!
//! // Due to row-major memory layout, columns are non-contiguous but still sortable in place.
//! v.column_mut(0).quick_sort_by(compare::descending);
//!
//! assert!(v == arr2(&[[38, 4, 13],
//!                     [ 8, 3, 22],
//!                     [ 4, 9, 31],
//!                     [-5, 9, 40]]));
//! ```
//!
//! # Comparators
//!
//! Every `*_by` method accepts a comparator `FnMut(&A, &A) -> Ordering` imposing a total order on
//! the elements, e.g., one of the functions in [`compare`] or any closure. The methods without
//! suffix sort in ascending order, the `*_by_key` methods compare extracted keys in ascending
//! order.
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *m* the length of the other one.
//!
//! | Resource | Complexity | [`merged`]     | [`merge_sorted`] | [`quick_sorted`] | [`quick_sort`]   |
//! |----------|------------|----------------|------------------|------------------|------------------|
//! | Time     | Best       | *O*(*n*+*m*)   | *O*(*n* log *n*) | *O*(*n*)         | *O*(*n* log *n*) |
//! | Time     | Average    | *O*(*n*+*m*)   | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) |
//! | Time     | Worst      | *O*(*n*+*m*)   | *O*(*n* log *n*) | *O*(*n*^2)       | *O*(*n*^2)       |
//! | Space    | Worst      | *O*(*n*+*m*)   | *O*(*n*)         | *O*(*n*)         | *O*(log *n*)     |
//!
//! Only [`merged`] and [`merge_sorted`] are stable.
//!
//! [merge sort]: https://en.wikipedia.org/wiki/Merge_sort
//! [quicksort]: https://en.wikipedia.org/wiki/Quicksort
//! [Lomuto partition scheme]: https://en.wikipedia.org/wiki/Quicksort#Lomuto_partition_scheme
//!
//! [`merged`]: Sort1Ext::merged
//! [`merge_sorted`]: Sort1Ext::merge_sorted
//! [`quick_sorted`]: Sort1Ext::quick_sorted
//! [`quick_sort`]: Sort1Ext::quick_sort
//!
//! # Features
//!
//!   * `alloc` for the copying `merged*`/`merge_sorted*`/`quick_sorted*`. Enabled by `std`.
//!   * `std` for `ndarray/std`. Enabled by `default` or `stacker`.
//!   * `stacker` for growing the stack on demand during deep recursion. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod compare;

mod merge;
mod merge_sort;
mod partition;
mod quick_sort;
mod quick_sorted;
mod stack;

#[cfg(feature = "alloc")]
use crate::{merge::merge, merge_sort::merge_sort, quick_sorted::quick_sorted};

use crate::{partition::partition, quick_sort::quick_sort};
use core::cmp::Ordering::{self, Greater};
#[cfg(feature = "alloc")]
use ndarray::Array1;
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing classic comparison sorts with
/// pluggable comparators.
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Merges this sorted array with another sorted array into a new sorted array.
	///
	/// Both arrays must be sorted in ascending order. The merge is stable, on ties the elements
	/// of `self` precede the elements of `other`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[-5, 1, 4]);
	/// let w = arr1(&[-3, 2, 4, 9]);
	///
	/// assert!(v.merged(&w) == arr1(&[-5, -3, 1, 2, 4, 4, 9]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merged<S2>(&self, other: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: Ord + Clone,
		S2: Data<Elem = A>;
	/// Merges this sorted array with another sorted array into a new sorted array with a
	/// comparator function.
	///
	/// Both arrays must be sorted by `compare`. The merge is stable, on ties the elements of
	/// `self` precede the elements of `other`. If either array is not sorted, the order of the
	/// elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[9, 4, 1]);
	/// let w = arr1(&[8, 4, 0]);
	///
	/// assert!(v.merged_by(&w, compare::descending) == arr1(&[9, 8, 4, 4, 1, 0]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merged_by<S2, F>(&self, other: &ArrayBase<S2, Ix1>, compare: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Ordering;
	/// Merges this sorted array with another sorted array into a new sorted array with a key
	/// extraction function.
	///
	/// Both arrays must be sorted by the keys `f` extracts. The merge is stable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[1i32, -3, 4]);
	/// let w = arr1(&[2i32, -4]);
	///
	/// assert!(v.merged_by_key(&w, |k| k.abs()) == arr1(&[1, 2, -3, 4, -4]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merged_by_key<S2, K, F>(&self, other: &ArrayBase<S2, Ix1>, f: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Sorts the array into a new array.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* log *n*)
	/// worst-case. The array itself is left untouched.
	///
	/// # Current Implementation
	///
	/// The current algorithm is a top-down merge sort. Arrays of up to one element are sorted
	/// already. Longer arrays are split into a left half of `len / 2` elements and a right half
	/// of the remaining ones, both halves are sorted recursively and then merged as with
	/// [`merged`](Sort1Ext::merged).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// assert!(v.merge_sorted() == arr1(&[-5, -3, 1, 2, 4]));
	/// assert!(v == arr1(&[-5, 4, 1, -3, 2]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merge_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone;
	/// Sorts the array into a new array with a comparator function.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* log *n*)
	/// worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// [`compare::ascending`] as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// assert_eq!(floats.merge_sorted_by(compare::ascending), arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[23, 15, 7, 41]);
	///
	/// assert!(v.merge_sorted_by(|a, b| b.cmp(a)) == arr1(&[41, 23, 15, 7]));
	///
	/// // Last digits 1, 3, 5, and 7.
	/// assert!(v.merge_sorted_by(compare::last_digit) == arr1(&[41, 23, 15, 7]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merge_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Sorts the array into a new array with a key extraction function.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*m* \* *n* \* log(*n*))
	/// worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// assert!(v.merge_sorted_by_key(|k| k.abs()) == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn merge_sorted_by_key<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Sorts the array into a new array using quicksort with auxiliary buckets.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*n* log *n*) average-case,
	/// and *O*(*n*^2) worst-case. The array itself is left untouched.
	///
	/// # Current Implementation
	///
	/// The current algorithm chooses the first element as pivot and distributes all elements into
	/// three new buckets: elements ordered before, equal to, and after the pivot. The outer
	/// buckets are sorted recursively and then concatenated around the equal one. Already sorted
	/// arrays hit the quadratic worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// assert!(v.quick_sorted() == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone;
	/// Sorts the array into a new array using quicksort with auxiliary buckets and a comparator
	/// function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*n* log *n*) average-case,
	/// and *O*(*n*^2) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[3, 1, 2]);
	///
	/// assert!(v.quick_sorted_by(compare::ascending) == arr1(&[1, 2, 3]));
	/// assert!(v.quick_sorted_by(compare::descending) == arr1(&[3, 2, 1]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Sorts the array into a new array using quicksort with auxiliary buckets and a key
	/// extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*m* \* *n* \* log(*n*))
	/// average-case, and *O*(*m* \* *n*^2) worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&["ccc", "a", "bb"]);
	///
	/// assert!(v.quick_sorted_by_key(|s| s.len()) == arr1(&["a", "bb", "ccc"]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn quick_sorted_by_key<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Sorts the array in place using quicksort and returns it.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), *O*(*n* log *n*) average-case, and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// The current algorithm repeatedly partitions the array with the Lomuto scheme (see
	/// [`partition_lomuto`](Sort1Ext::partition_lomuto)), i.e., choosing the last element as
	/// pivot. It recurses into the shorter side of the pivot and continues with the longer side,
	/// which limits the recursion depth to *O*(log *n*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1]);
	///
	/// assert!(*v.quick_sort() == arr1(&[1, 3, 5, 8]));
	/// assert!(v == arr1(&[1, 3, 5, 8]));
	/// ```
	fn quick_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using quicksort with a comparator function and returns it.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), *O*(*n* log *n*) average-case, and *O*(*n*^2) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified, but the array
	/// still holds every element it initially held exactly once.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[19, 2, 33, 5]);
	///
	/// v.quick_sort_by(compare::last_digit);
	/// assert!(v == arr1(&[2, 33, 5, 19]));
	///
	/// v.quick_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[33, 19, 5, 2]));
	/// ```
	fn quick_sort_by<F>(&mut self, compare: F) -> &mut Self
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in place using quicksort with a key extraction function and returns it.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), *O*(*m* \* *n* \* log(*n*)) average-case, and *O*(*m* \* *n*^2) worst-case,
	/// where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.quick_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn quick_sort_by_key<K, F>(&mut self, f: F) -> &mut Self
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Partitions the range `lo..=hi` around its last element and returns the pivot's final
	/// index.
	///
	/// After partitioning, the pivot is at its sorted position within the range, every element
	/// of the range in front of it is less than the pivot, and every element behind it is greater
	/// than or equal to the pivot. Elements outside of the range are left untouched.
	///
	/// This is the Lomuto partition scheme, which is *O*(*n*) and in-place.
	///
	/// # Panics
	///
	/// Panics when `lo > hi` or `hi >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1]);
	///
	/// assert_eq!(v.partition_lomuto(0, 3), 0);
	/// assert_eq!(v[0], 1);
	///
	/// let mut v = arr1(&[7, 9, 5, 2, 4, 6]);
	///
	/// // Partition all but the first element around 6.
	/// assert_eq!(v.partition_lomuto(1, 5), 4);
	/// assert!(v == arr1(&[7, 5, 2, 4, 6, 9]));
	/// ```
	fn partition_lomuto(&mut self, lo: usize, hi: usize) -> usize
	where
		A: Ord,
		S: DataMut;
	/// Partitions the range `lo..=hi` around its last element with a comparator function and
	/// returns the pivot's final index.
	///
	/// Every element of the range ordered before the pivot by `compare` (i.e., [`Less`]) ends up
	/// in front of it, every other element behind it.
	///
	/// [`Less`]: Ordering::Less
	///
	/// # Panics
	///
	/// Panics when `lo > hi` or `hi >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 4]);
	///
	/// let p = v.partition_lomuto_by(0, 3, compare::descending);
	/// assert_eq!(p, 2);
	/// assert!(v == arr1(&[5, 8, 4, 3]));
	/// ```
	fn partition_lomuto_by<F>(&mut self, lo: usize, hi: usize, compare: F) -> usize
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Partitions the range `lo..=hi` around its last element with a key extraction function and
	/// returns the pivot's final index.
	///
	/// # Panics
	///
	/// Panics when `lo > hi` or `hi >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3]);
	///
	/// assert_eq!(v.partition_lomuto_by_key(0, 3, |k| k.abs()), 1);
	/// assert!(v == arr1(&[1, -3, -5, 4]));
	/// ```
	fn partition_lomuto_by_key<K, F>(&mut self, lo: usize, hi: usize, f: F) -> usize
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted in ascending order.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: Ord;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// That is, `compare` must not return [`Greater`] for any element and its following element.
	///
	/// [`Greater`]: Ordering::Greater
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
	///
	/// assert!(arr1(&[9, 4, 4, 1]).is_sorted_by(compare::descending));
	/// assert!(arr1(&[40, 31, 22, 13]).is_sorted_by(compare::last_digit));
	/// assert!(!arr1(&[1, 2]).is_sorted_by(compare::descending));
	/// ```
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<K, F>(&self, f: F) -> bool
	where
		K: Ord,
		F: FnMut(&A) -> K;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "alloc")]
	#[inline]
	fn merged<S2>(&self, other: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: Ord + Clone,
		S2: Data<Elem = A>,
	{
		self.merged_by(other, A::cmp)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merged_by<S2, F>(&self, other: &ArrayBase<S2, Ix1>, mut compare: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Ordering,
	{
		Array1::from_vec(merge(self.to_vec(), other.to_vec(), &mut compare))
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merged_by_key<S2, K, F>(&self, other: &ArrayBase<S2, Ix1>, mut f: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		self.merged_by(other, |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone,
	{
		merge_sort(self.view(), A::cmp)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		merge_sort(self.view(), compare)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sorted_by_key<K, F>(&self, mut f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		merge_sort(self.view(), |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone,
	{
		quick_sorted(self.view(), A::cmp)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		quick_sorted(self.view(), compare)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn quick_sorted_by_key<K, F>(&self, mut f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		quick_sorted(self.view(), |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[inline]
	fn quick_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut,
	{
		self.quick_sort_by(A::cmp)
	}
	#[inline]
	fn quick_sort_by<F>(&mut self, compare: F) -> &mut Self
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		quick_sort(self.view_mut(), compare);
		self
	}
	#[inline]
	fn quick_sort_by_key<K, F>(&mut self, mut f: F) -> &mut Self
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.quick_sort_by(|a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[inline]
	fn partition_lomuto(&mut self, lo: usize, hi: usize) -> usize
	where
		A: Ord,
		S: DataMut,
	{
		partition(self.view_mut(), lo, hi, &mut A::cmp)
	}
	#[inline]
	fn partition_lomuto_by<F>(&mut self, lo: usize, hi: usize, mut compare: F) -> usize
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		partition(self.view_mut(), lo, hi, &mut compare)
	}
	#[inline]
	fn partition_lomuto_by_key<K, F>(&mut self, lo: usize, hi: usize, mut f: F) -> usize
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		partition(self.view_mut(), lo, hi, &mut |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: Ord,
	{
		self.is_sorted_by(A::cmp)
	}
	fn is_sorted_by<F>(&self, mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		self.iter()
			.zip(self.iter().skip(1))
			.all(|(a, b)| compare(a, b) != Greater)
	}
	#[inline]
	fn is_sorted_by_key<K, F>(&self, mut f: F) -> bool
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		self.is_sorted_by(|a: &A, b: &A| f(a).cmp(&f(b)))
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Sort1Ext, compare};
	use core::cmp::Ordering;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

	type Comparator = fn(&i32, &i32) -> Ordering;

	const COMPARATORS: [Comparator; 3] = [
		compare::ascending::<i32>,
		compare::descending::<i32>,
		compare::last_digit::<i32>,
	];

	/// All sorts of `v` by `compare`, the in-place one last.
	fn all_sorted(v: &Array1<i32>, compare: Comparator) -> [Array1<i32>; 3] {
		let mut in_place = v.clone();
		in_place.quick_sort_by(compare);
		[
			v.merge_sorted_by(compare),
			v.quick_sorted_by(compare),
			in_place,
		]
	}

	fn same_elements(a: &Array1<i32>, b: &Array1<i32>) -> bool {
		let mut a = a.to_vec();
		let mut b = b.to_vec();
		a.sort_unstable();
		b.sort_unstable();
		a == b
	}

	#[quickcheck]
	fn permuted_and_ordered(xs: Vec<i32>) {
		let v = Array1::from_vec(xs);
		for compare in COMPARATORS {
			for sorted in all_sorted(&v, compare) {
				assert_eq!(sorted.len(), v.len());
				assert!(same_elements(&sorted, &v));
				assert!(sorted.is_sorted_by(compare));
			}
		}
	}

	#[quickcheck]
	fn idempotent(xs: Vec<i32>) {
		let v = Array1::from_vec(xs);
		// Elements equal by these comparators are identical.
		for compare in [COMPARATORS[0], COMPARATORS[1]] {
			let once = v.merge_sorted_by(compare);
			for twice in all_sorted(&once, compare) {
				assert_eq!(twice, once);
			}
		}
		let once = v.merge_sorted_by(compare::last_digit);
		assert_eq!(once.merge_sorted_by(compare::last_digit), once);
	}

	#[quickcheck]
	fn merged_sorted_runs(xs: Vec<i32>, ys: Vec<i32>) {
		let v = Array1::from_vec(xs).merge_sorted();
		let w = Array1::from_vec(ys).merge_sorted();
		let merged = v.merged(&w);
		assert_eq!(merged.len(), v.len() + w.len());
		assert!(merged.is_sorted());
		assert!(same_elements(&merged, &v.iter().chain(&w).copied().collect()));
	}

	#[test]
	fn empty_and_singleton() {
		let empty = Array1::<i32>::zeros(0);
		let single = arr1(&[7]);
		for compare in COMPARATORS {
			for sorted in all_sorted(&empty, compare) {
				assert!(sorted.is_empty());
			}
			for sorted in all_sorted(&single, compare) {
				assert_eq!(sorted, single);
			}
		}
		assert!(empty.merged(&empty).is_empty());
		assert_eq!(empty.merged(&single), single);
		assert_eq!(single.merged(&empty), single);
	}

	#[test]
	fn ascending_and_descending() {
		let v = arr1(&[3, 1, 2]);
		for sorted in all_sorted(&v, compare::ascending) {
			assert_eq!(sorted, arr1(&[1, 2, 3]));
		}
		for sorted in all_sorted(&v, compare::descending) {
			assert_eq!(sorted, arr1(&[3, 2, 1]));
		}
	}

	#[test]
	fn by_last_digit() {
		for sorted in all_sorted(&arr1(&[23, 15, 7]), compare::last_digit) {
			assert_eq!(sorted, arr1(&[23, 15, 7]));
		}
		for sorted in all_sorted(&arr1(&[19, 2, 33, 5]), compare::last_digit) {
			assert_eq!(sorted, arr1(&[2, 33, 5, 19]));
		}
	}

	#[test]
	fn quick_sort_returns_self() {
		let mut v = arr1(&[5, 3, 8, 1]);
		let ptr: *const Array1<i32> = &v;
		assert!(core::ptr::eq(v.quick_sort(), ptr));
		assert_eq!(v, arr1(&[1, 3, 5, 8]));
	}

	#[test]
	fn partition_smallest_pivot() {
		let mut v = arr1(&[5, 3, 8, 1]);
		assert_eq!(v.partition_lomuto(0, 3), 0);
		assert_eq!(v[0], 1);
		assert!(v.iter().skip(1).all(|&x| x > 1));
	}

	#[test]
	#[should_panic(expected = "out of bounds for length 4")]
	fn partition_out_of_bounds() {
		let mut v = arr1(&[5, 3, 8, 1]);
		let _ = v.partition_lomuto(0, 4);
	}

	#[test]
	fn stable_merge_sort() {
		let v = arr1(&[(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
		let sorted = v.merge_sorted_by_key(|&(k, _)| k);
		assert_eq!(sorted, arr1(&[(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]));
	}

	#[test]
	fn shuffled() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		let mut xs = (0..10_000).collect::<Vec<i32>>();
		xs.shuffle(&mut rng);
		let v = Array1::from_vec(xs);
		let expected = Array1::from_iter(0..10_000);
		assert_eq!(v.merge_sorted(), expected);
		assert_eq!(v.quick_sorted(), expected);
		assert_eq!(*v.clone().quick_sort(), expected);
	}

	#[test]
	fn random_with_duplicates() {
		let mut rng = StdRng::seed_from_u64(42);
		let xs = (0..5_000)
			.map(|_| rng.random_range(-50..50))
			.collect::<Vec<i32>>();
		let v = Array1::from_vec(xs);
		for compare in COMPARATORS {
			for sorted in all_sorted(&v, compare) {
				assert!(same_elements(&sorted, &v));
				assert!(sorted.is_sorted_by(compare));
			}
		}
	}

	#[test]
	fn already_sorted_worst_case() {
		// Recurses once per element in `quick_sorted`.
		let v = Array1::from_iter(0..10_000);
		for compare in COMPARATORS {
			let sorted = v.merge_sorted_by(compare);
			for resorted in all_sorted(&sorted, compare) {
				assert!(same_elements(&resorted, &v));
				assert!(resorted.is_sorted_by(compare));
			}
		}
		let reversed = Array1::from_iter((0..10_000).rev());
		assert_eq!(*reversed.clone().quick_sort(), v);
		assert_eq!(reversed.quick_sorted(), v);
	}
}
