//! Built-in comparators.
//!
//! A comparator is any function or closure of the shape `FnMut(&A, &A) -> Ordering` imposing a
//! total order on `A`. The functions in this module can be passed by name to every `*_by` method
//! of [`Sort1Ext`](crate::Sort1Ext).
//!
//! ```
//! use ndarray_classic_sort::{compare, ndarray::arr1, Sort1Ext};
//!
//! let v = arr1(&[3, 1, 2]);
//! assert!(v.merge_sorted_by(compare::ascending) == arr1(&[1, 2, 3]));
//! assert!(v.merge_sorted_by(compare::descending) == arr1(&[3, 2, 1]));
//! ```

use core::cmp::Ordering::{self, Equal, Greater, Less};

/// Orders from lowest to highest.
///
/// Returns [`Less`] if `a < b`, [`Greater`] if `b < a`, and [`Equal`] otherwise. Pairs which are
/// not comparable at all (e.g., `NaN`) compare [`Equal`].
///
/// ```
/// use core::cmp::Ordering::{Equal, Greater, Less};
/// use ndarray_classic_sort::compare::ascending;
///
/// assert_eq!(ascending(&1, &2), Less);
/// assert_eq!(ascending(&2, &1), Greater);
/// assert_eq!(ascending(&2, &2), Equal);
/// assert_eq!(ascending(&f64::NAN, &0.0), Equal);
/// ```
#[inline]
pub fn ascending<T>(a: &T, b: &T) -> Ordering
where
	T: PartialOrd + ?Sized,
{
	if a < b {
		Less
	} else if b < a {
		Greater
	} else {
		Equal
	}
}

/// Orders from highest to lowest, the mirror of [`ascending`].
///
/// ```
/// use core::cmp::Ordering::{Greater, Less};
/// use ndarray_classic_sort::compare::descending;
///
/// assert_eq!(descending(&1, &2), Greater);
/// assert_eq!(descending(&2, &1), Less);
/// ```
#[inline]
pub fn descending<T>(a: &T, b: &T) -> Ordering
where
	T: PartialOrd + ?Sized,
{
	ascending(b, a)
}

/// Orders integers by their last decimal digit only, lowest digit first.
///
/// The digit is the Euclidean remainder modulo 10, hence `-7` has the last digit `3`.
///
/// ```
/// use core::cmp::Ordering::{Equal, Less};
/// use ndarray_classic_sort::compare::last_digit;
///
/// assert_eq!(last_digit(&23, &15), Less);
/// assert_eq!(last_digit(&42u8, &2), Equal);
/// assert_eq!(last_digit(&-7i64, &4), Less);
/// ```
#[inline]
pub fn last_digit<T>(a: &T, b: &T) -> Ordering
where
	T: Copy + Into<i128>,
{
	ascending(&digit(*a), &digit(*b))
}

#[inline]
fn digit<T: Into<i128>>(value: T) -> i128 {
	value.into().rem_euclid(10)
}
