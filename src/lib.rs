//! Classical comparison based array algorithms over a fallible ordering.
//!
//! Every algorithm rearranges a slice (or a `first..last` range of it) in place, aborts on the
//! first failed comparison and, whatever happens, leaves the range holding exactly the elements
//! it started with.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::ops::Range;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T]) -> Result<(), crate::SortError>
            where
                T: Ord,
            {
                sort(arr)
            }

            #[inline]
            fn sort_by<T, E, F>(arr: &mut [T], compare: F) -> Result<(), crate::SortError<E>>
            where
                F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
            {
                sort_by(arr, compare)
            }
        }
    };
}

pub mod compare;
pub mod error;
pub mod heap;
pub mod partition;
pub mod search;
pub mod selection;
pub mod stable;
pub mod unstable;

pub use compare::Compare;
pub use error::{Incomparable, SortError};
pub use unstable::quick::QuickSort;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T]) -> Result<(), SortError>
    where
        T: Ord;

    fn sort_by<T, E, F>(arr: &mut [T], compare: F) -> Result<(), SortError<E>>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>;

    fn sort_range<T>(arr: &mut [T], first: usize, last: usize) -> Result<(), SortError>
    where
        T: Ord,
    {
        let range = check_range::<Infallible>(arr.len(), first, last)?;
        Self::sort(&mut arr[range])
    }

    fn sort_range_by<T, E, F>(
        arr: &mut [T],
        first: usize,
        last: usize,
        compare: F,
    ) -> Result<(), SortError<E>>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let range = check_range::<E>(arr.len(), first, last)?;
        Self::sort_by(&mut arr[range], compare)
    }
}

/// Validates `0 <= first <= last <= len`.
pub fn check_range<E>(len: usize, first: usize, last: usize) -> Result<Range<usize>, SortError<E>> {
    if first <= last && last <= len {
        Ok(first..last)
    } else {
        Err(SortError::IndexOutOfRange { first, last, len })
    }
}

/// Common tail for the sorts, attaches the algorithm name to comparator failures.
fn log_failure<E>(name: &'static str, res: Result<(), SortError<E>>) -> Result<(), SortError<E>> {
    log_failure_with_pivot(name, None, res)
}

/// [`log_failure`] for sorts that are parameterized by a pivot strategy.
fn log_failure_with_pivot<E>(
    name: &'static str,
    pivot: Option<&'static str>,
    res: Result<(), SortError<E>>,
) -> Result<(), SortError<E>> {
    if let Err(SortError::ComparisonFailed(_)) = &res {
        tracing::debug!(algorithm = name, pivot, "comparison failed, aborting sort");
    }

    res
}
