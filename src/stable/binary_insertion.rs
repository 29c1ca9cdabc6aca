//! Insertion sort that locates the insertion point by binary search.
//!
//! Only *O*(*n* \* log(*n*)) comparisons, the element moves stay quadratic.

use std::cmp::Ordering;

use crate::compare::{natural, Compare};
use crate::error::SortError;
use crate::search::binary_search;

sort_impl!("binary_insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    sort_by(v, natural)
}

#[inline]
pub fn sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    crate::log_failure(
        "binary_insertion_stable",
        binary_insertion_sort(v, &mut compare),
    )
}

fn binary_insertion_sort<T, C>(v: &mut [T], compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    for i in 1..v.len() {
        let (sorted, rest) = v.split_at(i);

        // The rightmost insertion point puts `v[i]` behind every equal element, which is what
        // keeps the sort stable.
        let k = binary_search(sorted, &rest[0], compare)?;
        if k < i {
            v[k..=i].rotate_right(1);
        }
    }

    Ok(())
}
