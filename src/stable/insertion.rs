//! Insertion sort by adjacent swaps.
//!
//! *O*(*n*^2) comparisons and swaps worst case, *O*(*n*) on sorted input, no extra memory.

use std::cmp::Ordering;

use crate::compare::{natural, Compare};
use crate::error::SortError;

sort_impl!("insertion_stable");

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
    crate::log_failure("insertion_stable", insertion_sort(v, &mut compare))
}

fn insertion_sort<T, C>(v: &mut [T], compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    for i in 1..v.len() {
        // `v[..i]` is sorted, walk `v[i]` left until its neighbor is no longer greater.
        let mut j = i;
        while j > 0 && compare.is_less(&v[j], &v[j - 1])? {
            v.swap(j, j - 1);
            j -= 1;
        }
    }

    Ok(())
}
