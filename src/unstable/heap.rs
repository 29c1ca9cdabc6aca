//! Heapsort.
//!
//! *O*(*n* \* log(*n*)) worst case, in-place, not stable.

use std::cmp::Ordering;

use crate::compare::{natural, Compare};
use crate::error::SortError;
use crate::heap::{self, Orientation};

sort_impl!("heap_unstable");

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
    crate::log_failure("heap_unstable", heapsort(v, &mut compare))
}

fn heapsort<T, C>(v: &mut [T], compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    heap::build(v, Orientation::Max, compare)?;

    // Move the current maximum behind the shrinking heap, then repair the heap's root.
    for heap_end in (1..v.len()).rev() {
        v.swap(0, heap_end);
        heap::sift_down(&mut v[..heap_end], 0, Orientation::Max, compare)?;
    }

    Ok(())
}
