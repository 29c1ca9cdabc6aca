//! Quicksort with uniformly random pivots, see [`super::quick::QuickSort`].
//!
//! The free functions draw pivots from [`rand::thread_rng`], which is seeded from the operating
//! system once per thread and reused by every later call. Build a [`QuickSort::seeded`] to pin
//! the seed instead.

use std::cmp::Ordering;

use crate::compare::natural;
use crate::error::SortError;
use crate::unstable::quick::QuickSort;

sort_impl!("quick_random_unstable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    sort_by(v, natural)
}

#[inline]
pub fn sort_by<T, E, F>(v: &mut [T], compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    QuickSort::with_rng(rand::thread_rng()).sort_by(v, compare)
}
