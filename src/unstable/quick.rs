//! Recursive quicksort over a Lomuto partition.
//!
//! *O*(*n* \* log(*n*)) on average. With [`FirstPivot`] already sorted input takes *O*(*n*^2),
//! which [`RandomPivot`] avoids in expectation. Recursion always descends into the smaller side
//! and loops on the larger one, so the stack never grows beyond *O*(log(*n*)) frames whatever
//! the pivots turn out to be.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::Rng;

use crate::compare::{natural, Compare};
use crate::error::SortError;
use crate::partition::{partition_with, FirstPivot, RandomPivot, SelectPivot};

sort_impl!("quick_unstable");

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
    QuickSort::new().sort_by(v, compare)
}

/// Quicksort configured with a pivot selection strategy.
///
/// ```ignore
/// let mut sorter = QuickSort::seeded(0x5eed);
/// sorter.sort(&mut v)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuickSort<P = FirstPivot> {
    pivot: P,
}

impl QuickSort<FirstPivot> {
    pub fn new() -> Self {
        Self::with_pivot(FirstPivot)
    }
}

impl QuickSort<RandomPivot<StdRng>> {
    /// Random pivots from a generator seeded by the operating system, once.
    pub fn randomized() -> Self {
        Self::with_pivot(RandomPivot::from_entropy())
    }

    /// Random pivots from a generator with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_pivot(RandomPivot::seeded(seed))
    }
}

impl<R: Rng> QuickSort<RandomPivot<R>> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_pivot(RandomPivot::new(rng))
    }
}

impl<P: SelectPivot> QuickSort<P> {
    pub fn with_pivot(pivot: P) -> Self {
        Self { pivot }
    }

    pub fn sort<T>(&mut self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Ord,
    {
        self.sort_by(v, natural)
    }

    pub fn sort_by<T, E, F>(&mut self, v: &mut [T], mut compare: F) -> Result<(), SortError<E>>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let res = quicksort(v, &mut self.pivot, &mut compare);
        crate::log_failure_with_pivot("quick_unstable", Some(self.pivot.name()), res)
    }

    pub fn sort_range_by<T, E, F>(
        &mut self,
        v: &mut [T],
        first: usize,
        last: usize,
        compare: F,
    ) -> Result<(), SortError<E>>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let range = crate::check_range::<E>(v.len(), first, last)?;
        self.sort_by(&mut v[range], compare)
    }
}

fn quicksort<T, C, P>(mut v: &mut [T], pivot: &mut P, compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
    P: SelectPivot,
{
    loop {
        if v.len() < 2 {
            return Ok(());
        }

        let mid = partition_with(v, pivot, compare)?;

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, pivot, compare)?;
            v = right;
        } else {
            quicksort(right, pivot, compare)?;
            v = left;
        }
    }
}
