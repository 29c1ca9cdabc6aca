//! Lomuto style partitioning around a single pivot.
//!
//! After partitioning, every element left of the returned index is `<=` the pivot and every
//! element right of it is `>` the pivot, with the pivot itself at the returned index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compare::Compare;
use crate::error::SortError;

/// Chooses which element of a non-empty slice becomes the pivot.
pub trait SelectPivot {
    fn name(&self) -> &'static str;

    /// Returns an index in `0..len`. `len` is never zero.
    fn select_pivot(&mut self, len: usize) -> usize;
}

/// Always the first element. Degrades to quadratic time on already sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPivot;

impl SelectPivot for FirstPivot {
    fn name(&self) -> &'static str {
        "first"
    }

    #[inline]
    fn select_pivot(&mut self, _len: usize) -> usize {
        0
    }
}

/// A uniformly random element drawn from an owned generator.
///
/// The generator is seeded once, when the strategy is built, and reused for every pivot after
/// that.
#[derive(Debug, Clone)]
pub struct RandomPivot<R = StdRng> {
    rng: R,
}

impl RandomPivot<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPivot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SelectPivot for RandomPivot<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    #[inline]
    fn select_pivot(&mut self, len: usize) -> usize {
        let pivot_pos = self.rng.gen_range(0..len);
        tracing::trace!(pivot_pos, len, "random pivot");

        pivot_pos
    }
}

/// Partitions `v` around its first element and returns the pivot's final position.
///
/// Returns `0` for an empty slice without comparing anything.
pub fn partition<T, C>(v: &mut [T], compare: &mut C) -> Result<usize, SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();
    if len == 0 {
        return Ok(0);
    }

    // Grow the `> pivot` region leftwards from the end. Invariant: `v[gt_start..]` is `> pivot`
    // and `v[j + 1..gt_start]` is `<= pivot`.
    let mut gt_start = len;
    for j in (1..len).rev() {
        if compare.is_less(&v[0], &v[j])? {
            gt_start -= 1;
            v.swap(gt_start, j);
        }
    }

    let pivot_pos = gt_start - 1;
    v.swap(0, pivot_pos);

    Ok(pivot_pos)
}

/// Moves the element picked by `pivot` to the front, then [`partition`]s.
pub fn partition_with<T, C, P>(
    v: &mut [T],
    pivot: &mut P,
    compare: &mut C,
) -> Result<usize, SortError<C::Error>>
where
    C: Compare<T>,
    P: SelectPivot,
{
    if !v.is_empty() {
        let pivot_pos = pivot.select_pivot(v.len());
        v.swap(0, pivot_pos);
    }

    partition(v, compare)
}

/// [`partition`] on `v[first..last]`, with the pivot's absolute index as result. An empty range
/// yields `first`.
pub fn partition_range<T, E, F>(
    v: &mut [T],
    first: usize,
    last: usize,
    mut compare: F,
) -> Result<usize, SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    let range = crate::check_range::<E>(v.len(), first, last)?;
    let pivot_pos = partition(&mut v[range], &mut compare)?;

    Ok(first + pivot_pos)
}

/// [`partition_with`] a random pivot on `v[first..last]`, with the pivot's absolute index as
/// result.
pub fn partition_random_range<T, E, F, R>(
    v: &mut [T],
    first: usize,
    last: usize,
    rng: &mut R,
    mut compare: F,
) -> Result<usize, SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
    R: Rng,
{
    let range = crate::check_range::<E>(v.len(), first, last)?;
    let mut pivot = RandomPivot::new(rng);
    let pivot_pos = partition_with(&mut v[range], &mut pivot, &mut compare)?;

    Ok(first + pivot_pos)
}
