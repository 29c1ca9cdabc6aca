//! Array backed binary heaps.
//!
//! The heap occupies `v[..size]`, node `i` has its children at `2i + 1` and `2i + 2`. Whether
//! the larger or the smaller element has to sit on top is selected by [`Orientation`].

use crate::compare::Compare;
use crate::error::SortError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Every parent is `>=` its children.
    Max,
    /// Every parent is `<=` its children.
    Min,
}

impl Orientation {
    /// Whether `child` has to be moved above `parent`.
    #[inline]
    fn dominates<T, C>(self, compare: &mut C, child: &T, parent: &T) -> Result<bool, SortError<C::Error>>
    where
        C: Compare<T>,
    {
        match self {
            Orientation::Max => compare.is_greater(child, parent),
            Orientation::Min => compare.is_less(child, parent),
        }
    }
}

/// # Panics
///
/// The root has no parent, `parent(0)` panics in debug builds and wraps around otherwise.
#[inline]
pub const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub const fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub const fn right_child(i: usize) -> usize {
    2 * i + 2
}

fn check_heap<E>(len: usize, root: usize, size: usize) -> Result<(), SortError<E>> {
    if size > len || (size > 0 && root >= size) {
        return Err(SortError::IndexOutOfRange {
            first: root,
            last: size,
            len,
        });
    }

    Ok(())
}

/// Sifts `v[root]` down until the sub-tree of `v[..size]` rooted at `root` is a heap.
///
/// Both sub-trees of `root` must already be heaps.
pub fn heapify<T, C>(
    v: &mut [T],
    root: usize,
    size: usize,
    orientation: Orientation,
    compare: &mut C,
) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    check_heap(v.len(), root, size)?;
    sift_down(&mut v[..size], root, orientation, compare)
}

/// Permutes `v[..size]` into a heap.
pub fn build_heap<T, C>(
    v: &mut [T],
    size: usize,
    orientation: Orientation,
    compare: &mut C,
) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    check_heap(v.len(), 0, size)?;
    build(&mut v[..size], orientation, compare)
}

pub fn max_heapify<T, E, F>(v: &mut [T], root: usize, size: usize, mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    heapify(v, root, size, Orientation::Max, &mut compare)
}

pub fn min_heapify<T, E, F>(v: &mut [T], root: usize, size: usize, mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    heapify(v, root, size, Orientation::Min, &mut compare)
}

pub fn build_max_heap<T, E, F>(v: &mut [T], size: usize, mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    build_heap(v, size, Orientation::Max, &mut compare)
}

pub fn build_min_heap<T, E, F>(v: &mut [T], size: usize, mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    build_heap(v, size, Orientation::Min, &mut compare)
}

/// The heap is the whole of `v`.
pub(crate) fn sift_down<T, C>(
    v: &mut [T],
    mut root: usize,
    orientation: Orientation,
    compare: &mut C,
) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    let size = v.len();

    loop {
        let left = left_child(root);
        let right = right_child(root);

        let mut top = root;
        if left < size && orientation.dominates(compare, &v[left], &v[top])? {
            top = left;
        }
        if right < size && orientation.dominates(compare, &v[right], &v[top])? {
            top = right;
        }

        if top == root {
            return Ok(());
        }

        v.swap(root, top);
        root = top;
    }
}

pub(crate) fn build<T, C>(v: &mut [T], orientation: Orientation, compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // Leaves are heaps already, start at the last parent.
    for i in (0..=parent(len - 1)).rev() {
        sift_down(v, i, orientation, compare)?;
    }

    Ok(())
}
