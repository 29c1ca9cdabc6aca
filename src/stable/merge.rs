//! Top-down merge sort.
//!
//! *O*(*n* \* log(*n*)) worst case. A single scratch buffer for the whole call is allocated up
//! front and shared by every merge.

use std::cmp::Ordering;
use std::ptr;

use crate::compare::{natural, Compare};
use crate::error::SortError;

sort_impl!("merge_stable");

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
    crate::log_failure("merge_stable", merge_sort(v, &mut compare))
}

fn merge_sort<T, C>(v: &mut [T], compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut buf = alloc_scratch::<T, C::Error>(len)?;
    msort(v, buf.as_mut_ptr(), compare)
}

/// An empty `Vec` with room for `len` elements.
///
/// The buffer keeps a length of zero. Elements only ever pass through its spare capacity, so
/// dropping it frees the memory without dropping any element.
fn alloc_scratch<T, E>(len: usize) -> Result<Vec<T>, SortError<E>> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        tracing::warn!(len, "unable to allocate merge sort scratch buffer");
        return Err(SortError::AllocationFailed { len });
    }

    Ok(buf)
}

fn msort<T, C>(v: &mut [T], buf: *mut T, compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mid = len / 2;
    msort(&mut v[..mid], buf, compare)?;
    msort(&mut v[mid..], buf, compare)?;

    // SAFETY: `buf` has capacity for the whole top-level slice, which is at least `mid`, and is
    // not aliased by `v` or any other live reference.
    unsafe { merge(v, mid, buf, compare) }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`. Equal elements are taken from the left run
/// first.
///
/// # Safety
///
/// `buf` must be valid for writes of `mid` elements and must not overlap `v`.
unsafe fn merge<T, C>(v: &mut [T], mid: usize, buf: *mut T, compare: &mut C) -> Result<(), SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();
    let v_base = v.as_mut_ptr();

    // SAFETY: The left run is moved out into `buf`, which leaves a gap in `v`. `hole` tracks the
    // gap: it always spans exactly as many slots as elements remain in `buf`, so the right run
    // never gets overwritten before it is consumed. Whether the loop finishes, a comparison
    // fails or the comparison panics, dropping `hole` moves the remaining left elements into the
    // gap, leaving every element in `v` exactly once.
    unsafe {
        ptr::copy_nonoverlapping(v_base, buf, mid);

        let mut hole = MergeHole {
            buf,
            left: 0,
            left_end: mid,
            dest: v_base,
            out: 0,
        };
        let mut right = mid;

        while hole.left < hole.left_end && right < len {
            let left_ptr = hole.buf.add(hole.left);
            let right_ptr = v_base.add(right);

            if compare.is_less(&*right_ptr, &*left_ptr)? {
                ptr::copy_nonoverlapping(right_ptr, v_base.add(hole.out), 1);
                right += 1;
            } else {
                ptr::copy_nonoverlapping(left_ptr, v_base.add(hole.out), 1);
                hole.left += 1;
            }

            hole.out += 1;
        }
    }

    Ok(())
}

struct MergeHole<T> {
    buf: *mut T,
    left: usize,
    left_end: usize,
    dest: *mut T,
    out: usize,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `dest[out..out + (left_end - left)]` is the gap described in `merge`.
        unsafe {
            ptr::copy_nonoverlapping(
                self.buf.add(self.left),
                self.dest.add(self.out),
                self.left_end - self.left,
            );
        }
    }
}
