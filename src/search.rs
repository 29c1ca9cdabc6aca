use crate::compare::Compare;
use crate::error::SortError;

/// Returns the rightmost insertion point of `value` in `v`: every element of `v[..idx]` is `<=
/// value` and every element of `v[idx..]` is `> value`.
///
/// `v` must be partitioned with respect to `value`, which is in particular the case if it is
/// sorted. Runs of elements equal to `value` are stepped over linearly, so inserting at the
/// returned index keeps equal elements in their original order.
pub fn binary_search<T, C>(v: &[T], value: &T, compare: &mut C) -> Result<usize, SortError<C::Error>>
where
    C: Compare<T>,
{
    // Invariant: `v[..first]` is `<= value` and `v[last..]` is `> value`. Once the two meet there
    // is nothing left to look at, in particular an empty `v` needs no comparison.
    let mut first = 0;
    let mut last = v.len();

    while first < last {
        let mut mid = first + (last - first) / 2;

        match compare.ordering(&v[mid], value)? {
            core::cmp::Ordering::Less => first = mid + 1,
            core::cmp::Ordering::Greater => last = mid,
            core::cmp::Ordering::Equal => {
                mid += 1;
                while mid < last && compare.is_eq(&v[mid], value)? {
                    mid += 1;
                }

                first = mid;
            }
        }
    }

    Ok(first)
}

/// [`binary_search`] over `v[first..last]`, the result is an absolute index in `first..=last`.
pub fn binary_search_range<T, E, F>(
    v: &[T],
    value: &T,
    first: usize,
    last: usize,
    mut compare: F,
) -> Result<usize, SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    let range = crate::check_range::<E>(v.len(), first, last)?;
    let idx = binary_search(&v[range], value, &mut compare)?;

    Ok(first + idx)
}
