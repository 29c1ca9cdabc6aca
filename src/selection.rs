use crate::compare::Compare;
use crate::error::SortError;

/// Finds the minimum and maximum of `v` together, using at most `ceil(3n / 2) - 2` comparisons.
///
/// Elements are consumed in pairs: the pair is ordered first, then only its smaller element is
/// tested against the running minimum and only its larger element against the running maximum.
/// For a single element both references point to it.
pub fn min_max<'a, T, E, F>(v: &'a [T], mut compare: F) -> Result<(&'a T, &'a T), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    min_max_impl(v, &mut compare)
}

/// [`min_max`] over `v[first..last]`.
pub fn min_max_range<'a, T, E, F>(
    v: &'a [T],
    first: usize,
    last: usize,
    mut compare: F,
) -> Result<(&'a T, &'a T), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
{
    let range = crate::check_range::<E>(v.len(), first, last)?;
    min_max_impl(&v[range], &mut compare)
}

fn min_max_impl<'a, T, C>(v: &'a [T], compare: &mut C) -> Result<(&'a T, &'a T), SortError<C::Error>>
where
    C: Compare<T>,
{
    let len = v.len();

    if len == 0 {
        return Err(SortError::EmptyInput);
    }

    let (mut min, mut max, start) = if len % 2 == 1 {
        (&v[0], &v[0], 1)
    } else if compare.is_less(&v[1], &v[0])? {
        (&v[1], &v[0], 2)
    } else {
        (&v[0], &v[1], 2)
    };

    for pair in v[start..].chunks_exact(2) {
        let (x, y) = (&pair[0], &pair[1]);
        let (small, large) = if compare.is_less(y, x)? { (y, x) } else { (x, y) };

        if compare.is_less(small, min)? {
            min = small;
        }
        if compare.is_greater(large, max)? {
            max = large;
        }
    }

    Ok((min, max))
}
