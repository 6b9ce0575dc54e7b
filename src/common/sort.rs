//! Sorting utilities.
//! Equal values may end up in any relative order.

/// Sorts `values` in ascending order, in place.
#[inline]
pub fn sort(values: &mut [f64]) {
    values.sort_unstable_by(|a, b| a.total_cmp(b));
}

/// Sorts `values` in ascending order, in place,
/// and returns the permutation `ix` such that
/// `sorted[i] == original[ix[i]]`.
pub fn sort_with_index(values: &mut [f64]) -> Vec<usize> {
    let mut pairs = values.iter()
        .copied()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect::<Vec<(f64, usize)>>();

    pairs.sort_unstable_by(|(a, _), (b, _)| a.total_cmp(b));

    values.iter_mut()
        .zip(&pairs)
        .for_each(|(v, (s, _))| { *v = *s; });

    pairs.into_iter()
        .map(|(_, i)| i)
        .collect()
}
