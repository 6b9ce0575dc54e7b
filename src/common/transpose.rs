use crate::error::{GentleBoostError, Result};

/// Transposes a row-major `n_rows x n_cols` matrix
/// into a row-major `n_cols x n_rows` matrix.
///
/// A sample-major buffer (`n_sample` rows of `n_feature` values)
/// becomes feature-major (`n_feature` rows of `n_sample` values),
/// and vice versa.
pub fn transpose(src: &[f64], n_rows: usize, n_cols: usize)
    -> Result<Vec<f64>>
{
    let expected = n_rows.checked_mul(n_cols)
        .ok_or_else(|| GentleBoostError::InvalidShape {
            expected: "a matrix whose size fits in memory".to_string(),
            got: format!("{n_rows} x {n_cols}"),
        })?;
    if src.len() != expected {
        return Err(GentleBoostError::InvalidShape {
            expected: format!("{n_rows} x {n_cols} = {expected} values"),
            got: format!("{} values", src.len()),
        });
    }

    let mut dst = vec![0f64; expected];
    src.chunks_exact(n_cols.max(1))
        .take(n_rows)
        .enumerate()
        .for_each(|(i, row)| {
            row.iter()
                .enumerate()
                .for_each(|(j, v)| { dst[j * n_rows + i] = *v; });
        });
    Ok(dst)
}
