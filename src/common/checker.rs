//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::constants::SIMPLEX_TOLERANCE;
use crate::error::{GentleBoostError, Result};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 || n_feature == 0 {
        return Err(GentleBoostError::EmptySample);
    }

    if sample.target().len() != n_sample {
        return Err(GentleBoostError::InvalidShape {
            expected: format!("{n_sample} labels"),
            got: format!("{} labels", sample.target().len()),
        });
    }

    if let Some(row) = sample.target().iter().position(|y| !y.is_finite()) {
        return Err(GentleBoostError::NonFiniteTarget { row });
    }
    Ok(())
}


/// Check whether the given slice is a probability vector.
#[inline(always)]
pub(crate) fn check_distribution(dist: &[f64]) {
    let sum = dist.iter().sum::<f64>();
    debug_assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(dist[..]) = {sum}"
    );
    debug_assert!(
        dist.iter().all(|d| *d >= 0f64),
        "the distribution has a negative entry"
    );
}
