//! This file provides some common functions
//! such as the bounded sigmoid and the normalization of a distribution.

/// Normalize the given slice so that it sums up to `1`.
/// A slice summing up to zero is left untouched.
#[inline(always)]
pub fn normalize(items: &mut [f64]) {
    let sum = items.iter().sum::<f64>();
    if sum == 0.0 { return; }

    let inv = 1.0 / sum;
    items.iter_mut()
        .for_each(|item| { *item *= inv; });
}

/// Sigmoid function with values in `(-1, 1)`:
/// ```txt
/// sigmoid_epsi(z) = 2 / (1 + exp(-2 * epsilon * z)) - 1
/// ```
#[inline(always)]
pub fn sigmoid_epsi(epsilon: f64, z: f64) -> f64 {
    2.0 / (1.0 + (-2.0 * epsilon * z).exp()) - 1.0
}

/// Returns the sign of `x`. Zero is mapped to `+1`.
#[inline(always)]
pub fn sign(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { -1.0 }
}

/// Weighted squared error `sum_i w[i] * (z[i] - p[i])^2`.
#[inline(always)]
pub fn weighted_squared_error(target: &[f64], predictions: &[f64], dist: &[f64])
    -> f64
{
    target.iter()
        .zip(predictions)
        .zip(dist)
        .map(|((z, p), w)| w * (z - p).powi(2))
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_odd_and_bounded() {
        for &z in &[-50.0, -3.0, -0.5, 0.0, 0.5, 3.0, 50.0] {
            let s = sigmoid_epsi(0.7, z);
            assert!((-1.0..=1.0).contains(&s));
            assert!((s + sigmoid_epsi(0.7, -z)).abs() < 1e-12);
        }
        assert_eq!(sigmoid_epsi(1.0, 0.0), 0.0);
        assert_eq!(sigmoid_epsi(1.0, -1e6), -1.0);
    }

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn normalize_sums_to_one() {
        let mut v = vec![1.0, 3.0, 4.0];
        normalize(&mut v);
        assert_eq!(v, vec![0.125, 0.375, 0.5]);
    }
}
