//! Loss functions for [`Logger`](super::Logger).
//! Labels must be `-1` or `+1`.
use crate::{Sample, Regressor};
use crate::common::utils::sign;


/// Fraction of examples whose label differs from `sign(f(x))`.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Regressor
{
    let n_sample = sample.shape().0 as f64;

    f.predict_all(sample)
        .into_iter()
        .zip(sample.target())
        .map(|(fx, &y)| if sign(fx) != y { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample
}


/// Mean of `(y - f(x))^2`.
pub fn squared_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Regressor
{
    let n_sample = sample.shape().0 as f64;

    f.predict_all(sample)
        .into_iter()
        .zip(sample.target())
        .map(|(fx, &y)| (y - fx).powi(2))
        .sum::<f64>()
        / n_sample
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdditiveModel, DecisionStumpRegressor};

    #[test]
    fn losses_of_a_single_stump() {
        let sample = Sample::from_columns(vec![vec![0.0, 1.0, 2.0, 3.0]])
            .unwrap()
            .set_target_values(vec![-1.0, -1.0, 1.0, -1.0])
            .unwrap();
        let f = AdditiveModel::new(vec![
            DecisionStumpRegressor::new(0, 1.5, 2.0, -1.0),
        ]);
        assert_eq!(zero_one_loss(&sample, &f), 0.25);
        assert_eq!(squared_loss(&sample, &f), 1.0);
    }
}
