use crate::{Sample, Regressor};


/// The objective value reported by [`Logger`](super::Logger).
pub trait LoggingObjective {
    /// Name of the objective.
    fn name(&self) -> String;

    /// Objective value of `f` on `sample`.
    fn objective_value<H: Regressor>(&self, sample: &Sample, f: &H) -> f64;
}


/// The exponential criterion `mean_i exp(-y_i f(x_i))`
/// that Gentle AdaBoost decreases by Newton steps.
/// Labels must be `-1` or `+1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialObjective;


impl LoggingObjective for ExponentialObjective {
    fn name(&self) -> String {
        "Exponential loss".to_string()
    }

    fn objective_value<H: Regressor>(&self, sample: &Sample, f: &H) -> f64 {
        let n_sample = sample.shape().0 as f64;
        f.predict_all(sample)
            .into_iter()
            .zip(sample.target())
            .map(|(fx, y)| (-y * fx).exp())
            .sum::<f64>()
            / n_sample
    }
}
