use crate::Sample;


/// A trait that defines the behavor of real-valued hypotheses.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the value of the `row`-th example of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the values of all examples in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64>
    {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
