use serde::{Serialize, Deserialize};

use crate::{Sample, Regressor};
use crate::common::utils::sigmoid_epsi;


/// A 1-D sigmoid unit `x -> sigmoid_epsi(a x_j + b)`.
/// The feature index is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptronRegressor {
    feature_index: usize,
    scale: f64,
    bias: f64,
    epsilon: f64,
}


impl PerceptronRegressor {
    /// Construct a perceptron on the `feature_index`-th feature.
    #[inline]
    pub fn new(feature_index: usize, scale: f64, bias: f64, epsilon: f64)
        -> Self
    {
        Self { feature_index, scale, bias, epsilon }
    }


    /// Returns the same unit evaluated with another sigmoid slope.
    /// Prediction may use a slope different from training.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }


    /// The 0-based index of the feature this unit looks at.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// Slope `a`.
    pub fn scale(&self) -> f64 {
        self.scale
    }


    /// Bias `b`.
    pub fn bias(&self) -> f64 {
        self.bias
    }


    /// Sigmoid slope.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }


    /// Evaluates the unit on a single feature value.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        sigmoid_epsi(self.epsilon, self.scale * x + self.bias)
    }
}


impl Regressor for PerceptronRegressor {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.evaluate(sample.value(self.feature_index, row))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_sharpens_the_sigmoid() {
        let h = PerceptronRegressor::new(0, 1.0, 0.0, 1.0);
        let sharp = h.with_epsilon(10.0);
        assert_eq!(h.evaluate(0.0), 0.0);
        assert!(sharp.evaluate(0.5) > h.evaluate(0.5));
        assert!(sharp.evaluate(0.5) < 1.0);
    }
}
