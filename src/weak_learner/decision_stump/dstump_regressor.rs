use serde::{Serialize, Deserialize};

use crate::{Sample, Regressor};


/// A regression stump `x -> a [x_j > th] + b`.
/// The feature index is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionStumpRegressor {
    feature_index: usize,
    threshold: f64,
    scale: f64,
    bias: f64,
}


impl DecisionStumpRegressor {
    /// Construct a stump on the `feature_index`-th feature.
    #[inline]
    pub fn new(feature_index: usize, threshold: f64, scale: f64, bias: f64)
        -> Self
    {
        Self { feature_index, threshold, scale, bias }
    }


    /// The 0-based index of the feature this stump looks at.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// Threshold `th`.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Slope `a`, added when the value exceeds the threshold.
    pub fn scale(&self) -> f64 {
        self.scale
    }


    /// Bias `b`.
    pub fn bias(&self) -> f64 {
        self.bias
    }


    /// Evaluates the stump on a single feature value.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let step = if x > self.threshold { 1.0 } else { 0.0 };
        self.scale * step + self.bias
    }
}


impl Regressor for DecisionStumpRegressor {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.evaluate(sample.value(self.feature_index, row))
    }
}
