use serde::{Serialize, Deserialize};

use super::LabelSet;


/// Output of [`GentleBoostModel::predict`](super::GentleBoostModel::predict).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// One estimate per example:
    /// `-1` or `+1` for a binary model, the class index otherwise.
    pub estimates: Vec<f64>,
    /// Additive scores, one row per class and one column per example.
    pub scores: Vec<Vec<f64>>,
}


impl Prediction {
    /// Number of examples.
    pub fn len(&self) -> usize {
        self.estimates.len()
    }


    /// Returns `true` if no example was predicted.
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }


    /// Map the estimates back to the training labels.
    pub fn decode(&self, labels: &LabelSet) -> Vec<f64> {
        self.estimates.iter()
            .map(|&e| labels.decode(e))
            .collect()
    }
}
