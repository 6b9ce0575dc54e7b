use serde::{Serialize, Deserialize};
use crate::{
    Regressor,
    Sample,
};


/// The additive model `f(x) = h_1(x) + h_2(x) + ... + h_T(x)`
/// that Gentle AdaBoost builds for one class.
/// Unlike a weighted majority vote, every hypothesis has weight one;
/// the scale lives inside the hypotheses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdditiveModel<H> {
    hypotheses: Vec<H>,
}


impl<H> AdditiveModel<H> {
    /// Construct a new `AdditiveModel` from the given hypotheses.
    #[inline]
    pub fn new(hypotheses: Vec<H>) -> Self {
        Self { hypotheses }
    }


    /// Returns the hypotheses in the order they were found.
    #[inline]
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the model into its hypotheses.
    #[inline]
    pub fn decompose(self) -> Vec<H> {
        self.hypotheses
    }
}


impl<H: Clone> AdditiveModel<H> {
    /// Construct a new `AdditiveModel` from the given slice.
    #[inline]
    pub fn from_slice(hypotheses: &[H]) -> Self {
        Self { hypotheses: hypotheses.to_vec() }
    }
}


impl<H> Regressor for AdditiveModel<H>
    where H: Regressor,
{
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.hypotheses.iter()
            .map(|h| h.predict(sample, row))
            .sum::<f64>()
    }
}
