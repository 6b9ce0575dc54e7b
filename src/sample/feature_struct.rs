use std::ops::Index;
use std::slice::Iter;

use crate::constants::BUFFER_SIZE;

/// A named column of feature values, one value per example.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    vals: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }


    /// Construct a feature from its values.
    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Returns the name of the feature.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.vals.push(x);
    }


    pub(crate) fn into_vals(self) -> Vec<f64> {
        self.vals
    }


    /// Returns the values as a slice.
    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }


    /// Iterates over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.vals.iter()
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if the feature has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
