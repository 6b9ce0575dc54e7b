//! Defines the 1-D sigmoid perceptron weak learner.
pub mod perceptron_algorithm;
pub mod perceptron_regressor;

pub use perceptron_algorithm::Perceptron;
pub use perceptron_regressor::PerceptronRegressor;
