//! Provides the 1-D sigmoid perceptron weak learner.
use rayon::prelude::*;

use std::sync::Mutex;

use crate::{
    Sample,
    WeakLearner,
    common::{RandomSource, utils},
    constants::{
        DEFAULT_EPSILON,
        DEFAULT_LAMBDA,
        DEFAULT_MAX_ITER,
        HUGE,
    },
};
use super::PerceptronRegressor;


/// The struct `Perceptron` fits, on each feature,
/// `h(x) = sigmoid_epsi(a x + b)` by online gradient descent,
/// and returns the feature with the smallest weighted squared error.
///
/// The gradient steps ignore the distribution over examples;
/// the distribution only decides which feature wins.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let n_sample = sample.shape().0;
///
/// let target = sample.target().to_vec();
/// let dist = vec![1.0 / n_sample as f64; n_sample];
///
/// let perceptron = Perceptron::init(&sample)
///     .epsilon(1.0)
///     .lambda(1e-3)
///     .max_iter(100)
///     .seed(1234);
/// let h = perceptron.produce(&sample, &target, &dist);
/// ```
pub struct Perceptron {
    n_sample: usize,
    n_feature: usize,
    epsilon: f64,
    lambda: f64,
    max_iter: usize,
    rng: Mutex<RandomSource>,
}


impl Perceptron {
    /// Initializes a `Perceptron` with the default parameters
    /// and a random source seeded by the clock.
    pub fn init(sample: &Sample) -> Self {
        let (n_sample, n_feature) = sample.shape();
        Self {
            n_sample,
            n_feature,
            epsilon: DEFAULT_EPSILON,
            lambda: DEFAULT_LAMBDA,
            max_iter: DEFAULT_MAX_ITER,
            rng: Mutex::new(RandomSource::from_time()),
        }
    }


    /// Set the slope `epsilon` of the sigmoid.
    /// Default is `1.0`.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        assert!(epsilon > 0.0);
        self.epsilon = epsilon;
        self
    }


    /// Set the learning rate.
    /// Default is `1e-3`.
    pub fn lambda(mut self, lambda: f64) -> Self {
        assert!(lambda > 0.0);
        self.lambda = lambda;
        self
    }


    /// Set the number of passes over the examples.
    /// Default is `100`.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        assert!(max_iter > 0);
        self.max_iter = max_iter;
        self
    }


    /// Seed the random source that draws the initial parameters.
    pub fn seed(self, seed: u64) -> Self {
        Self { rng: Mutex::new(RandomSource::seed_from_u64(seed)), ..self }
    }


    /// Returns the best perceptron and its weighted squared error.
    /// Ties go to the earlier feature.
    pub fn best_fit(&self, sample: &Sample, target: &[f64], dist: &[f64])
        -> (f64, PerceptronRegressor)
    {
        // The draws are made in feature order
        // so that a seed fixes the result.
        let inits = {
            let mut rng = self.rng.lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            (0..self.n_feature).map(|j| {
                    let a = sample.value(j, rng.next_index(self.n_sample));
                    let b = sample.value(j, rng.next_index(self.n_sample));
                    (a, b)
                })
                .collect::<Vec<_>>()
        };

        let params = Params {
            epsilon: self.epsilon,
            lambda: self.lambda,
            max_iter: self.max_iter,
        };
        let init = (HUGE, PerceptronRegressor::new(0, 0.0, 0.0, self.epsilon));

        inits.into_par_iter()
            .enumerate()
            .map(|(j, ab)| {
                let xs = sample.features()[j].vals();
                fit_feature(j, xs, ab, target, dist, &params)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .fold(init, |best, cand| if cand.0 < best.0 { cand } else { best })
    }
}


impl WeakLearner for Perceptron {
    type Hypothesis = PerceptronRegressor;


    fn name(&self) -> &str {
        "Perceptron"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of examples", format!("{}", self.n_sample)),
            ("# of features", format!("{}", self.n_feature)),
            ("Epsilon", format!("{}", self.epsilon)),
            ("Learning rate", format!("{}", self.lambda)),
            ("Max. iter.", format!("{}", self.max_iter)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, target: &[f64], dist: &[f64])
        -> Self::Hypothesis
    {
        let (error, h) = self.best_fit(sample, target, dist);
        tracing::trace!(
            feature = h.feature_index(),
            scale = h.scale(),
            bias = h.bias(),
            error,
            "perceptron"
        );
        h
    }
}


struct Params {
    epsilon: f64,
    lambda: f64,
    max_iter: usize,
}


fn fit_feature(
    feature_index: usize,
    xs: &[f64],
    (mut a, mut b): (f64, f64),
    target: &[f64],
    dist: &[f64],
    params: &Params,
) -> (f64, PerceptronRegressor)
{
    let Params { epsilon, lambda, max_iter } = *params;

    for _ in 0..max_iter {
        for (&x, &z) in xs.iter().zip(target) {
            let fx = utils::sigmoid_epsi(epsilon, a * x + b);
            let delta = lambda * (z - fx) * epsilon * (1.0 - fx * fx);
            a += delta * x;
            b += delta;
        }
    }

    let h = PerceptronRegressor::new(feature_index, a, b, epsilon);
    let error = xs.iter()
        .zip(target)
        .zip(dist)
        .map(|((&x, &z), &w)| w * (z - h.evaluate(x)).powi(2))
        .sum::<f64>();

    (error, h)
}
