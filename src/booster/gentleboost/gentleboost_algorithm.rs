//! Provides [`GentleBoost`] by Friedman, Hastie & Tibshirani, 2000.
use rayon::prelude::*;

use crate::{
    Booster,
    WeakLearner,
    Regressor,
    AdditiveModel,
    Sample,

    common::{checker, utils},
    constants::DEFAULT_ROUNDS,
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines `GentleBoost`, the Gentle AdaBoost of
/// [Additive logistic regression: a statistical view of boosting](https://doi.org/10.1214/aos/1016218223)
/// by Jerome Friedman, Trevor Hastie, and Robert Tibshirani.
///
/// `GentleBoost` boosts one binary problem.
/// Each round, the weak learner fits the target `z` in `{-1, +1}`
/// by weighted least squares, and the weight of example `i`
/// is multiplied by `exp(-z[i] h(x_i))`.
/// The result is the unweighted sum of the hypotheses.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Run 50 rounds of Gentle AdaBoost with decision stumps.
/// let mut booster = GentleBoost::init(&sample)
///     .rounds(50);
/// let weak_learner = DecisionStump::init(&sample);
///
/// let f: AdditiveModel<DecisionStumpRegressor> = booster.run(&weak_learner);
///
/// // The sign of the score is the predicted label.
/// let predictions = f.predict_all(&sample)
///     .into_iter()
///     .map(|fx| if fx >= 0.0 { 1.0 } else { -1.0 })
///     .collect::<Vec<_>>();
/// ```
pub struct GentleBoost<'a, H> {
    // Training sample
    sample: &'a Sample,

    // The binary target `z[i]` in `{-1, +1}`.
    target: Vec<f64>,

    // Distribution on sample.
    dist: Vec<f64>,

    // Hypotheses obtained by the weak learner.
    hypotheses: Vec<H>,

    // Number of boosting rounds.
    n_rounds: usize,

    // Weighted squared error of the latest hypothesis.
    last_error: Option<f64>,
}


impl<'a, H> GentleBoost<'a, H> {
    /// Initialize the `GentleBoost`.
    /// The labels of `sample` are used as the target,
    /// so they must be `-1` or `+1`.
    pub fn init(sample: &'a Sample) -> Self {
        let target = sample.target().to_vec();
        Self::init_with_target(sample, target)
    }


    /// Initialize the `GentleBoost` with an explicit binary target.
    /// One-against-all training passes the target of each class here
    /// instead of copying the sample.
    pub fn init_with_target(sample: &'a Sample, target: Vec<f64>) -> Self {
        let n_sample = sample.shape().0;
        assert_eq!(
            target.len(), n_sample,
            "the target has {} entries for {n_sample} examples",
            target.len(),
        );

        let uni = 1.0 / n_sample as f64;
        Self {
            sample,
            target,
            dist: vec![uni; n_sample],
            hypotheses: Vec::new(),
            n_rounds: DEFAULT_ROUNDS,
            last_error: None,
        }
    }


    /// Set the number of boosting rounds.
    /// Default is `100`.
    pub fn rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// Returns the current distribution over the examples.
    pub fn dist(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the binary target.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }
}


impl<H> Booster<H> for GentleBoost<'_, H>
    where H: Regressor + Clone,
{
    type Output = AdditiveModel<H>;


    fn name(&self) -> &str {
        "Gentle AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of rounds", format!("{}", self.n_rounds)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.hypotheses = Vec::with_capacity(self.n_rounds);
        self.last_error = None;
    }


    fn boost<W>(&mut self, weak_learner: &W, iteration: usize)
        -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_rounds < iteration {
            return ControlFlow::Break(self.n_rounds);
        }

        let h = weak_learner.produce(self.sample, &self.target, &self.dist);
        let predictions = h.predict_all(self.sample);

        let error = utils::weighted_squared_error(
            &self.target, &predictions, &self.dist
        );
        tracing::debug!(round = iteration, error, "gentleboost");

        // w[i] <- w[i] exp(-z[i] h(x_i))
        self.dist.par_iter_mut()
            .zip(&self.target[..])
            .zip(predictions)
            .for_each(|((d, z), hx)| { *d *= (-z * hx).exp(); });
        utils::normalize(&mut self.dist[..]);
        checker::check_distribution(&self.dist[..]);

        self.hypotheses.push(h);
        self.last_error = Some(error);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        AdditiveModel::from_slice(&self.hypotheses[..])
    }
}


impl<H> CurrentHypothesis for GentleBoost<'_, H>
    where H: Regressor + Clone,
{
    type Output = AdditiveModel<H>;

    fn current_hypothesis(&self) -> Self::Output {
        AdditiveModel::from_slice(&self.hypotheses[..])
    }

    fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }

    fn last_weighted_error(&self) -> Option<f64> {
        self.last_error
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecisionStump;

    #[test]
    fn runs_the_requested_rounds() {
        let sample = Sample::from_columns(vec![vec![0.0, 1.0, 2.0, 3.0]])
            .unwrap()
            .set_target_values(vec![-1.0, -1.0, 1.0, 1.0])
            .unwrap();
        let mut booster = GentleBoost::init(&sample).rounds(7);
        let f = booster.run(&DecisionStump::init(&sample));
        assert_eq!(f.len(), 7);

        let sum = booster.dist().iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
