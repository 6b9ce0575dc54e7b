//! Provides the decision stump weak learner.
use rayon::prelude::*;

use crate::{
    Sample,
    WeakLearner,
    common::sort_with_index,
    constants::HUGE,
};
use super::DecisionStumpRegressor;


/// Values of one feature in ascending order,
/// together with the example each value comes from.
#[derive(Debug, Clone)]
struct SortedFeature {
    vals: Vec<f64>,
    index: Vec<usize>,
}


/// The struct `DecisionStump` generates a [`DecisionStumpRegressor`]
/// for each call of [`WeakLearner::produce`].
///
/// Every feature is sorted once in [`DecisionStump::init`];
/// each call of `produce` is then a single linear scan per feature.
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
/// let stump = DecisionStump::init(&sample);
/// let h = stump.produce(&sample, &target, &dist);
/// let predictions = h.predict_all(&sample);
/// ```
pub struct DecisionStump {
    sorted: Vec<SortedFeature>,
}


impl DecisionStump {
    /// Initializes a `DecisionStump` by sorting every feature of `sample`.
    pub fn init(sample: &Sample) -> Self {
        let sorted = sample.features()
            .par_iter()
            .map(|feature| {
                let mut vals = feature.vals().to_vec();
                let index = sort_with_index(&mut vals[..]);
                SortedFeature { vals, index }
            })
            .collect::<Vec<_>>();

        Self { sorted }
    }


    /// Returns the best stump and its weighted squared error
    /// `sum_i dist[i] * (target[i] - h(x_i))^2`.
    ///
    /// Ties go to the earlier feature, then to the earlier cut.
    pub fn best_stump(&self, target: &[f64], dist: &[f64])
        -> (f64, DecisionStumpRegressor)
    {
        let init = (HUGE, DecisionStumpRegressor::new(0, 0.0, 0.0, 0.0));

        self.sorted.par_iter()
            .enumerate()
            .map(|(j, feature)| best_stump_at(j, feature, target, dist))
            .collect::<Vec<_>>()
            .into_iter()
            .fold(init, |best, cand| if cand.0 < best.0 { cand } else { best })
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = DecisionStumpRegressor;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let n_feature = self.sorted.len();
        let n_sample = self.sorted.first()
            .map(|feat| feat.vals.len())
            .unwrap_or(0);
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
        ]);
        Some(info)
    }


    fn produce(&self, _sample: &Sample, target: &[f64], dist: &[f64])
        -> Self::Hypothesis
    {
        let (error, h) = self.best_stump(target, dist);
        tracing::trace!(
            feature = h.feature_index(),
            threshold = h.threshold(),
            error,
            "decision stump"
        );
        h
    }
}


/// Scans the cuts of one feature in ascending order.
///
/// With the running sums over the examples at or below the cut
/// `sw = sum w`, `syw = sum z w`, and the column totals
/// `eyw = sum z w`, `swyy = sum z^2 w`,
/// the least-squares optimum of `a [x > th] + b` is
/// ```txt
/// b = syw / sw
/// a = (eyw - syw) / (1 - sw) - b
/// ```
/// and its error is
/// ```txt
/// swyy - 2 a (eyw - syw) - 2 b eyw + (a^2 + 2 a b) (1 - sw) + b^2.
/// ```
fn best_stump_at(
    feature_index: usize,
    feature: &SortedFeature,
    target: &[f64],
    dist: &[f64],
) -> (f64, DecisionStumpRegressor)
{
    let SortedFeature { vals, index } = feature;
    let n_sample = vals.len();

    let (eyw, swyy) = index.iter()
        .fold((0f64, 0f64), |(eyw, swyy), &i| {
            let zw = target[i] * dist[i];
            (eyw + zw, swyy + target[i] * zw)
        });

    let mut best_error = HUGE;
    let mut best = DecisionStumpRegressor::new(feature_index, 0.0, 0.0, 0.0);

    let mut sw = 0f64;
    let mut syw = 0f64;
    for (k, &i) in index.iter().enumerate() {
        sw  += dist[i];
        syw += target[i] * dist[i];

        // No threshold separates equal values.
        if k + 1 < n_sample && vals[k] == vals[k + 1] { continue; }

        let b = syw / sw;
        let a = if sw != 1.0 {
            (eyw - syw) / (1.0 - sw) - b
        } else {
            (eyw - syw) - b
        };

        let error = swyy
            - 2.0 * a * (eyw - syw)
            - 2.0 * b * eyw
            + (a * a + 2.0 * a * b) * (1.0 - sw)
            + b * b;

        if error < best_error {
            // The last cut keeps the largest value itself as threshold.
            let threshold = if k + 1 < n_sample {
                (vals[k] + vals[k + 1]) / 2.0
            } else {
                vals[k]
            };
            best_error = error;
            best = DecisionStumpRegressor::new(feature_index, threshold, a, b);
        }
    }

    (best_error, best)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Regressor;

    fn sample(columns: Vec<Vec<f64>>) -> Sample {
        Sample::from_columns(columns).unwrap()
    }

    #[test]
    fn separable_feature_has_zero_error() {
        // Feature 0 does not separate, feature 1 does at 0.5.
        let s = sample(vec![
            vec![0.3, 0.1, 0.2, 0.4],
            vec![0.0, 1.0, 0.0, 1.0],
        ]);
        let target = [-1.0, 1.0, -1.0, 1.0];
        let dist = [0.25; 4];

        let (error, h) = DecisionStump::init(&s).best_stump(&target, &dist);
        assert!(error.abs() < 1e-12, "error = {error}");
        assert_eq!(h.feature_index(), 1);
        assert_eq!(h.threshold(), 0.5);
        assert_eq!(h.predict_all(&s), target.to_vec());
    }

    #[test]
    fn constant_feature_fits_the_mean() {
        let s = sample(vec![vec![2.0; 4]]);
        let target = [1.0, 1.0, 1.0, -1.0];
        let dist = [0.25; 4];

        let (error, h) = DecisionStump::init(&s).best_stump(&target, &dist);
        // The best constant is the weighted mean 0.5,
        // so the error is the weighted variance 0.75.
        assert!((error - 0.75).abs() < 1e-12, "error = {error}");
        assert!((h.bias() - 0.5).abs() < 1e-12);
        let p = h.predict_all(&s);
        assert!(p.iter().all(|v| (v - 0.5).abs() < 1e-12));
    }

    #[test]
    fn tie_goes_to_the_first_feature() {
        let col = vec![0.0, 0.0, 1.0, 1.0];
        let s = sample(vec![col.clone(), col]);
        let target = [-1.0, -1.0, 1.0, 1.0];
        let dist = [0.25; 4];

        let (_, h) = DecisionStump::init(&s).best_stump(&target, &dist);
        assert_eq!(h.feature_index(), 0);
    }

    #[test]
    fn closed_form_error_matches_direct_error() {
        let s = sample(vec![
            vec![0.5, -1.0, 3.0, 2.5, 0.0, 1.5],
            vec![9.0, 8.0, 1.0, 3.0, 2.0, 7.0],
        ]);
        let target = [1.0, -1.0, 1.0, -1.0, -1.0, 1.0];
        let dist = [0.1, 0.2, 0.05, 0.3, 0.15, 0.2];

        let (error, h) = DecisionStump::init(&s).best_stump(&target, &dist);
        let p = h.predict_all(&s);
        let direct = crate::common::utils::weighted_squared_error(
            &target, &p, &dist
        );
        assert!((error - direct).abs() < 1e-9, "{error} vs {direct}");
    }
}
