use gentleboost::prelude::*;
use gentleboost::LabelSet;
use gentleboost::research::{
    CurrentHypothesis,
    ExponentialObjective,
    LoggingObjective,
};

/// Tests for `GentleBoost` and `GentleBoostModel`.
#[cfg(test)]
pub mod tests {
    use super::*;

    /// 60 examples on `[0, 1)^2`, positive above the anti-diagonal.
    fn diagonal() -> Sample {
        let n_sample = 60;
        let x1 = (0..n_sample)
            .map(|i| ((i * 37) % 101) as f64 / 101.0)
            .collect::<Vec<_>>();
        let x2 = (0..n_sample)
            .map(|i| ((i * 53) % 97) as f64 / 97.0)
            .collect::<Vec<_>>();
        let y = x1.iter()
            .zip(&x2)
            .map(|(a, b)| if a + b > 1.0 { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        Sample::from_columns(vec![x1, x2])
            .unwrap()
            .set_target_values(y)
            .unwrap()
    }

    #[test]
    fn distribution_stays_on_the_simplex() {
        let sample = diagonal();
        let n_rounds = 20;
        let mut booster = GentleBoost::<DecisionStumpRegressor>::init(&sample)
            .rounds(n_rounds);
        let wl = DecisionStump::init(&sample);

        booster.preprocess();
        for it in 1..=n_rounds {
            assert!(booster.boost(&wl, it).is_continue());
            let dist = booster.dist();
            let sum = dist.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1e-9, "round {it}: sum = {sum}");
            assert!(dist.iter().all(|&d| d >= 0.0));
        }
        assert!(booster.boost(&wl, n_rounds + 1).is_break());
        assert_eq!(booster.postprocess().len(), n_rounds);
    }

    #[test]
    fn exponential_criterion_never_increases() {
        let sample = diagonal();
        let mut booster = GentleBoost::<DecisionStumpRegressor>::init(&sample)
            .rounds(30);
        let wl = DecisionStump::init(&sample);

        booster.preprocess();
        let mut prev = ExponentialObjective
            .objective_value(&sample, &booster.current_hypothesis());
        assert_eq!(prev, 1.0);
        for it in 1..=30 {
            let _ = booster.boost(&wl, it);
            let obj = ExponentialObjective
                .objective_value(&sample, &booster.current_hypothesis());
            assert!(obj <= prev + 1e-12, "round {it}: {prev} -> {obj}");
            prev = obj;
        }
        assert!(prev < 1.0);
    }

    #[test]
    fn separable_sample_has_zero_training_error() {
        let x = vec![0.1, 0.7, 0.3, 0.9, 0.2, 0.8];
        let noise = vec![5.0, 1.0, 4.0, 2.0, 3.0, 6.0];
        let y = vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0];
        let sample = Sample::from_columns(vec![noise, x])
            .unwrap()
            .set_target_values(y.clone())
            .unwrap();

        let model = GentleBoostModel::fit(&sample, 5, &Options::default())
            .unwrap();
        let prediction = model.predict(&sample).unwrap();
        assert_eq!(prediction.estimates, y);
        assert_eq!(model.n_rounds(), 5);
        assert_eq!(model.n_class(), 1);
    }

    #[test]
    fn stump_training_is_deterministic() {
        let sample = diagonal();
        let m1 = GentleBoostModel::fit(&sample, 15, &Options::default().seed(1))
            .unwrap();
        let m2 = GentleBoostModel::fit(&sample, 15, &Options::default().seed(2))
            .unwrap();
        let m3 = GentleBoostModel::fit(&sample, 15, &Options::default())
            .unwrap();
        assert_eq!(m1, m2);
        assert_eq!(m1, m3);
    }

    #[test]
    fn zero_one_labels_train_like_signed_labels() {
        let signed = diagonal();
        let y01 = signed.target()
            .iter()
            .map(|&y| if y > 0.0 { 1.0 } else { 0.0 })
            .collect::<Vec<_>>();
        let columns = signed.features()
            .iter()
            .map(|f| f.vals().to_vec())
            .collect::<Vec<_>>();
        let binary = Sample::from_columns(columns)
            .unwrap()
            .set_target_values(y01)
            .unwrap();

        let stump = Options::default();
        let m1 = GentleBoostModel::fit(&signed, 10, &stump).unwrap();
        let m2 = GentleBoostModel::fit(&binary, 10, &stump).unwrap();
        assert_eq!(m1.ensemble(), m2.ensemble());
        assert_eq!(m1.to_arrays(), m2.to_arrays());

        let perceptron = Options::default()
            .kind(WeakLearnerKind::Perceptron)
            .max_iter(20)
            .seed(99);
        let m1 = GentleBoostModel::fit(&signed, 3, &perceptron).unwrap();
        let m2 = GentleBoostModel::fit(&binary, 3, &perceptron).unwrap();
        assert_eq!(m1.ensemble(), m2.ensemble());

        let decoded = m2.predict(&binary).unwrap().decode(m2.labels());
        assert!(decoded.iter().all(|&y| y == 0.0 || y == 1.0));
    }

    #[test]
    fn one_against_all() {
        let x = (0..9).map(|i| i as f64).collect::<Vec<_>>();
        let y = vec![10.0, 10.0, 10.0, 20.0, 20.0, 20.0, 30.0, 30.0, 30.0];
        let sample = Sample::from_columns(vec![x])
            .unwrap()
            .set_target_values(y.clone())
            .unwrap();

        let model = GentleBoostModel::fit(&sample, 5, &Options::default())
            .unwrap();
        assert_eq!(model.n_class(), 3);

        let prediction = model.predict(&sample).unwrap();
        assert_eq!(prediction.scores.len(), 3);
        assert_eq!(
            prediction.estimates,
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0]
        );
        assert_eq!(prediction.decode(model.labels()), y);
    }

    #[test]
    fn first_stump_of_a_later_class_separates_it() {
        // Feature 1 isolates label 1 above 0.8, feature 0 interleaves it.
        let f0 = vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0];
        let f1 = vec![0.2, 0.8, 5.0, 6.0, 0.4, 0.6];
        let y = vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let sample = Sample::from_columns(vec![f0, f1.clone()])
            .unwrap()
            .set_target_values(y.clone())
            .unwrap();

        let labels = LabelSet::from_target(&y);
        let z = labels.binarize(&y, 1);
        assert_eq!(z, vec![-1.0, -1.0, 1.0, 1.0, -1.0, -1.0]);

        let dist = vec![1.0 / 6.0; 6];
        let (error, h) = DecisionStump::init(&sample).best_stump(&z, &dist);
        assert!(error.abs() < 1e-12, "error = {error}");
        assert_eq!(h.feature_index(), 1);
        assert!(0.8 < h.threshold() && h.threshold() < 5.0);

        // With one round, entry `c` of the arrays is the stump of class `c`.
        let model = GentleBoostModel::fit(&sample, 1, &Options::default())
            .unwrap();
        let arrays = model.to_arrays();
        assert_eq!(arrays.n_class, 3);
        assert_eq!(arrays.feature_idx[1], 2);
        let th = arrays.th[1];
        assert!(0.8 < th && th < 5.0, "threshold = {th}");
        let fitted = f1.iter()
            .map(|&x| arrays.a[1] * if x > th { 1.0 } else { 0.0 } + arrays.b[1])
            .collect::<Vec<_>>();
        for (hx, z) in fitted.iter().zip(&z) {
            assert!((hx - z).abs() < 1e-12);
        }
    }

    #[test]
    fn single_label_sample() {
        let sample = Sample::from_columns(vec![vec![1.0, 2.0, 3.0]])
            .unwrap()
            .set_target_values(vec![7.0; 3])
            .unwrap();
        let model = GentleBoostModel::fit(&sample, 3, &Options::default())
            .unwrap();
        assert_eq!(model.n_class(), 1);

        let prediction = model.predict(&sample).unwrap();
        assert_eq!(prediction.estimates, vec![1.0; 3]);
        assert_eq!(prediction.decode(model.labels()), vec![7.0; 3]);
    }

    #[test]
    fn non_finite_label_is_rejected() {
        let sample = Sample::from_columns(vec![vec![1.0, 2.0]])
            .unwrap()
            .set_target_values(vec![1.0, f64::NAN])
            .unwrap();
        let err = GentleBoostModel::fit(&sample, 3, &Options::default())
            .unwrap_err();
        assert!(matches!(err, gentleboost::GentleBoostError::NonFiniteTarget { row: 1 }));
    }
}
