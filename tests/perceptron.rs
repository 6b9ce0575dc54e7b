use gentleboost::prelude::*;

/// Tests for `Perceptron`.
#[cfg(test)]
pub mod tests {
    use super::*;

    fn sign_sample() -> Sample {
        let x = vec![-1.5, -1.25, -1.0, -0.75, -0.5, 0.5, 0.75, 1.0, 1.25, 1.5];
        let y = x.iter()
            .map(|&v| if v > 0.0 { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        Sample::from_columns(vec![x])
            .unwrap()
            .set_target_values(y)
            .unwrap()
    }

    #[test]
    fn converges_on_separable_feature() {
        let sample = sign_sample();
        let options = Options::default()
            .kind(WeakLearnerKind::Perceptron)
            .epsilon(1.0)
            .lambda(1e-3)
            .max_iter(3_000)
            .seed(20_240_501);
        let model = GentleBoostModel::fit(&sample, 1, &options).unwrap();
        let prediction = model.predict(&sample).unwrap();

        let n_sample = sample.shape().0 as f64;
        let error = prediction.scores[0].iter()
            .zip(sample.target())
            .map(|(s, y)| (y - s).powi(2))
            .sum::<f64>()
            / n_sample;
        assert!(error < 0.05, "weighted squared error = {error}");
        assert_eq!(prediction.estimates, sample.target().to_vec());
    }

    #[test]
    fn seed_fixes_the_model() {
        let sample = sign_sample();
        let options = Options::default()
            .kind(WeakLearnerKind::Perceptron)
            .max_iter(30)
            .seed(8);
        let m1 = GentleBoostModel::fit(&sample, 4, &options).unwrap();
        let m2 = GentleBoostModel::fit(&sample, 4, &options).unwrap();
        assert_eq!(m1, m2);
        assert_eq!(m1.kind(), WeakLearnerKind::Perceptron);
    }

    #[test]
    fn produce_through_the_weak_learner_trait() {
        let sample = sign_sample();
        let target = sample.target().to_vec();
        let dist = vec![0.1; 10];
        let wl = Perceptron::init(&sample)
            .max_iter(3_000)
            .seed(3);
        let h = wl.produce(&sample, &target, &dist);
        assert_eq!(h.feature_index(), 0);
        assert!(h.scale() > 0.0);
        assert_eq!(wl.name(), "Perceptron");
    }
}
