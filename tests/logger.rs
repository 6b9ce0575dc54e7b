use std::env;
use std::fs;

use gentleboost::prelude::*;
use gentleboost::research::{
    Logger,
    RoundRecord,
    ExponentialObjective,
    zero_one_loss,
};

/// Tests for the research `Logger`.
#[cfg(test)]
pub mod tests {
    use super::*;

    fn toy() -> Sample {
        let x = vec![0.1, 0.7, 0.3, 0.9, 0.2, 0.8, 0.4, 0.6];
        let y = vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0];
        Sample::from_columns(vec![x])
            .unwrap()
            .set_target_values(y)
            .unwrap()
    }

    #[test]
    fn writes_one_line_per_round() {
        let train = toy();
        let booster = GentleBoost::<DecisionStumpRegressor>::init(&train)
            .rounds(5);
        let weak_learner = DecisionStump::init(&train);

        let mut path = env::temp_dir();
        path.push("gentleboost_logger.csv");

        let mut logger = Logger::new(
            booster, weak_learner, ExponentialObjective, zero_one_loss,
            &train, &train,
        )
            .print_every(2)
            .time_limit_as_secs(3600);
        let f = logger.run(&path).unwrap();
        assert_eq!(f.len(), 5);

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let mut lines = log.lines();
        assert_eq!(lines.next(), Some(RoundRecord::CSV_HEADER));
        let rows = lines.collect::<Vec<_>>();
        assert_eq!(rows.len(), 5);
        assert_eq!(logger.history().len(), 5);

        let n_sample = train.shape().0 as f64;
        for (row, record) in rows.iter().zip(logger.history()) {
            let cols = row.split(',')
                .map(|c| c.parse::<f64>().unwrap())
                .collect::<Vec<_>>();
            assert_eq!(cols.len(), 8);
            assert_eq!(cols[0], record.round as f64);
            assert_eq!(cols[1], record.objective);

            assert!(record.objective > 0.0 && record.objective <= 1.0);
            assert!((0.0..=1.0).contains(&record.weighted_error));
            assert!(record.max_weight > 0.0 && record.max_weight <= 1.0);
            assert!(
                record.effective_size >= 1.0
                    && record.effective_size <= n_sample + 1e-9
            );
            assert_eq!(record.train_loss, record.test_loss);
        }

        // The exponential criterion decreases round by round.
        let history = logger.history();
        for pair in history.windows(2) {
            assert!(pair[1].objective <= pair[0].objective + 1e-12);
        }
        // No single cut fits both 0.4 and 0.6, so the weight leaves uniform.
        assert!(history[4].effective_size < n_sample);
    }

    #[test]
    fn time_limit_stops_after_one_round() {
        let train = toy();
        let booster = GentleBoost::<DecisionStumpRegressor>::init(&train)
            .rounds(50);
        let weak_learner = DecisionStump::init(&train);

        let mut path = env::temp_dir();
        path.push("gentleboost_logger_tle.csv");

        let mut logger = Logger::new(
            booster, weak_learner, ExponentialObjective, zero_one_loss,
            &train, &train,
        )
            .print_every(0)
            .time_limit_as_millis(0);
        let f = logger.run(&path).unwrap();

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(f.len(), 1);
        assert_eq!(logger.history().len(), 1);
        assert_eq!(log.lines().count(), 2);
    }
}
